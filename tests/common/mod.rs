//! Shared host fixture for GPU tests: owns the buffers a real host would.

use spectrum_bars::gpu::{
    BarParams, BarsBindGroup, GpuContext, ReadbackBuffer, RenderTarget, SpectrumPipeline,
};
use wgpu::util::DeviceExt;

pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

pub struct TestHost {
    pub ctx: GpuContext,
    pub pipeline: SpectrumPipeline,
    pub magnitudes: wgpu::Buffer,
    pub params: wgpu::Buffer,
    pub target: RenderTarget,
    pub readback: ReadbackBuffer,
    pub num_bars: u32,
}

impl TestHost {
    /// Set up a host, or `None` when no usable adapter is present.
    pub async fn new(num_bars: u32, width: u32, height: u32) -> Option<Self> {
        let ctx = match GpuContext::new().await {
            Ok(ctx) => ctx,
            Err(e) => {
                eprintln!("Skipping test - GPU not available: {}", e);
                return None;
            }
        };
        let pipeline = match SpectrumPipeline::for_context(&ctx, FORMAT) {
            Ok(pipeline) => pipeline,
            Err(e) => {
                eprintln!("Skipping test - {}", e);
                return None;
            }
        };

        let magnitudes = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("test_magnitudes"),
            size: (num_bars as usize * std::mem::size_of::<f32>()) as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let params = ctx
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("test_params"),
                contents: bytemuck::bytes_of(&BarParams::new(num_bars)),
                usage: wgpu::BufferUsages::UNIFORM,
            });

        let target = RenderTarget::for_output(&ctx.device, "test_target", width, height, FORMAT);
        let readback = ReadbackBuffer::for_target(&ctx.device, &target);

        Some(Self {
            ctx,
            pipeline,
            magnitudes,
            params,
            target,
            readback,
            num_bars,
        })
    }

    pub fn bind(&self) -> BarsBindGroup {
        self.pipeline
            .bind(&self.ctx.device, &self.magnitudes, &self.params, self.num_bars)
            .expect("test buffers should satisfy the binding contract")
    }

    /// Upload `magnitudes`, draw one frame on black and read it back.
    pub fn render(&self, magnitudes: &[f32]) -> Vec<u8> {
        self.ctx
            .queue
            .write_buffer(&self.magnitudes, 0, bytemuck::cast_slice(magnitudes));

        let bars = self.bind();
        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("test_encoder"),
            });
        self.pipeline
            .encode_pass(&mut encoder, self.target.view(), &bars, wgpu::Color::BLACK);
        self.readback.copy_from(&mut encoder, &self.target);
        self.ctx.queue.submit(std::iter::once(encoder.finish()));

        self.readback
            .read_pixels(&self.ctx.device)
            .expect("readback should succeed")
    }
}

/// RGBA of the pixel at column `x`, row `y` (row 0 at the top).
pub fn pixel(pixels: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
}

pub fn is_black(p: [u8; 4]) -> bool {
    p[0] < 5 && p[1] < 5 && p[2] < 5
}
