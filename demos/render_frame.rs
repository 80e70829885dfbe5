//! Example: Render one spectrum frame to a PNG.
//!
//! Plays the host role: allocates the magnitude and params buffers, fills
//! them with a synthetic spectrum and reads the frame back.
//!
//! Run with:
//!     cargo run --example render_frame -- [config.json] [output.png]

use anyhow::{bail, Context, Result};
use spectrum_bars::config::BarsConfig;
use spectrum_bars::gpu::{BarParams, GpuContext, ReadbackBuffer, RenderTarget, SpectrumPipeline};
use wgpu::util::DeviceExt;

const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// A falling spectrum with a couple of peaks, overshooting the cap near the low end.
fn synthetic_magnitudes(num_bars: u32) -> Vec<f32> {
    (0..num_bars)
        .map(|i| {
            let t = i as f32 / num_bars as f32;
            let slope = 2.2 * (1.0 - t).powi(2);
            let peak = 0.8 * (-((t - 0.45) * 12.0).powi(2)).exp();
            let ripple = 0.15 * (t * 40.0).sin().abs();
            slope + peak + ripple
        })
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => BarsConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => BarsConfig::default(),
    };
    let output = args.next().unwrap_or_else(|| "spectrum_bars.png".to_string());

    println!("Spectrum Bars - Single Frame Example");
    println!("====================================\n");
    println!("  Resolution: {}x{}", config.width, config.height);
    println!("  Bars: {}", config.num_bars);

    let ctx = pollster::block_on(GpuContext::new())?;
    println!("  GPU: {}\n", ctx.adapter_info().name);

    let pipeline = SpectrumPipeline::for_context(&ctx, FORMAT)?;

    let magnitudes = synthetic_magnitudes(config.num_bars);
    let magnitude_buffer = ctx
        .device
        .create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("magnitudes"),
            contents: bytemuck::cast_slice(&magnitudes),
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        });
    let params_buffer = ctx
        .device
        .create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("params"),
            contents: bytemuck::bytes_of(&BarParams::new(config.num_bars)),
            usage: wgpu::BufferUsages::UNIFORM,
        });

    let bars = pipeline.bind(&ctx.device, &magnitude_buffer, &params_buffer, config.num_bars)?;

    let target = RenderTarget::for_output(&ctx.device, "frame", config.width, config.height, FORMAT);
    let readback = ReadbackBuffer::for_target(&ctx.device, &target);

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame_encoder"),
        });
    pipeline.encode_pass(&mut encoder, target.view(), &bars, config.clear_color()?);
    readback.copy_from(&mut encoder, &target);
    ctx.queue.submit(std::iter::once(encoder.finish()));

    let pixels = readback.read_pixels(&ctx.device)?;
    let Some(image) = image::RgbaImage::from_raw(config.width, config.height, pixels) else {
        bail!("readback size does not match {}x{}", config.width, config.height);
    };
    image
        .save(&output)
        .with_context(|| format!("writing {output}"))?;

    println!("Wrote {}", output);
    Ok(())
}
