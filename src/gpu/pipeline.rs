//! Spectrum bars render pipeline.
//!
//! The host owns the magnitude storage buffer and the `Params` uniform
//! buffer; this module compiles the shader, checks the host's buffers
//! against the binding contract and records the instanced draw.

use super::context::{GpuContext, GpuError};
use super::layouts::{create_spectrum_layout, MAGNITUDES_BINDING, PARAMS_BINDING};
use super::params::BarParams;
use super::pipelines::{create_pipeline_layout, RenderPipelineBuilder};
use crate::bars::VERTICES_PER_BAR;
use wgpu::{
    BindGroup, BindGroupLayout, Buffer, BufferUsages, Device, RenderPipeline, TextureFormat,
    TextureView,
};

/// WGSL source of the spectrum bars shader.
pub const SHADER_SOURCE: &str = include_str!("shaders/spectrum_bars.wgsl");

/// Vertex stage entry point.
pub const VERTEX_ENTRY: &str = "vs_main";

/// Fragment stage entry point.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// A bind group whose buffers were checked against `num_bars`.
pub struct BarsBindGroup {
    bind_group: BindGroup,
    num_bars: u32,
}

impl BarsBindGroup {
    pub fn bind_group(&self) -> &BindGroup {
        &self.bind_group
    }

    /// Number of bar instances drawn with this bind group.
    pub fn num_bars(&self) -> u32 {
        self.num_bars
    }
}

/// Compiled spectrum bars pipeline for one color target format.
pub struct SpectrumPipeline {
    pipeline: RenderPipeline,
    bind_group_layout: BindGroupLayout,
    format: TextureFormat,
}

impl SpectrumPipeline {
    /// Compile the shader and build the pipeline.
    ///
    /// The device must support storage buffers in the vertex stage; use
    /// [`SpectrumPipeline::for_context`] to have that checked.
    pub fn new(device: &Device, format: TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("spectrum_bars_shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let bind_group_layout = create_spectrum_layout(device);
        let pipeline_layout =
            create_pipeline_layout(device, "spectrum_pipeline_layout", &[&bind_group_layout]);

        let pipeline = RenderPipelineBuilder::new("spectrum_bars_pipeline", &shader)
            .layout(&pipeline_layout)
            .entry_points(VERTEX_ENTRY, FRAGMENT_ENTRY)
            .format(format)
            .blend(wgpu::BlendState::REPLACE)
            .build(device);

        log::debug!("Created spectrum bars pipeline for {:?}", format);

        Self {
            pipeline,
            bind_group_layout,
            format,
        }
    }

    /// Build the pipeline on `ctx`, failing if the adapter cannot read
    /// storage buffers from the vertex stage.
    pub fn for_context(ctx: &GpuContext, format: TextureFormat) -> Result<Self, GpuError> {
        if !ctx.supports_vertex_storage() {
            return Err(GpuError::VertexStorageUnsupported);
        }
        Ok(Self::new(&ctx.device, format))
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    pub fn bind_group_layout(&self) -> &BindGroupLayout {
        &self.bind_group_layout
    }

    pub fn render_pipeline(&self) -> &RenderPipeline {
        &self.pipeline
    }

    /// Bind the host's magnitude and params buffers.
    ///
    /// `magnitudes` must hold at least `num_bars` f32 values and `params`
    /// at least one [`BarParams`]. They need `STORAGE` and `UNIFORM` usage
    /// respectively. The params buffer content is the host's to keep in sync
    /// with `num_bars`.
    pub fn bind(
        &self,
        device: &Device,
        magnitudes: &Buffer,
        params: &Buffer,
        num_bars: u32,
    ) -> Result<BarsBindGroup, GpuError> {
        check_buffer_sizes(magnitudes.size(), params.size(), num_bars)
            .and_then(|()| check_buffer_usages(magnitudes.usage(), params.usage()))
            .inspect_err(|e| {
                log::warn!("Rejected spectrum bind group: {e}");
            })?;

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("spectrum_bind_group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: MAGNITUDES_BINDING,
                    resource: magnitudes.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: PARAMS_BINDING,
                    resource: params.as_entire_binding(),
                },
            ],
        });

        log::debug!("Bound spectrum buffers for {num_bars} bars");

        Ok(BarsBindGroup {
            bind_group,
            num_bars,
        })
    }

    /// Draw all bars into the current pass: 6 vertices per quad, one
    /// instance per bar.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, bars: &BarsBindGroup) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &bars.bind_group, &[]);
        pass.draw(0..VERTICES_PER_BAR, 0..bars.num_bars);
    }

    /// Record a render pass that clears `view` to `clear` and draws the bars.
    pub fn encode_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &TextureView,
        bars: &BarsBindGroup,
        clear: wgpu::Color,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("spectrum_bars_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        self.draw(&mut pass, bars);
    }
}

/// Check host buffer sizes against the binding contract.
fn check_buffer_sizes(magnitudes: u64, params: u64, num_bars: u32) -> Result<(), GpuError> {
    if num_bars == 0 {
        return Err(GpuError::ZeroBars);
    }

    let required = num_bars as u64 * std::mem::size_of::<f32>() as u64;
    if magnitudes < required {
        return Err(GpuError::MagnitudeBufferTooSmall {
            required,
            actual: magnitudes,
        });
    }

    if params < BarParams::SIZE {
        return Err(GpuError::ParamsBufferTooSmall {
            required: BarParams::SIZE,
            actual: params,
        });
    }

    Ok(())
}

/// Check host buffer usages against the bind group layout.
fn check_buffer_usages(magnitudes: BufferUsages, params: BufferUsages) -> Result<(), GpuError> {
    if !magnitudes.contains(BufferUsages::STORAGE) {
        return Err(GpuError::MissingBufferUsage {
            buffer: "Magnitude",
            required: BufferUsages::STORAGE,
        });
    }
    if !params.contains(BufferUsages::UNIFORM) {
        return Err(GpuError::MissingBufferUsage {
            buffer: "Params",
            required: BufferUsages::UNIFORM,
        });
    }
    Ok(())
}
