//! GPU side of the spectrum bars visualizer using wgpu.
//!
//! Provides the WGSL shader, its bind group layout and render pipeline,
//! and headless render targets with CPU readback. Magnitude and params
//! buffers stay with the host.

pub mod context;
pub mod layouts;
pub mod params;
pub mod pipeline;
pub mod pipelines;
pub mod textures;

pub use context::{GpuContext, GpuError};
pub use layouts::{MAGNITUDES_BINDING, PARAMS_BINDING};
pub use params::BarParams;
pub use pipeline::{BarsBindGroup, SpectrumPipeline, FRAGMENT_ENTRY, SHADER_SOURCE, VERTEX_ENTRY};
pub use textures::{ReadbackBuffer, RenderTarget};
