//! Spectrum Bars
//!
//! GPU shader that draws an audio spectrum as a row of colored bars, one
//! instanced quad per magnitude.
//!
//! # Features
//!
//! - WGSL vertex + fragment program (`gpu::SHADER_SOURCE`)
//! - CPU reference of the shader math for testing and CPU-side geometry
//! - wgpu pipeline, bind group layout and buffer contract checks
//! - Headless render targets with pixel readback
//! - JSON configuration via serde
//!
//! Producing the magnitudes (capture, FFT, smoothing) and owning the
//! magnitude/params buffers are left to the host.

pub mod bars;
pub mod config;
pub mod gpu;

// Re-export commonly used types
pub use bars::{
    fragment_stage, generate_vertices, vertex_stage, BarLayout, VertexOutput, GAP_RATIO,
    HEIGHT_FLOOR, MAX_MAGNITUDE, VERTICES_PER_BAR,
};
pub use config::{parse_hex_color, BarsConfig, ConfigError};
pub use gpu::{
    BarParams, BarsBindGroup, GpuContext, GpuError, ReadbackBuffer, RenderTarget,
    SpectrumPipeline,
};
