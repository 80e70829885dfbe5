//! CPU reference of the spectrum bars shader.
//!
//! Mirrors `gpu/shaders/spectrum_bars.wgsl` in plain f32 arithmetic so the
//! bar layout, clamping and color gradient can be checked without a GPU:
//! - Layout: even slots across clip-space x, 7.5% gap on each side of a bar
//! - Height: magnitude clamped to `[0, MAX_MAGNITUDE]`, bars grow up from y = -1
//! - Color: frequency/height gradient, brightened toward each bar's top

mod gradient;
mod layout;
mod stages;

pub use gradient::{bar_color, frequency_fraction, height_fraction, smoothstep};
pub use layout::{effective_height, quad_corner, BarLayout};
pub use stages::{fragment_stage, generate_vertices, vertex_stage};

/// Fraction of each slot left empty between neighbouring bars.
pub const GAP_RATIO: f32 = 0.15;

/// Magnitudes above this are drawn at this height (full clip-space height).
pub const MAX_MAGNITUDE: f32 = 2.0;

/// Lower bound on the height used to normalise `height_t`.
pub const HEIGHT_FLOOR: f32 = 0.001;

/// Two triangles per bar.
pub const VERTICES_PER_BAR: u32 = 6;

/// Per-vertex output of the vertex stage, consumed by the fragment stage.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct VertexOutput {
    /// Clip-space position.
    pub position: [f32; 4],
    pub color: [f32; 3],
}
