//! Vertex and fragment stages.

use super::{
    bar_color, effective_height, frequency_fraction, height_fraction, quad_corner, BarLayout,
    VertexOutput, VERTICES_PER_BAR,
};

/// Run the vertex stage for one corner of one bar.
///
/// # Panics
///
/// Panics if `instance_index` is not a valid index into `magnitudes`. Hosts
/// must draw at most `magnitudes.len()` instances.
pub fn vertex_stage(
    magnitudes: &[f32],
    num_bars: u32,
    vertex_index: u32,
    instance_index: u32,
) -> VertexOutput {
    let layout = BarLayout::new(num_bars);
    let height = effective_height(magnitudes[instance_index as usize]);
    let [local_x, local_y] = quad_corner(vertex_index, layout.actual_width(), height);

    let freq_t = frequency_fraction(instance_index, num_bars);
    let height_t = height_fraction(local_y, height);

    VertexOutput {
        position: [layout.x_base(instance_index) + local_x, -1.0 + local_y, 0.0, 1.0],
        color: bar_color(freq_t, height_t),
    }
}

/// Run the fragment stage: the interpolated color at full opacity.
pub fn fragment_stage(input: &VertexOutput) -> [f32; 4] {
    let [r, g, b] = input.color;
    [r, g, b, 1.0]
}

/// Expand every bar into its six vertices, in draw order.
///
/// Equivalent to `draw(0..6, 0..n)` with `n = min(magnitudes.len(), num_bars)`.
pub fn generate_vertices(magnitudes: &[f32], num_bars: u32) -> Vec<VertexOutput> {
    if num_bars == 0 {
        return Vec::new();
    }

    let bar_count = magnitudes.len().min(num_bars as usize) as u32;
    let mut vertices = Vec::with_capacity((bar_count * VERTICES_PER_BAR) as usize);

    for instance_index in 0..bar_count {
        for vertex_index in 0..VERTICES_PER_BAR {
            vertices.push(vertex_stage(magnitudes, num_bars, vertex_index, instance_index));
        }
    }

    vertices
}
