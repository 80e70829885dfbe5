//! Bar color gradient.

use super::HEIGHT_FLOOR;

/// Hermite interpolation between `edge0` and `edge1`, as WGSL `smoothstep`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Position of a bar along the spectrum, `0` for the first bar.
pub fn frequency_fraction(instance_index: u32, num_bars: u32) -> f32 {
    instance_index as f32 / num_bars as f32
}

/// Vertical position within a bar, `0` at the bottom and `1` at the top.
///
/// The denominator never drops below `HEIGHT_FLOOR`, so empty bars give 0.
pub fn height_fraction(local_y: f32, height: f32) -> f32 {
    local_y / height.max(HEIGHT_FLOOR)
}

/// RGB color for a vertex, each channel in `[0, 1]`.
pub fn bar_color(freq_t: f32, height_t: f32) -> [f32; 3] {
    let r = smoothstep(0.3, 0.8, freq_t) + 0.35 * height_t;
    let g = (1.0 - freq_t) * 0.5 + 0.5 * height_t;
    let b = 0.7 + 0.3 * height_t;
    let brightness = 0.5 + 0.5 * height_t;

    [r, g, b].map(|channel| channel.clamp(0.0, 1.0) * brightness)
}
