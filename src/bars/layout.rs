//! Horizontal slot layout and quad geometry.

use super::{GAP_RATIO, MAX_MAGNITUDE};

/// Even division of clip-space x in `[-1, 1]` into `num_bars` slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    num_bars: u32,
    slot_width: f32,
    actual_width: f32,
}

impl BarLayout {
    /// Layout for `num_bars` bars.
    ///
    /// `num_bars` must be non-zero; with zero bars there is nothing to draw
    /// and the slot width is infinite.
    pub fn new(num_bars: u32) -> Self {
        debug_assert!(num_bars > 0, "BarLayout needs at least one bar");
        let slot_width = 2.0 / num_bars as f32;
        Self {
            num_bars,
            slot_width,
            actual_width: slot_width * (1.0 - GAP_RATIO),
        }
    }

    pub fn num_bars(&self) -> u32 {
        self.num_bars
    }

    /// Width of one slot in clip-space units.
    pub fn slot_width(&self) -> f32 {
        self.slot_width
    }

    /// Drawn width of a bar: the slot minus the gap.
    pub fn actual_width(&self) -> f32 {
        self.actual_width
    }

    /// Left edge of bar `instance_index`, centred in its slot.
    pub fn x_base(&self, instance_index: u32) -> f32 {
        -1.0 + instance_index as f32 * self.slot_width + self.slot_width * GAP_RATIO * 0.5
    }

    /// Left and right clip-space edges of bar `instance_index`.
    pub fn x_range(&self, instance_index: u32) -> (f32, f32) {
        let left = self.x_base(instance_index);
        (left, left + self.actual_width)
    }
}

/// Bar height for a raw magnitude, clamped to `[0, MAX_MAGNITUDE]`.
///
/// Written as max-then-min so a NaN magnitude draws as an empty bar.
pub fn effective_height(magnitude: f32) -> f32 {
    magnitude.max(0.0).min(MAX_MAGNITUDE)
}

/// Local corner for `vertex_index` of a `width` x `height` quad.
///
/// Indices 0..6 form the triangles (0,1,2) and (3,4,5); index 3 repeats 0
/// and index 4 repeats 2. Anything else maps to the origin.
pub fn quad_corner(vertex_index: u32, width: f32, height: f32) -> [f32; 2] {
    match vertex_index {
        0 => [0.0, 0.0],
        1 => [width, 0.0],
        2 => [width, height],
        3 => [0.0, 0.0],
        4 => [width, height],
        5 => [0.0, height],
        _ => [0.0, 0.0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bar_fills_centre_of_clip_space() {
        let layout = BarLayout::new(1);
        assert_eq!(layout.slot_width(), 2.0);
        assert!((layout.actual_width() - 1.7).abs() < 1e-6);
        let (left, right) = layout.x_range(0);
        assert!((left + 0.85).abs() < 1e-6);
        assert!((right - 0.85).abs() < 1e-6);
    }

    #[test]
    fn test_gap_is_split_evenly() {
        let layout = BarLayout::new(8);
        for i in 0..8 {
            let slot_left = -1.0 + i as f32 * layout.slot_width();
            let slot_right = slot_left + layout.slot_width();
            let (left, right) = layout.x_range(i);
            let left_gap = left - slot_left;
            let right_gap = slot_right - right;
            assert!((left_gap - right_gap).abs() < 1e-5, "bar {i} gap not centred");
            assert!((left_gap - layout.slot_width() * 0.075).abs() < 1e-5);
        }
    }

    #[test]
    fn test_effective_height_clamps() {
        assert_eq!(effective_height(-1.0), 0.0);
        assert_eq!(effective_height(0.25), 0.25);
        assert_eq!(effective_height(3.0), 2.0);
        assert_eq!(effective_height(f32::INFINITY), 2.0);
        assert_eq!(effective_height(f32::NAN), 0.0);
    }

    #[test]
    fn test_quad_corner_table() {
        assert_eq!(quad_corner(1, 0.5, 1.0), [0.5, 0.0]);
        assert_eq!(quad_corner(5, 0.5, 1.0), [0.0, 1.0]);
        assert_eq!(quad_corner(6, 0.5, 1.0), [0.0, 0.0]);
        assert_eq!(quad_corner(u32::MAX, 0.5, 1.0), [0.0, 0.0]);
    }
}
