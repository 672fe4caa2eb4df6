use crate::types::Color;

/// Hue of the `index`-th object of a sweep over `count` subdivisions.
/// Computed directly rather than accumulated, so `index == count` is exactly 1.0.
pub fn sweep_hue(index: u32, count: u32) -> f64 {
    index as f64 / count as f64
}

pub fn sweep_color(index: u32, count: u32) -> Color {
    crate::math::hsv_to_rgb(sweep_hue(index, count), 1.0, 1.0)
}
