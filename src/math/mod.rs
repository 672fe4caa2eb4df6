mod circle;
mod color;

pub use circle::CirclePoints;
pub use color::hsv_to_rgb;
