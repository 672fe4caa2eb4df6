mod common;
pub mod ring;

pub use common::{sweep_color, sweep_hue};
pub use ring::{generate_ring_scene, subcylinder_radius};
