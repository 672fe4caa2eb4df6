use glam::DVec3;
use std::f64::consts::PI;

use crate::config::RingConfig;
use crate::error::SceneError;
use crate::math::CirclePoints;
use crate::types::{Cylinder, Material, SceneRecord};

use super::common::sweep_color;

/// Height at which every cylinder base sits
pub const RING_Z: f64 = -10.0;
/// Length written for every cylinder, independent of `RingConfig::length`
pub const EMITTED_LENGTH: f64 = 50.0;

/// Half the arc length between two neighbouring points of the ring
pub fn subcylinder_radius(config: &RingConfig) -> f64 {
    (PI * config.radius) / config.count as f64 / 2.0
}

/// Builds the records of a ring scene: `count + 1` cylinders evenly spread
/// around the circle, colored by a hue sweep from red back to red.
///
/// Records are produced lazily in point order.
pub fn generate_ring_scene(
    config: &RingConfig,
) -> Result<impl ExactSizeIterator<Item = SceneRecord>, SceneError> {
    config.validate()?;

    let count = config.count;
    let radius = subcylinder_radius(config);
    if config.length != EMITTED_LENGTH {
        log::warn!(
            "length {} is not used, cylinders are written with length {}",
            config.length,
            EMITTED_LENGTH
        );
    }
    log::debug!(
        "Generating ring scene: radius={} count={} center={:?} subcylinder radius={:.4}",
        config.radius,
        count,
        config.center,
        radius
    );

    let points = CirclePoints::new(config.center_point(), config.radius, count);
    Ok(points.enumerate().map(move |(index, point)| SceneRecord {
        material: Material::RING.with_diffuse(sweep_color(index as u32, count)),
        cylinder: Cylinder {
            center: point.extend(RING_Z),
            axis: DVec3::Z,
            radius,
            length: EMITTED_LENGTH,
        },
    }))
}
