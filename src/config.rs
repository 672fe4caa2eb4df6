use glam::DVec2;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::SceneError;

pub const DEFAULT_RADIUS: f64 = 10.0;
pub const DEFAULT_LENGTH: f64 = 50.0;
pub const DEFAULT_COUNT: u32 = 32;
pub const DEFAULT_OUTPUT: &str = "gen_scene.scene";

/// Parameters of one ring scene. Fields missing from a config file fall back
/// to the defaults.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingConfig {
    /// Radius of the main circle, also scales the size of each cylinder
    pub radius: f64,
    /// Not used by the emitted geometry, cylinders are always written with length 50
    pub length: f64,
    /// Number of angular subdivisions
    pub count: u32,
    pub center: [f64; 2],
    pub output: PathBuf,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            length: DEFAULT_LENGTH,
            count: DEFAULT_COUNT,
            center: [0.0, 0.0],
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RingConfig {
    /// Reads a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SceneError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| SceneError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn center_point(&self) -> DVec2 {
        DVec2::from_array(self.center)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "radius must be a positive number (given {})",
                self.radius
            )));
        }
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "length must be a positive number (given {})",
                self.length
            )));
        }
        if self.count == 0 {
            return Err(SceneError::InvalidConfig(
                "count must be at least 1".to_string(),
            ));
        }
        if !self.center.iter().all(|c| c.is_finite()) {
            return Err(SceneError::InvalidConfig(format!(
                "center must be finite (given {:?})",
                self.center
            )));
        }
        Ok(())
    }
}
