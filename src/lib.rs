pub mod cli;
pub mod config;
pub mod error;
pub mod loaders;
pub mod math;
pub mod scenes;
pub mod types;
pub mod writer;

pub use config::RingConfig;
pub use error::SceneError;
pub use scenes::generate_ring_scene;
pub use writer::{render_scene, write_records, write_scene};
