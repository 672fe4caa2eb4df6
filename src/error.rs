use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The scene file could not be created, written or moved into place.
    #[error("failed to write scene file {path:?} -> {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid ring configuration -> {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {path:?} -> {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path:?} -> {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: unknown directive '{tag}'")]
    UnknownDirective { line: usize, tag: String },

    #[error("line {line}: {reason}")]
    InvalidDirective { line: usize, reason: String },
}
