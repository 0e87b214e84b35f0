//! Errors raised at load boundaries. Rendering itself never fails.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("level {0:?} has no tiles")]
    Empty(String),
    #[error("unknown level format: {0}")]
    UnknownFormat(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("texture path is not UTF-8: {0}")]
    NonUtf8Path(PathBuf),
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: raylib::core::error::Error,
    },
    #[error("{path} decoded to {got} pixels, expected {expected}")]
    PixelCount {
        path: PathBuf,
        got: usize,
        expected: usize,
    },
}
