use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read config file {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    #[error("Failed to serialize cast: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TourError>;
