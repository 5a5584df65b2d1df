use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FieldError>;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Unknown preset position: {name}")]
    UnknownPreset { name: String },

    #[error("Malformed field snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("Invalid coordinate for {name}: ({x}, {y})")]
    InvalidCoordinate { name: String, x: f64, y: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for FieldError {
    fn from(err: serde_json::Error) -> Self {
        FieldError::MalformedSnapshot(err.to_string())
    }
}

impl From<toml::de::Error> for FieldError {
    fn from(err: toml::de::Error) -> Self {
        FieldError::Config(format!("TOML parse error: {}", err))
    }
}
