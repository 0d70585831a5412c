use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not a supported source file: {path} (expected extension: {expected})")]
    InvalidFileType { path: PathBuf, expected: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StyleGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
