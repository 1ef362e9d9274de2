use std::path::PathBuf;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum StructureError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No root folder selected")]
    MissingRoot,

    #[error("No output file path selected")]
    MissingOutput,

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

impl StructureError {
    /// True for errors raised while validating inputs, before any output exists.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            StructureError::MissingRoot
                | StructureError::MissingOutput
                | StructureError::PathNotFound(_)
                | StructureError::NotADirectory(_)
        )
    }
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StructureError>;
