//! Unified error types for stylemap.

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Emit error: {0}")]
    Emit(#[from] EmitError),
}

/// Configuration and manifest errors. Always fatal for a build.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// A single stylesheet could not be read.
///
/// Never fatal: the entry is dropped from the map and the build goes on.
#[derive(Debug, Error)]
#[error("Failed to read stylesheet {}: {source}", .path.display())]
pub struct FileReadError {
    /// Manifest entry as written
    pub file_name: String,
    /// Resolved path that was read
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Failure writing the generated module
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("Cannot write output {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode string literal: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to format module: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for configuration and manifest loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for emitting the generated module
pub type EmitResult<T> = std::result::Result<T, EmitError>;
