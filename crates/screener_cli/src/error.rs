//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `screener` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Input file is not the expected JSON shape.
    #[error("Invalid input in {path}: {source}")]
    InvalidInput {
        /// Offending file
        path: String,
        /// Decoder error
        #[source]
        source: serde_json::Error,
    },

    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure inside the transforms or exporters.
    #[error(transparent)]
    Screener(#[from] screener_core::ScreenerError),

    /// JSON output failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
