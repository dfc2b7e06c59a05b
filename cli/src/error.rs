//! CLI error types

use thiserror::Error;

/// Errors raised by the CLI itself
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Generator(#[from] seeded_mock_core::RngError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
