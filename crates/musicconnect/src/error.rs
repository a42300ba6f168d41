//! Error types for the MusicConnect facade.

use musicconnect_core::{FormatError, IdentityError, ValidationError};
use thiserror::Error;

/// Configuration problems found at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Variables required in production are unset or empty.
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVariables(Vec<&'static str>),

    /// A variable is set to a value that cannot be used.
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Errors surfaced by the MusicConnect shared layer.
#[derive(Debug, Error)]
pub enum AppError {
    /// Field or record validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration is unusable.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Display-layer input could not be parsed.
    #[error("format error: {0}")]
    Format(#[from] FormatError),
}

impl From<IdentityError> for AppError {
    fn from(e: IdentityError) -> Self {
        AppError::Validation(ValidationError::InvalidIdentity(e))
    }
}

/// Result type for MusicConnect operations.
pub type Result<T> = std::result::Result<T, AppError>;
