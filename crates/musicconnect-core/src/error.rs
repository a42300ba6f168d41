//! Error types for MusicConnect Core.

use thiserror::Error;

/// Reasons an identity number (CPF) is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("identity number must have 11 digits, got {0}")]
    WrongLength(usize),

    #[error("identity number is a single repeated digit")]
    RepeatedDigits,

    #[error("check digit {position} mismatch: expected {expected}, found {found}")]
    CheckDigitMismatch { position: usize, expected: u8, found: u8 },
}

/// Field validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("password does not meet strength requirements")]
    WeakPassword,

    #[error("invalid price range: min {min}, max {max}")]
    InvalidPriceRange { min: f64, max: f64 },

    #[error("date must be in the future")]
    DateNotInFuture,

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    #[error("unknown music genre: {0}")]
    UnknownGenre(String),

    #[error("unknown venue type: {0}")]
    UnknownVenueType(String),

    #[error("unknown state code: {0}")]
    UnknownState(String),

    #[error("invalid identity number: {0}")]
    InvalidIdentity(#[from] IdentityError),

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("{field} is out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

/// Errors from parsing display-layer input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unrecognized timestamp: {0}")]
    InvalidTimestamp(String),
}
