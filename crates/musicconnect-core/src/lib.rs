//! # MusicConnect Core
//!
//! Pure primitives shared across the MusicConnect marketplace: identity
//! number checksums, form validators, display formatters and catalogs.
//!
//! This crate contains no I/O, no storage, no networking.
//!
//! ## Key Items
//!
//! - [`is_valid_identity`] - CPF checksum validation, `true`/`false` for any input
//! - [`Cpf`] - A validated identity number
//! - [`UserId`], [`BookingId`], [`ReviewId`] - Strongly typed record identifiers
//!
//! ## Identity numbers
//!
//! ```rust
//! use musicconnect_core::{is_valid_identity, Cpf};
//!
//! assert!(is_valid_identity("529.982.247-25"));
//! assert!(!is_valid_identity("52998224700"));
//!
//! let cpf: Cpf = "52998224725".parse().unwrap();
//! assert_eq!(cpf.to_string(), "529.982.247-25");
//! ```

pub mod catalog;
pub mod error;
pub mod format;
pub mod identity;
pub mod types;
pub mod validation;

pub use catalog::{
    is_music_genre, is_venue_type, state_by_code, BrazilianState, BRAZILIAN_STATES, MUSIC_GENRES,
    VENUE_TYPES,
};
pub use error::{FormatError, IdentityError, ValidationError};
pub use format::{
    format_currency, format_date, format_date_time, format_phone, format_relative_time,
    format_relative_time_at, initials, parse_timestamp, pluralize, truncate,
};
pub use identity::{canonical_digits, check_digit, is_valid_cpf, is_valid_identity, Cpf};
pub use types::{BookingId, PaymentId, ReviewId, UserId, VideoId};
pub use validation::{
    is_strong_password, is_valid_email, is_valid_future_date, is_valid_future_date_at,
    is_valid_phone, is_valid_price_range, is_valid_url, password_strength, PasswordAssessment,
    PasswordStrength,
};
