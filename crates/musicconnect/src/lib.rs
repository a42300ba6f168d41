//! # MusicConnect
//!
//! The shared layer of the MusicConnect marketplace, where venues book
//! musicians for live shows.
//!
//! ## Overview
//!
//! - **Identity numbers**: CPF checksum validation ([`is_valid_identity`])
//! - **Validators**: email, phone, URL, password strength, price ranges
//! - **Formatters**: currency in reais, Brazilian dates, relative times
//! - **Data shapes**: users, profiles, bookings, reviews ([`model`])
//! - **Routes**: application paths and builders ([`routes`])
//! - **Configuration**: environment-driven [`AppConfig`]
//!
//! ## Usage
//!
//! ```rust
//! use musicconnect::{is_valid_identity, routes, AppConfig};
//!
//! assert!(is_valid_identity("529.982.247-25"));
//! assert_eq!(routes::musician_profile("abc"), "/profile/musician/abc");
//!
//! let config = AppConfig::from_lookup(|_| None).unwrap();
//! assert!(config.validate().is_ok());
//! ```
//!
//! ## Re-exports
//!
//! - `musicconnect::core` - Identity, validators, formatters, catalogs
//! - `musicconnect::model` - Serializable data shapes

pub mod config;
pub mod error;
pub mod routes;

// Re-export component crates
pub use musicconnect_core as core;
pub use musicconnect_model as model;

pub use config::{AppConfig, Environment};
pub use error::{AppError, ConfigError, Result};

// Re-export commonly used core items
pub use musicconnect_core::{
    format_currency, format_date, format_date_time, format_phone, format_relative_time,
    initials, is_strong_password, is_valid_cpf, is_valid_email, is_valid_identity,
    is_valid_phone, is_valid_price_range, is_valid_url, parse_timestamp, password_strength,
    pluralize, truncate, BookingId, Cpf, FormatError, IdentityError, PasswordStrength, ReviewId,
    UserId, ValidationError,
};
