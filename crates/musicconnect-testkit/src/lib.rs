//! # MusicConnect Testkit
//!
//! Testing utilities for the MusicConnect shared layer.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known CPF inputs with the verdict every client must reach
//! - **Generators**: Proptest strategies for identity numbers, ids and ratings
//! - **Fixtures**: Deterministic musician, venue and booking records
//!
//! ## Golden Vectors
//!
//! ```rust
//! use musicconnect_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, _) in verify_all_vectors() {
//!     assert!(matches, "{name}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use musicconnect_testkit::generators::punctuated_cpf;
//!
//! proptest! {
//!     #[test]
//!     fn filler_is_ignored((cpf, text) in punctuated_cpf()) {
//!         prop_assert!(musicconnect_core::is_valid_identity(&text));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use musicconnect_testkit::fixtures::MarketplaceFixture;
//!
//! let fixture = MarketplaceFixture::new();
//! let request = fixture.booking_request(7);
//! assert!(request.validate_at(&fixture.now).is_ok());
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{fixed_now, multi_party_fixtures, MarketplaceFixture};
pub use generators::{punctuated_cpf, valid_cpf};
pub use vectors::{all_vectors, verify_all_vectors, IdentityVector};
