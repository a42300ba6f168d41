//! # MusicConnect Model
//!
//! Data shapes shared between the marketplace front-end and its services.
//!
//! ## Overview
//!
//! Records serialize to camelCase JSON with `serde`. Timestamps are UTC
//! (`chrono`), identifiers are the typed ids from `musicconnect-core`.
//!
//! - [`user`]: accounts, musician and venue profiles, authentication payloads
//! - [`booking`]: bookings, contracts, search filters and results
//! - [`review`]: reviews and aggregate rating statistics
//!
//! The types carry shape-level validation (`validate()`), built on the core
//! validators. They do not drive booking or payment state; status fields are
//! plain data.
//!
//! ```rust
//! use musicconnect_model::review::ReviewStats;
//!
//! let stats = ReviewStats::from_ratings([5, 4, 5]);
//! assert_eq!(stats.total, 3);
//! ```

pub mod booking;
pub mod review;
pub mod user;

pub use booking::{
    Booking, BookingRequest, BookingStatus, Contract, MusicianSearchResult, PaymentStatus,
    SearchFilters, SearchResult,
};
pub use review::{CreateReviewData, RatingDistribution, Review, ReviewStats};
pub use user::{
    AuthResponse, AuthState, LoginCredentials, MusicianProfile, SignupData, SocialLinks, User,
    UserType, VenueProfile, VerificationStatus, VideoLink, VideoPlatform,
};
