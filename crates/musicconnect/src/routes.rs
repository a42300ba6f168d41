//! Application route paths.
//!
//! Templates use `:name` placeholders; the builder functions fill them in.

pub const HOME: &str = "/";

pub mod auth {
    pub const LOGIN: &str = "/auth/login";
    pub const SIGNUP: &str = "/auth/signup";
    pub const FORGOT_PASSWORD: &str = "/auth/forgot-password";
    pub const RESET_PASSWORD: &str = "/auth/reset-password";
}

pub mod musician {
    pub const DASHBOARD: &str = "/musician/dashboard";
    pub const PROFILE_EDIT: &str = "/musician/profile/edit";
    pub const BOOKINGS: &str = "/musician/bookings";
    pub const CALENDAR: &str = "/musician/calendar";
    pub const EARNINGS: &str = "/musician/earnings";
}

pub mod venue {
    pub const DASHBOARD: &str = "/venue/dashboard";
    pub const SEARCH: &str = "/venue/search";
    pub const BOOKINGS: &str = "/venue/bookings";
    pub const FAVORITES: &str = "/venue/favorites";
}

pub mod booking {
    pub const REQUEST: &str = "/booking/request/:artistId";
    pub const DETAILS: &str = "/booking/:bookingId";
    pub const CONTRACT: &str = "/booking/:bookingId/contract";
    pub const PAYMENT: &str = "/booking/:bookingId/payment";
}

/// Public profile pages.
pub mod profile {
    pub const MUSICIAN: &str = "/profile/musician/:id";
    pub const VENUE: &str = "/profile/venue/:id";
}

pub const ABOUT: &str = "/about";
pub const CONTACT: &str = "/contact";
pub const TERMS: &str = "/terms";
pub const PRIVACY: &str = "/privacy";
pub const HELP: &str = "/help";

pub const NOT_FOUND: &str = "/404";
pub const UNAUTHORIZED: &str = "/401";

/// Every route template, for registration and uniqueness checks.
pub const ALL: &[&str] = &[
    HOME,
    auth::LOGIN,
    auth::SIGNUP,
    auth::FORGOT_PASSWORD,
    auth::RESET_PASSWORD,
    musician::DASHBOARD,
    musician::PROFILE_EDIT,
    musician::BOOKINGS,
    musician::CALENDAR,
    musician::EARNINGS,
    venue::DASHBOARD,
    venue::SEARCH,
    venue::BOOKINGS,
    venue::FAVORITES,
    booking::REQUEST,
    booking::DETAILS,
    booking::CONTRACT,
    booking::PAYMENT,
    profile::MUSICIAN,
    profile::VENUE,
    ABOUT,
    CONTACT,
    TERMS,
    PRIVACY,
    HELP,
    NOT_FOUND,
    UNAUTHORIZED,
];

pub fn musician_profile(id: impl std::fmt::Display) -> String {
    format!("/profile/musician/{id}")
}

pub fn venue_profile(id: impl std::fmt::Display) -> String {
    format!("/profile/venue/{id}")
}

pub fn booking_request(artist_id: impl std::fmt::Display) -> String {
    format!("/booking/request/{artist_id}")
}

pub fn booking_details(booking_id: impl std::fmt::Display) -> String {
    format!("/booking/{booking_id}")
}

pub fn booking_contract(booking_id: impl std::fmt::Display) -> String {
    format!("/booking/{booking_id}/contract")
}

pub fn booking_payment(booking_id: impl std::fmt::Display) -> String {
    format!("/booking/{booking_id}/payment")
}
