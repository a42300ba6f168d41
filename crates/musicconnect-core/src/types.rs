//! Strong identifier types for MusicConnect records.
//!
//! All identifiers are newtypes to prevent mixing a user id with a booking
//! id at compile time. The backend owns the id format, so the value is an
//! opaque string and serializes as a plain JSON string. Ids minted locally
//! are 16 random bytes rendered as 32 lowercase hex characters.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Byte length of locally generated identifiers.
pub const ID_LEN: usize = 16;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an id issued elsewhere.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh random identifier.
            pub fn generate() -> Self {
                let mut bytes = [0u8; ID_LEN];
                rand::thread_rng().fill_bytes(&mut bytes);
                Self::from_bytes(bytes)
            }

            /// Hex-encode raw bytes into an identifier.
            pub fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
                Self(hex::encode(bytes))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let short: String = self.0.chars().take(8).collect();
                write!(f, "{}({})", stringify!($name), short)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::new(s))
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifies a user account (musician or venue).
    UserId
);

define_id!(
    /// Identifies a booking between a musician and a venue.
    BookingId
);

define_id!(
    /// Identifies a review left after a booking.
    ReviewId
);

define_id!(
    /// Identifies a payment held or released for a booking.
    PaymentId
);

define_id!(
    /// Identifies a video link on a musician profile.
    VideoId
);
