//! Bookings, contracts and musician search.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use musicconnect_core::validation::{require_future_date_at, require_non_empty, require_price_range};
use musicconnect_core::{BookingId, PaymentId, UserId, ValidationError};

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Disputed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 5] = [
        Self::Pending,
        Self::Confirmed,
        Self::Completed,
        Self::Cancelled,
        Self::Disputed,
    ];

    /// The wire name, as used in JSON and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Disputed => "disputed",
        }
    }

    /// Parse a wire name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

/// Where the booking payment sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Held,
    Released,
    Refunded,
}

/// A confirmed or in-progress engagement of a musician by a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub musician_id: UserId,
    pub venue_id: UserId,

    // Event details
    pub event_date: DateTime<Utc>,
    /// Local start time, `HH:MM`.
    pub event_time: String,
    /// Length of the performance in hours.
    pub duration: f64,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_description: Option<String>,

    // Pricing, in reais
    pub agreed_price: f64,
    pub platform_fee: f64,
    pub total_amount: f64,

    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_accepted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<PaymentId>,
    pub payment_status: PaymentStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A venue's request to book a musician.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub musician_id: UserId,
    pub event_date: DateTime<Utc>,
    pub event_time: String,
    pub duration: f64,
    pub location: String,
    pub event_description: String,
    pub offered_price: f64,
}

impl BookingRequest {
    /// Check the request against the clock at `now`.
    pub fn validate_at(&self, now: &DateTime<Utc>) -> Result<(), ValidationError> {
        self.check(now).map_err(|e| {
            tracing::debug!(musician_id = %self.musician_id, error = %e, "booking request rejected");
            e
        })
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_at(&Utc::now())
    }

    fn check(&self, now: &DateTime<Utc>) -> Result<(), ValidationError> {
        require_future_date_at(&self.event_date, now)?;
        require_non_empty("location", &self.location)?;
        if self.duration.is_nan() || self.duration <= 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "duration",
                reason: format!("{} hours is not positive", self.duration),
            });
        }
        if self.offered_price.is_nan() || self.offered_price < 0.0 {
            return Err(ValidationError::OutOfRange {
                field: "offeredPrice",
                reason: format!("{} is negative", self.offered_price),
            });
        }
        Ok(())
    }
}

/// The performance contract attached to a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub booking_id: BookingId,
    pub terms: String,
    pub musician_accepted: bool,
    pub venue_accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub musician_accepted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_accepted_at: Option<DateTime<Utc>>,
    pub generated_at: DateTime<Utc>,
}

impl Contract {
    /// Both parties have accepted.
    pub fn is_fully_accepted(&self) -> bool {
        self.musician_accepted && self.venue_accepted
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────────────────────────

/// Filters a venue applies when searching for musicians. All optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_only: Option<bool>,
}

impl SearchFilters {
    /// A price filter needs both bounds in order when both are given.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match (self.price_min, self.price_max) {
            (Some(min), Some(max)) => require_price_range(min, max),
            (Some(min), None) => require_price_range(min, f64::INFINITY),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicianSearchResult {
    pub user_id: UserId,
    pub stage_name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub price_min: f64,
    pub price_max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub rating_average: f64,
    pub rating_count: u32,
    pub total_shows: u32,
    pub verified: bool,
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub musicians: Vec<MusicianSearchResult>,
    pub total: u64,
    /// 1-indexed page number.
    pub page: u32,
    pub page_size: u32,
}

impl SearchResult {
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.page_size))
    }

    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn request() -> BookingRequest {
        BookingRequest {
            musician_id: UserId::from_bytes([7; 16]),
            event_date: now() + Duration::days(14),
            event_time: "21:00".into(),
            duration: 2.5,
            location: "Rua da Moeda, Recife".into(),
            event_description: "Sexta de forró".into(),
            offered_price: 900.0,
        }
    }

    #[test]
    fn test_booking_status_wire_names() {
        for status in BookingStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse("archived"), None);
    }

    #[test]
    fn test_booking_request_valid() {
        assert!(request().validate_at(&now()).is_ok());
    }

    #[test]
    fn test_booking_request_past_date() {
        let mut r = request();
        r.event_date = now() - Duration::hours(1);
        assert_eq!(r.validate_at(&now()), Err(ValidationError::DateNotInFuture));
    }

    #[test]
    fn test_booking_request_bad_numbers() {
        let mut r = request();
        r.duration = 0.0;
        assert!(matches!(
            r.validate_at(&now()),
            Err(ValidationError::OutOfRange { field: "duration", .. })
        ));

        let mut r = request();
        r.offered_price = -10.0;
        assert!(matches!(
            r.validate_at(&now()),
            Err(ValidationError::OutOfRange { field: "offeredPrice", .. })
        ));
    }

    #[test]
    fn test_contract_acceptance() {
        let mut c = Contract {
            booking_id: BookingId::from_bytes([9; 16]),
            terms: "2 sets de 1h".into(),
            musician_accepted: true,
            venue_accepted: false,
            musician_accepted_at: Some(now()),
            venue_accepted_at: None,
            generated_at: now(),
        };
        assert!(!c.is_fully_accepted());
        c.venue_accepted = true;
        assert!(c.is_fully_accepted());
    }

    #[test]
    fn test_search_filters() {
        assert!(SearchFilters::default().validate().is_ok());

        let filters = SearchFilters {
            price_min: Some(500.0),
            price_max: Some(200.0),
            ..SearchFilters::default()
        };
        assert!(filters.validate().is_err());

        let json = serde_json::to_value(SearchFilters {
            verified_only: Some(true),
            ..SearchFilters::default()
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "verifiedOnly": true }));
    }

    #[test]
    fn test_search_paging() {
        let page = SearchResult {
            musicians: vec![],
            total: 41,
            page: 2,
            page_size: 20,
        };
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next_page());

        let empty = SearchResult {
            musicians: vec![],
            total: 0,
            page: 1,
            page_size: 0,
        };
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_next_page());
    }
}
