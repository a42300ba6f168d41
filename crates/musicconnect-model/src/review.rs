//! Reviews left by either party after a booking, and rating statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use musicconnect_core::{BookingId, ReviewId, UserId, ValidationError};

/// Lowest accepted star rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted star rating.
pub const MAX_RATING: u8 = 5;

fn require_rating(rating: u8) -> Result<(), ValidationError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(ValidationError::InvalidRating(rating))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub booking_id: BookingId,
    pub reviewer_id: UserId,
    pub reviewee_id: UserId,
    /// 1 to 5 stars.
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_rating(self.rating)
    }
}

/// Form payload for submitting a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewData {
    pub booking_id: BookingId,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CreateReviewData {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_rating(self.rating).map_err(|e| {
            tracing::debug!(booking_id = %self.booking_id, rating = self.rating, "review rejected");
            e
        })
    }
}

/// Count of reviews per star value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RatingDistribution {
    #[serde(rename = "1")]
    pub one: u32,
    #[serde(rename = "2")]
    pub two: u32,
    #[serde(rename = "3")]
    pub three: u32,
    #[serde(rename = "4")]
    pub four: u32,
    #[serde(rename = "5")]
    pub five: u32,
}

impl RatingDistribution {
    /// Number of reviews with `stars`, or `None` outside 1-5.
    pub fn get(&self, stars: u8) -> Option<u32> {
        match stars {
            1 => Some(self.one),
            2 => Some(self.two),
            3 => Some(self.three),
            4 => Some(self.four),
            5 => Some(self.five),
            _ => None,
        }
    }

    fn slot(&mut self, stars: u8) -> Option<&mut u32> {
        match stars {
            1 => Some(&mut self.one),
            2 => Some(&mut self.two),
            3 => Some(&mut self.three),
            4 => Some(&mut self.four),
            5 => Some(&mut self.five),
            _ => None,
        }
    }
}

/// Aggregate rating of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewStats {
    /// Mean rating; 0 when there are no reviews.
    pub average: f64,
    pub total: u32,
    pub distribution: RatingDistribution,
}

impl ReviewStats {
    /// Aggregate star ratings. Values outside 1-5 are skipped.
    pub fn from_ratings<I>(ratings: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let mut stats = Self::default();
        let mut sum = 0u64;

        for rating in ratings {
            let Some(slot) = stats.distribution.slot(rating) else {
                tracing::warn!(rating, "skipping out-of-range rating");
                continue;
            };
            *slot += 1;
            stats.total += 1;
            sum += u64::from(rating);
        }

        if stats.total > 0 {
            stats.average = sum as f64 / f64::from(stats.total);
        }
        stats
    }

    pub fn from_reviews<'a, I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = &'a Review>,
    {
        Self::from_ratings(reviews.into_iter().map(|r| r.rating))
    }
}
