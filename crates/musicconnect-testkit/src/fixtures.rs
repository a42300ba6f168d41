//! Test fixtures and helpers.
//!
//! Deterministic sample records for integration tests: a musician, a venue
//! and a fixed clock.

use chrono::{DateTime, Duration, TimeZone, Utc};

use musicconnect_core::types::ID_LEN;
use musicconnect_core::{BookingId, ReviewId, UserId, VideoId};
use musicconnect_model::{
    Booking, BookingRequest, BookingStatus, MusicianProfile, PaymentStatus, Review, SocialLinks,
    User, UserType, VenueProfile, VerificationStatus, VideoLink, VideoPlatform,
};

/// A musician and a venue sharing a fixed clock.
#[derive(Debug, Clone)]
pub struct MarketplaceFixture {
    pub seed: u8,
    pub now: DateTime<Utc>,
    pub musician: User,
    pub venue: User,
    pub musician_profile: MusicianProfile,
    pub venue_profile: VenueProfile,
}

impl MarketplaceFixture {
    /// Create the default fixture.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Create with deterministic ids derived from `seed`.
    pub fn with_seed(seed: u8) -> Self {
        let now = fixed_now();
        let musician = user(id_bytes(seed, 0x01), UserType::Musician, "musico", now);
        let venue = user(id_bytes(seed, 0x02), UserType::Venue, "casa", now);

        let musician_profile = MusicianProfile {
            user_id: musician.id.clone(),
            stage_name: format!("Trio Pé de Serra {seed}"),
            bio: "Forró raiz para bares e festas".into(),
            genres: vec!["Forró".into(), "Xote".into(), "Baião".into()],
            city: "Recife".into(),
            state: "PE".into(),
            phone: Some("(81) 98765-4321".into()),
            price_min: 800.0,
            price_max: 1500.0,
            profile_picture: None,
            photos: vec![],
            videos: vec![VideoLink {
                id: VideoId::from_bytes(id_bytes(seed, 0x03)),
                url: "https://youtube.com/watch?v=forro".into(),
                platform: VideoPlatform::Youtube,
                thumbnail: None,
                title: Some("Ao vivo no Recife Antigo".into()),
            }],
            social_links: SocialLinks {
                instagram: Some("https://instagram.com/triopedeserra".into()),
                ..SocialLinks::default()
            },
            rating_average: 0.0,
            rating_count: 0,
            total_shows: 0,
            verification_status: VerificationStatus::Verified,
            created_at: now,
            updated_at: now,
        };

        let venue_profile = VenueProfile {
            user_id: venue.id.clone(),
            venue_name: format!("Bar do Zé {seed}"),
            description: "Música ao vivo de quinta a domingo".into(),
            venue_type: "Bar".into(),
            city: "Olinda".into(),
            state: "PE".into(),
            address: Some("Rua do Amparo, 100".into()),
            phone: Some("(81) 3333-4444".into()),
            capacity: Some(150),
            logo: None,
            photos: vec![],
            rating_average: 0.0,
            rating_count: 0,
            total_bookings: 0,
            created_at: now,
            updated_at: now,
        };

        Self {
            seed,
            now,
            musician,
            venue,
            musician_profile,
            venue_profile,
        }
    }

    /// A request from the venue for an event `days_ahead` days from now.
    pub fn booking_request(&self, days_ahead: i64) -> BookingRequest {
        BookingRequest {
            musician_id: self.musician.id.clone(),
            event_date: self.now + Duration::days(days_ahead),
            event_time: "21:00".into(),
            duration: 2.0,
            location: self
                .venue_profile
                .address
                .clone()
                .unwrap_or_else(|| self.venue_profile.city.clone()),
            event_description: "Noite de forró".into(),
            offered_price: 1000.0,
        }
    }

    /// A booking between the fixture's parties in `status`.
    pub fn booking(&self, status: BookingStatus) -> Booking {
        let request = self.booking_request(14);
        let platform_fee = request.offered_price * 0.1;
        Booking {
            id: BookingId::from_bytes(id_bytes(self.seed, 0x10)),
            musician_id: request.musician_id,
            venue_id: self.venue.id.clone(),
            event_date: request.event_date,
            event_time: request.event_time,
            duration: request.duration,
            location: request.location,
            event_description: Some(request.event_description),
            agreed_price: request.offered_price,
            platform_fee,
            total_amount: request.offered_price + platform_fee,
            status,
            contract_accepted_at: None,
            completed_at: None,
            cancelled_at: None,
            cancel_reason: None,
            payment_id: None,
            payment_status: PaymentStatus::Pending,
            created_at: self.now,
            updated_at: self.now,
        }
    }

    /// A review of the musician by the venue.
    pub fn review(&self, rating: u8) -> Review {
        Review {
            id: ReviewId::from_bytes(id_bytes(rating, 0x20)),
            booking_id: self.booking(BookingStatus::Completed).id,
            reviewer_id: self.venue.id.clone(),
            reviewee_id: self.musician.id.clone(),
            rating,
            comment: None,
            created_at: self.now,
        }
    }
}

impl Default for MarketplaceFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple fixtures with distinct ids.
///
/// Ids are derived from a one-byte seed, which caps `count` at 255.
pub fn multi_party_fixtures(count: u8) -> Vec<MarketplaceFixture> {
    (0..count).map(MarketplaceFixture::with_seed).collect()
}

/// The fixed clock used by fixtures: 2026-01-14T12:00:00Z.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 14, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

fn id_bytes(seed: u8, tag: u8) -> [u8; ID_LEN] {
    let mut bytes = [tag; ID_LEN];
    bytes[0] = seed;
    bytes
}

fn user(id: [u8; ID_LEN], user_type: UserType, local: &str, now: DateTime<Utc>) -> User {
    User {
        id: UserId::from_bytes(id),
        email: format!("{local}{}@example.com", id[0]),
        user_type,
        email_verified: true,
        phone_verified: false,
        created_at: now,
        updated_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_profiles_validate() {
        let fixture = MarketplaceFixture::new();
        assert!(fixture.musician_profile.validate().is_ok());
        assert!(fixture.venue_profile.validate().is_ok());
    }

    #[test]
    fn test_fixture_booking_request() {
        let fixture = MarketplaceFixture::new();
        assert!(fixture.booking_request(7).validate_at(&fixture.now).is_ok());
        assert!(fixture.booking_request(-1).validate_at(&fixture.now).is_err());
    }

    #[test]
    fn test_fixture_booking_totals() {
        let booking = MarketplaceFixture::new().booking(BookingStatus::Confirmed);
        assert_eq!(booking.total_amount, booking.agreed_price + booking.platform_fee);
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[test]
    fn test_multi_party() {
        let parties = multi_party_fixtures(3);
        assert_ne!(parties[0].musician.id, parties[1].musician.id);
        assert_ne!(parties[1].venue.id, parties[2].venue.id);
        assert_ne!(parties[0].musician.id, parties[0].venue.id);
    }

    #[test]
    fn test_multi_party_ids_never_repeat() {
        let parties = multi_party_fixtures(u8::MAX);
        let ids: HashSet<_> = parties.iter().map(|p| p.musician.id.clone()).collect();
        assert_eq!(ids.len(), parties.len());
        assert_ne!(
            parties[0].booking(BookingStatus::Pending).id,
            parties[1].booking(BookingStatus::Pending).id
        );
    }
}
