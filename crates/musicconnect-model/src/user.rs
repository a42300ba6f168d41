//! Users, musician and venue profiles, and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use musicconnect_core::validation::{
    require_email, require_non_empty, require_phone, require_price_range, require_strong_password,
    require_url,
};
use musicconnect_core::{
    is_music_genre, is_venue_type, state_by_code, UserId, ValidationError, VideoId,
};

/// Which side of the marketplace an account is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Musician,
    Venue,
}

/// An account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub user_type: UserType,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Verification state of a musician profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Unverified,
    Pending,
    Verified,
}

/// Where a profile video is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlatform {
    Youtube,
    Vimeo,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoLink {
    pub id: VideoId,
    pub url: String,
    pub platform: VideoPlatform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Optional links to a musician's social and streaming pages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soundcloud: Option<String>,
}

impl SocialLinks {
    /// Iterate over the links that are set.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [
            &self.youtube,
            &self.spotify,
            &self.instagram,
            &self.facebook,
            &self.soundcloud,
        ]
        .into_iter()
        .filter_map(|link| link.as_deref())
    }
}

/// Public profile of a musician or band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicianProfile {
    pub user_id: UserId,
    pub stage_name: String,
    pub bio: String,
    pub genres: Vec<String>,
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    // Pricing, in reais
    pub price_min: f64,
    pub price_max: f64,

    // Media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub videos: Vec<VideoLink>,
    #[serde(default)]
    pub social_links: SocialLinks,

    // Stats
    pub rating_average: f64,
    pub rating_count: u32,
    pub total_shows: u32,
    #[serde(default)]
    pub verification_status: VerificationStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MusicianProfile {
    /// Check the fields a musician fills in on the profile form.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check().map_err(|e| {
            tracing::debug!(user_id = %self.user_id, error = %e, "musician profile rejected");
            e
        })
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_non_empty("stageName", &self.stage_name)?;
        require_non_empty("city", &self.city)?;
        require_price_range(self.price_min, self.price_max)?;

        if let Some(genre) = self.genres.iter().find(|g| !is_music_genre(g)) {
            return Err(ValidationError::UnknownGenre(genre.clone()));
        }
        if state_by_code(&self.state).is_none() {
            return Err(ValidationError::UnknownState(self.state.clone()));
        }
        if let Some(phone) = &self.phone {
            require_phone(phone)?;
        }
        for link in self.social_links.iter() {
            require_url(link)?;
        }
        for video in &self.videos {
            require_url(&video.url)?;
        }
        Ok(())
    }

    pub fn is_verified(&self) -> bool {
        self.verification_status == VerificationStatus::Verified
    }
}

/// Public profile of a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueProfile {
    pub user_id: UserId,
    pub venue_name: String,
    pub description: String,
    pub venue_type: String,
    pub city: String,
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,

    pub rating_average: f64,
    pub rating_count: u32,
    pub total_bookings: u32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VenueProfile {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check().map_err(|e| {
            tracing::debug!(user_id = %self.user_id, error = %e, "venue profile rejected");
            e
        })
    }

    fn check(&self) -> Result<(), ValidationError> {
        require_non_empty("venueName", &self.venue_name)?;
        require_non_empty("city", &self.city)?;
        if !is_venue_type(&self.venue_type) {
            return Err(ValidationError::UnknownVenueType(self.venue_type.clone()));
        }
        if state_by_code(&self.state).is_none() {
            return Err(ValidationError::UnknownState(self.state.clone()));
        }
        if let Some(phone) = &self.phone {
            require_phone(phone)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Authentication
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_email(&self.email)?;
        require_non_empty("password", &self.password)
    }
}

/// Sign-up form: credentials plus account type and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    #[serde(flatten)]
    pub credentials: LoginCredentials,
    pub user_type: UserType,
    pub name: String,
}

impl SignupData {
    /// Sign-up requires a well-formed email and a strong password.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let result = require_email(&self.credentials.email)
            .and_then(|()| require_strong_password(&self.credentials.password))
            .and_then(|()| require_non_empty("name", &self.name));
        if let Err(e) = &result {
            tracing::debug!(user_type = ?self.user_type, error = %e, "signup rejected");
        }
        result
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
    pub refresh_token: String,
}

/// Client-side view of the session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl AuthState {
    /// State while the session is being restored.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
        }
    }
}
