//! Field validation for form input.
//!
//! The `is_*` predicates never fail; they answer yes or no for any input.
//! The `require_*` companions wrap them into [`ValidationError`]s for callers
//! that validate whole records.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::identity::{canonical_digits, Cpf};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Characters counted as "special" by [`password_strength`].
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum length for [`is_strong_password`].
pub const STRONG_PASSWORD_MIN_LEN: usize = 8;

/// Below this length [`password_strength`] reports "too short".
pub const PASSWORD_MIN_LEN: usize = 6;

/// Check email shape: `local@domain.tld`, no whitespace, a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check a Brazilian phone number: 10 (landline) or 11 (mobile) digits.
pub fn is_valid_phone(phone: &str) -> bool {
    matches!(canonical_digits(phone).len(), 10 | 11)
}

/// Check that `url` parses as an absolute URL.
pub fn is_valid_url(url: &str) -> bool {
    url::Url::parse(url).is_ok()
}

/// At least 8 characters with an uppercase letter, a lowercase letter and a digit.
pub fn is_strong_password(password: &str) -> bool {
    let traits = PasswordTraits::of(password);
    password.chars().count() >= STRONG_PASSWORD_MIN_LEN
        && traits.upper
        && traits.lower
        && traits.digit
}

/// Password strength buckets shown next to the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

/// Result of [`password_strength`]: a bucket and its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordAssessment {
    pub strength: PasswordStrength,
    pub message: &'static str,
}

/// Grade a password by the character classes it uses.
pub fn password_strength(password: &str) -> PasswordAssessment {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return PasswordAssessment {
            strength: PasswordStrength::Weak,
            message: "Senha muito curta",
        };
    }

    let (strength, message) = match PasswordTraits::of(password).score() {
        0 | 1 => (PasswordStrength::Weak, "Senha fraca"),
        2 => (PasswordStrength::Fair, "Senha razoável"),
        3 => (PasswordStrength::Good, "Senha boa"),
        _ => (PasswordStrength::Strong, "Senha forte"),
    };
    PasswordAssessment { strength, message }
}

#[derive(Default)]
struct PasswordTraits {
    upper: bool,
    lower: bool,
    digit: bool,
    special: bool,
}

impl PasswordTraits {
    fn of(password: &str) -> Self {
        let mut t = Self::default();
        for c in password.chars() {
            t.upper |= c.is_ascii_uppercase();
            t.lower |= c.is_ascii_lowercase();
            t.digit |= c.is_ascii_digit();
            t.special |= PASSWORD_SPECIALS.contains(c);
        }
        t
    }

    fn score(&self) -> usize {
        [self.upper, self.lower, self.digit, self.special]
            .into_iter()
            .filter(|&b| b)
            .count()
    }
}

/// `min` is non-negative and `max` is not below it.
pub fn is_valid_price_range(min: f64, max: f64) -> bool {
    min >= 0.0 && max >= min
}

/// `date` is strictly after `now`.
pub fn is_valid_future_date_at(date: &DateTime<Utc>, now: &DateTime<Utc>) -> bool {
    date > now
}

/// `date` is strictly after the current time.
pub fn is_valid_future_date(date: &DateTime<Utc>) -> bool {
    is_valid_future_date_at(date, &Utc::now())
}

pub fn require_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

pub fn require_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(phone.to_string()))
    }
}

pub fn require_url(url: &str) -> Result<(), ValidationError> {
    if is_valid_url(url) {
        Ok(())
    } else {
        Err(ValidationError::InvalidUrl(url.to_string()))
    }
}

pub fn require_strong_password(password: &str) -> Result<(), ValidationError> {
    if is_strong_password(password) {
        Ok(())
    } else {
        Err(ValidationError::WeakPassword)
    }
}

pub fn require_price_range(min: f64, max: f64) -> Result<(), ValidationError> {
    if is_valid_price_range(min, max) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPriceRange { min, max })
    }
}

pub fn require_future_date_at(
    date: &DateTime<Utc>,
    now: &DateTime<Utc>,
) -> Result<(), ValidationError> {
    if is_valid_future_date_at(date, now) {
        Ok(())
    } else {
        Err(ValidationError::DateNotInFuture)
    }
}

/// Validate an identity number, returning the parsed [`Cpf`].
pub fn require_identity(raw: &str) -> Result<Cpf, ValidationError> {
    Ok(Cpf::parse(raw)?)
}

pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField { field })
    } else {
        Ok(())
    }
}
