//! Identity numbers: Brazilian CPF checksum validation.
//!
//! A CPF is 11 decimal digits. The last two are check digits derived from
//! the preceding ones with a mod-11 weighted sum. Input is accepted with any
//! punctuation (`529.982.247-25`); only ASCII digits are kept.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::IdentityError;

/// Number of digits in a canonical CPF.
pub const CPF_LEN: usize = 11;

/// Number of base digits preceding the check digits.
pub const CPF_BASE_LEN: usize = 9;

/// Returns `true` if `raw` is a well-formed, checksum-consistent CPF.
///
/// Never panics. Wrong length, repeated-digit placeholders and check digit
/// mismatches all yield `false`.
pub fn is_valid_identity(raw: &str) -> bool {
    Cpf::parse(raw).is_ok()
}

/// Alias of [`is_valid_identity`] under the document's own name.
pub fn is_valid_cpf(raw: &str) -> bool {
    is_valid_identity(raw)
}

/// Strip every character that is not an ASCII digit.
pub fn canonical_digits(raw: &str) -> Vec<u8> {
    raw.chars()
        .filter(char::is_ascii_digit)
        .map(|c| c as u8 - b'0')
        .collect()
}

/// Compute the check digit that follows `digits`.
///
/// Weights start at `digits.len() + 1` and decrease to 2. With
/// `r = sum mod 11` the check digit is 0 when `r < 2`, else `11 - r`.
pub fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() + 1;
    let sum: usize = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| usize::from(d) * (top - i))
        .sum();

    let r = sum % 11;
    if r < 2 {
        0
    } else {
        (11 - r) as u8
    }
}

/// A validated CPF, stored as its 11 canonical digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cpf([u8; CPF_LEN]);

impl Cpf {
    /// Parse and validate a CPF from arbitrary text.
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        let digits = canonical_digits(raw);
        if digits.len() != CPF_LEN {
            tracing::trace!(len = digits.len(), "identity rejected: wrong length");
            return Err(IdentityError::WrongLength(digits.len()));
        }

        let mut arr = [0u8; CPF_LEN];
        arr.copy_from_slice(&digits);

        if arr.iter().all(|&d| d == arr[0]) {
            tracing::trace!("identity rejected: repeated digits");
            return Err(IdentityError::RepeatedDigits);
        }

        for position in CPF_BASE_LEN..CPF_LEN {
            let expected = check_digit(&arr[..position]);
            let found = arr[position];
            if expected != found {
                tracing::trace!(position, expected, found, "identity rejected: check digit");
                return Err(IdentityError::CheckDigitMismatch {
                    position,
                    expected,
                    found,
                });
            }
        }

        Ok(Self(arr))
    }

    /// Complete nine base digits with their two check digits.
    ///
    /// Base digits above 9 are reduced mod 10.
    pub fn from_base(base: [u8; CPF_BASE_LEN]) -> Result<Self, IdentityError> {
        let mut arr = [0u8; CPF_LEN];
        for (slot, d) in arr.iter_mut().zip(base) {
            *slot = d % 10;
        }
        arr[9] = check_digit(&arr[..9]);
        arr[10] = check_digit(&arr[..10]);

        if arr.iter().all(|&d| d == arr[0]) {
            return Err(IdentityError::RepeatedDigits);
        }
        Ok(Self(arr))
    }

    /// The 11 digits as values 0-9.
    pub const fn digits(&self) -> &[u8; CPF_LEN] {
        &self.0
    }

    /// The two trailing check digits.
    pub const fn check_digits(&self) -> (u8, u8) {
        (self.0[9], self.0[10])
    }

    /// The unpunctuated 11-character form.
    pub fn as_canonical(&self) -> String {
        self.0.iter().map(|&d| char::from(b'0' + d)).collect()
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.as_canonical();
        write!(f, "{}.{}.{}-{}", &s[0..3], &s[3..6], &s[6..9], &s[9..11])
    }
}

impl fmt::Debug for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cpf({})", self)
    }
}

impl FromStr for Cpf {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Cpf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_canonical())
    }
}

impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
