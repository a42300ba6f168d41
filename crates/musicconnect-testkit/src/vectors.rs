//! Golden identity vectors.
//!
//! Known inputs with the verdict every implementation of the CPF checksum
//! must reach. Serializable so other clients can load the same file.

use musicconnect_core::{is_valid_identity, Cpf};
use serde::{Deserialize, Serialize};

/// A golden test vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityVector {
    /// Human-readable name for the vector.
    pub name: String,
    /// Raw input as a user would type it.
    pub input: String,
    /// Canonical 11 digits when the input is valid, `None` otherwise.
    pub canonical: Option<String>,
}

impl IdentityVector {
    pub fn is_valid(&self) -> bool {
        self.canonical.is_some()
    }
}

fn vector(name: &str, input: &str, canonical: Option<&str>) -> IdentityVector {
    IdentityVector {
        name: name.to_string(),
        input: input.to_string(),
        canonical: canonical.map(str::to_string),
    }
}

/// Get all golden identity vectors.
pub fn all_vectors() -> Vec<IdentityVector> {
    vec![
        vector("punctuated", "529.982.247-25", Some("52998224725")),
        vector("bare", "52998224725", Some("52998224725")),
        vector("sequential_base", "123.456.789-09", Some("12345678909")),
        vector("zero_check_digits", "987.654.321-00", Some("98765432100")),
        vector("leading_zeros", "000.000.001-91", Some("00000000191")),
        vector("spaces_and_slashes", " 111 444 777 / 35 ", Some("11144477735")),
        vector("letters_mixed_in", "CPF 390.533.447-05", Some("39053344705")),
        vector("corrupted_check_digits", "52998224700", None),
        vector("second_check_digit_off", "52998224724", None),
        vector("transposed_digits", "25998224725", None),
        vector("too_short", "123456789", None),
        vector("too_long", "529982247250", None),
        vector("empty", "", None),
        vector("no_digits", "cpf: n/a", None),
        vector("all_zeros", "000.000.000-00", None),
        vector("all_ones", "11111111111", None),
        vector("all_nines", "999.999.999-99", None),
    ]
}

/// Check every vector against the local implementation.
///
/// Returns `(name, matches, canonical_or_none)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, Option<String>)> {
    all_vectors()
        .into_iter()
        .map(|v| {
            let parsed = Cpf::parse(&v.input).ok().map(|c| c.as_canonical());
            let matches = is_valid_identity(&v.input) == v.is_valid() && parsed == v.canonical;
            (v.name, matches, parsed)
        })
        .collect()
}

/// All golden vectors as pretty JSON.
pub fn vectors_json() -> String {
    serde_json::to_string_pretty(&all_vectors()).unwrap_or_default()
}
