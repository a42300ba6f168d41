//! Proptest generators for property-based testing.

use proptest::prelude::*;

use musicconnect_core::identity::{CPF_BASE_LEN, CPF_LEN};
use musicconnect_core::{BookingId, Cpf, UserId};

/// Generate nine base digits.
pub fn cpf_base() -> impl Strategy<Value = [u8; CPF_BASE_LEN]> {
    prop::array::uniform9(0u8..10)
}

/// Generate a valid CPF.
pub fn valid_cpf() -> impl Strategy<Value = Cpf> {
    cpf_base().prop_filter_map("repeated-digit base", |base| Cpf::from_base(base).ok())
}

/// Generate filler that contains no ASCII digit.
pub fn noise() -> impl Strategy<Value = String> {
    "[ .\\-/a-zA-Z]{0,3}".prop_map(String::from)
}

/// Generate a valid CPF written with arbitrary non-digit filler around its digits.
pub fn punctuated_cpf() -> impl Strategy<Value = (Cpf, String)> {
    (valid_cpf(), prop::collection::vec(noise(), CPF_LEN + 1)).prop_map(|(cpf, fillers)| {
        let mut text = String::new();
        for (digit, filler) in cpf.as_canonical().chars().zip(&fillers) {
            text.push_str(filler);
            text.push(digit);
        }
        text.push_str(&fillers[CPF_LEN]);
        (cpf, text)
    })
}

/// Generate a digit string whose length is anything but 11.
pub fn wrong_length_digits() -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..10, 0..=32)
        .prop_filter("length 11", |digits| digits.len() != CPF_LEN)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect())
}

/// Generate one digit repeated 11 times, optionally punctuated.
pub fn repeated_digit_cpf() -> impl Strategy<Value = String> {
    (0u8..10, any::<bool>()).prop_map(|(d, punctuate)| {
        let s: String = std::iter::repeat(char::from(b'0' + d)).take(CPF_LEN).collect();
        if punctuate {
            format!("{}.{}.{}-{}", &s[0..3], &s[3..6], &s[6..9], &s[9..11])
        } else {
            s
        }
    })
}

/// Generate a CPF with one check digit altered.
pub fn corrupted_cpf() -> impl Strategy<Value = String> {
    (valid_cpf(), CPF_BASE_LEN..CPF_LEN, 1u8..10).prop_map(|(cpf, position, delta)| {
        let mut digits = *cpf.digits();
        digits[position] = (digits[position] + delta) % 10;
        digits.iter().map(|&d| char::from(b'0' + d)).collect()
    })
}

/// Generate a random UserId.
pub fn user_id() -> impl Strategy<Value = UserId> {
    any::<[u8; 16]>().prop_map(UserId::from_bytes)
}

/// Generate a random BookingId.
pub fn booking_id() -> impl Strategy<Value = BookingId> {
    any::<[u8; 16]>().prop_map(BookingId::from_bytes)
}

/// Generate a star rating, including out-of-range values.
pub fn rating() -> impl Strategy<Value = u8> {
    prop_oneof![4 => 1u8..=5, 1 => any::<u8>()]
}
