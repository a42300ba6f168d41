//! Golden identity vectors for cross-implementation verification.
//!
//! Every client of the shared layer (web form, mobile app, backend) must
//! reach the same verdict and canonical form for these inputs.

use musicconnect::{is_valid_identity, Cpf, IdentityError};
use musicconnect_testkit::vectors::{all_vectors, vectors_json, IdentityVector};

#[test]
fn test_golden_vectors() {
    let vectors = all_vectors();
    assert!(vectors.iter().any(IdentityVector::is_valid));
    assert!(vectors.iter().any(|v| !v.is_valid()));

    for v in vectors {
        assert_eq!(is_valid_identity(&v.input), v.is_valid(), "vector {}", v.name);

        let canonical = Cpf::parse(&v.input).ok().map(|c| c.as_canonical());
        assert_eq!(canonical, v.canonical, "canonical form for {}", v.name);
    }
}

#[test]
fn test_spec_examples() {
    assert!(is_valid_identity("529.982.247-25"));
    assert!(is_valid_identity("52998224725"));
    assert!(!is_valid_identity("52998224700"));
    assert!(!is_valid_identity("123456789"));
    assert!(!is_valid_identity(""));
    assert!(!is_valid_identity("00000000000"));
    assert!(!is_valid_identity("11111111111"));
}

#[test]
fn test_vectors_file_roundtrip() {
    let back: Vec<IdentityVector> = serde_json::from_str(&vectors_json()).unwrap();
    assert_eq!(back, all_vectors());
}

#[test]
fn test_rejection_reasons() {
    assert_eq!(Cpf::parse("cpf: n/a"), Err(IdentityError::WrongLength(0)));
    assert_eq!(Cpf::parse("000.000.000-00"), Err(IdentityError::RepeatedDigits));
    assert!(matches!(
        Cpf::parse("25998224725"),
        Err(IdentityError::CheckDigitMismatch { position: 9, .. })
    ));
}

#[test]
fn test_verdict_is_stable() {
    for v in all_vectors() {
        let first = is_valid_identity(&v.input);
        for _ in 0..5 {
            assert_eq!(is_valid_identity(&v.input), first);
        }
    }
}
