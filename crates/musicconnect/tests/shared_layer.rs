//! End-to-end use of the shared layer the way the front-end consumes it.

use chrono::{Duration, TimeZone, Utc};
use musicconnect::model::{
    Booking, BookingRequest, BookingStatus, LoginCredentials, PaymentStatus, ReviewStats,
    SignupData, UserType,
};
use musicconnect::{
    format_currency, format_date, parse_timestamp, routes, AppConfig, AppError, ConfigError, Cpf,
    Environment, FormatError, IdentityError, UserId, ValidationError,
};
use musicconnect_testkit::MarketplaceFixture;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn test_signup_form_flow() {
    init_tracing();

    let json = r#"{
        "email": "dj.carla@example.com",
        "password": "Batida2026",
        "userType": "musician",
        "name": "DJ Carla"
    }"#;
    let signup: SignupData = serde_json::from_str(json).unwrap();
    assert_eq!(signup.user_type, UserType::Musician);
    assert!(signup.validate().is_ok());

    let bad = SignupData {
        credentials: LoginCredentials {
            email: "dj.carla@example".into(),
            password: "Batida2026".into(),
        },
        ..signup
    };
    let err: AppError = bad.validate().unwrap_err().into();
    assert!(matches!(err, AppError::Validation(ValidationError::InvalidEmail(_))));
}

#[test]
fn test_booking_json_from_api() {
    init_tracing();

    let musician = UserId::from_bytes([0x11; 16]);
    let json = serde_json::json!({
        "id": "6f9619ff-8b86-d011-b42d-00c04fc964ff",
        "musicianId": musician.as_str(),
        "venueId": "33".repeat(16),
        "eventDate": "2026-11-20T23:00:00Z",
        "eventTime": "20:00",
        "duration": 3.0,
        "location": "Casa de Shows Centro",
        "agreedPrice": 1200.0,
        "platformFee": 120.0,
        "totalAmount": 1320.0,
        "status": "confirmed",
        "paymentStatus": "held",
        "createdAt": "2026-10-01T12:00:00Z",
        "updatedAt": "2026-10-02T12:00:00Z"
    });

    let booking: Booking = serde_json::from_value(json).unwrap();
    assert_eq!(booking.musician_id, musician);
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.payment_status, PaymentStatus::Held);
    assert!(booking.cancel_reason.is_none());

    assert_eq!(format_currency(booking.total_amount), "R$\u{a0}1.320,00");
    assert_eq!(format_date(&booking.event_date), "20/11/2026");
    assert_eq!(
        routes::booking_details(&booking.id),
        "/booking/6f9619ff-8b86-d011-b42d-00c04fc964ff"
    );
    assert_eq!(
        serde_json::to_value(&booking).unwrap()["id"],
        "6f9619ff-8b86-d011-b42d-00c04fc964ff"
    );
}

#[test]
fn test_booking_request_validation() {
    init_tracing();

    let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap();
    let request = BookingRequest {
        musician_id: UserId::generate(),
        event_date: now - Duration::days(1),
        event_time: "22:00".into(),
        duration: 2.0,
        location: "Bar do Zé".into(),
        event_description: "Aniversário".into(),
        offered_price: 600.0,
    };
    assert_eq!(
        request.validate_at(&now),
        Err(ValidationError::DateNotInFuture)
    );
}

#[test]
fn test_review_stats_display() {
    let stats = ReviewStats::from_ratings([5, 4, 4, 5, 5, 3]);
    assert_eq!(stats.total, 6);
    assert_eq!(format!("{:.1}", stats.average), "4.3");
}

#[test]
fn test_production_config_gate() {
    init_tracing();

    let config = AppConfig::from_lookup(|key| match key {
        "MUSICCONNECT_ENV" => Some("production".into()),
        "MUSICCONNECT_API_URL" => Some("https://api.musicconnect.com.br".into()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.environment, Environment::Production);

    let err: AppError = config.validate().unwrap_err().into();
    assert!(matches!(
        err,
        AppError::Config(ConfigError::MissingVariables(ref vars))
            if vars == &["MUSICCONNECT_STRIPE_PUBLIC_KEY"]
    ));
}

#[test]
fn test_fixture_records_are_consistent() {
    init_tracing();

    let fixture = MarketplaceFixture::new();
    assert!(fixture.musician_profile.validate().is_ok());
    assert!(fixture.venue_profile.validate().is_ok());

    let reviews: Vec<_> = [5, 4, 5].into_iter().map(|r| fixture.review(r)).collect();
    let stats = ReviewStats::from_reviews(&reviews);
    assert_eq!(stats.total, 3);

    let booking = fixture.booking(BookingStatus::Pending);
    assert_eq!(
        routes::booking_payment(&booking.id),
        format!("/booking/{}/payment", booking.id)
    );
}

#[test]
fn test_lower_layer_errors_convert() {
    let err: AppError = parse_timestamp("amanhã").unwrap_err().into();
    assert!(matches!(
        err,
        AppError::Format(FormatError::InvalidTimestamp(ref s)) if s == "amanhã"
    ));
    assert!(err.to_string().starts_with("format error:"));

    let err: AppError = Cpf::parse("111.111.111-11").unwrap_err().into();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::InvalidIdentity(IdentityError::RepeatedDigits))
    ));
}
