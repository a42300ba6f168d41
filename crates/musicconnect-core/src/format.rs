//! Display formatting in Brazilian Portuguese conventions.
//!
//! Currency as `R$ 1.234,56`, dates as `DD/MM/YYYY`, relative times as
//! "há 2 horas". Formatters are total: they never fail on any input.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::fmt;

use crate::error::FormatError;

/// Separator between the currency symbol and the amount (no-break space).
const CURRENCY_GAP: char = '\u{a0}';

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;

/// Format an amount in reais: `R$ 1.234,56`.
///
/// Rounds to the nearest cent. Amounts that round to zero carry no sign.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("R${CURRENCY_GAP}NaN");
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}R${CURRENCY_GAP}∞");
    }

    // Amounts may exceed u64 cents.
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if whole == "0" && fraction == "00" { "" } else { sign };
    format!(
        "{sign}R${CURRENCY_GAP}{},{fraction}",
        group_thousands(whole)
    )
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// `DD/MM/YYYY` in the timestamp's own offset.
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    dt.format("%d/%m/%Y").to_string()
}

/// `DD/MM/YYYY, HH:MM` in the timestamp's own offset.
pub fn format_date_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    dt.format("%d/%m/%Y, %H:%M").to_string()
}

/// Describe how long ago `dt` was, relative to `now`.
///
/// Anything older than a week falls back to [`format_date`]. Timestamps in
/// the future read as "agora mesmo".
pub fn format_relative_time_at(dt: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(*dt).num_seconds();

    if secs < MINUTE {
        return "agora mesmo".to_string();
    }
    if secs < HOUR {
        let n = secs / MINUTE;
        return format!("há {} {}", n, pluralize(n, "minuto", "minutos"));
    }
    if secs < DAY {
        let n = secs / HOUR;
        return format!("há {} {}", n, pluralize(n, "hora", "horas"));
    }
    if secs < WEEK {
        let n = secs / DAY;
        return format!("há {} {}", n, pluralize(n, "dia", "dias"));
    }

    format_date(dt)
}

/// [`format_relative_time_at`] against the current time.
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    format_relative_time_at(dt, &Utc::now())
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, FormatError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| FormatError::InvalidTimestamp(s.to_string()))
}

/// Cut `text` to `max_len` characters, ending in `...` when cut.
///
/// The ellipsis is always kept whole, so for `max_len < 3` a cut result is
/// `...` and runs past `max_len`.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Pick `singular` for a count of exactly one, `plural` otherwise.
pub fn pluralize<'a>(count: i64, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 {
        singular
    } else {
        plural
    }
}

/// Format a Brazilian phone number.
///
/// 11 digits: `(XX) XXXXX-XXXX`; 10 digits: `(XX) XXXX-XXXX`. Anything
/// else is returned unchanged.
pub fn format_phone(phone: &str) -> String {
    let d: String = phone.chars().filter(char::is_ascii_digit).collect();
    match d.len() {
        11 => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => phone.to_string(),
    }
}

/// Up to two uppercase initials from a space-separated name.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn at(s: &str) -> DateTime<Utc> {
        parse_timestamp(s).unwrap()
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(1234.56), "R$\u{a0}1.234,56");
        assert_eq!(format_currency(0.0), "R$\u{a0}0,00");
        assert_eq!(format_currency(500.0), "R$\u{a0}500,00");
        assert_eq!(format_currency(1_000_000.5), "R$\u{a0}1.000.000,50");
        assert_eq!(format_currency(-45.9), "-R$\u{a0}45,90");
        assert_eq!(format_currency(-0.001), "R$\u{a0}0,00");
        assert_eq!(format_currency(0.999), "R$\u{a0}1,00");
    }

    #[test]
    fn test_currency_beyond_integer_cents() {
        assert_eq!(
            format_currency(1e20),
            "R$\u{a0}100.000.000.000.000.000.000,00"
        );
        assert_eq!(
            format_currency(-2.5e18),
            "-R$\u{a0}2.500.000.000.000.000.000,00"
        );
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1.000");
        assert_eq!(group_thousands("123456789"), "123.456.789");
    }

    #[test]
    fn test_dates() {
        let dt = at("2026-03-07T21:05:00Z");
        assert_eq!(format_date(&dt), "07/03/2026");
        assert_eq!(format_date_time(&dt), "07/03/2026, 21:05");

        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(format_date_time(&dt.with_timezone(&brt)), "07/03/2026, 18:05");
    }

    #[test]
    fn test_relative_time() {
        let now = at("2026-10-17T12:00:00Z");
        let ago = |d: Duration| format_relative_time_at(&(now - d), &now);

        assert_eq!(ago(Duration::seconds(30)), "agora mesmo");
        assert_eq!(ago(Duration::seconds(-300)), "agora mesmo");
        assert_eq!(ago(Duration::minutes(1)), "há 1 minuto");
        assert_eq!(ago(Duration::minutes(59)), "há 59 minutos");
        assert_eq!(ago(Duration::hours(1)), "há 1 hora");
        assert_eq!(ago(Duration::hours(5)), "há 5 horas");
        assert_eq!(ago(Duration::days(1)), "há 1 dia");
        assert_eq!(ago(Duration::days(6)), "há 6 dias");
        assert_eq!(ago(Duration::days(7)), "10/10/2026");
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(at("2026-01-15").to_rfc3339(), "2026-01-15T00:00:00+00:00");
        assert_eq!(
            at("2026-01-15T10:00:00-03:00").to_rfc3339(),
            "2026-01-15T13:00:00+00:00"
        );
        assert_eq!(
            parse_timestamp("15/01/2026"),
            Err(FormatError::InvalidTimestamp("15/01/2026".into()))
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Banda Forró Pé de Serra", 100), "Banda Forró Pé de Serra");
        assert_eq!(truncate("Banda Forró Pé de Serra", 11), "Banda Fo...");
        assert_eq!(truncate("abcdef", 6), "abcdef");
        assert_eq!(truncate("abcdef", 2), "...");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "show", "shows"), "show");
        assert_eq!(pluralize(0, "show", "shows"), "shows");
        assert_eq!(pluralize(2, "show", "shows"), "shows");
    }

    #[test]
    fn test_phone() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("11 3333-4444"), "(11) 3333-4444");
        assert_eq!(format_phone("12345"), "12345");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("maria da silva"), "MD");
        assert_eq!(initials("Caetano"), "C");
        assert_eq!(initials("  ana  paula"), "AP");
        assert_eq!(initials(""), "");
    }
}
