//! Tests for jsontime types.

use super::*;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

// ============================================================================
// Normalization tests
// ============================================================================

#[test]
fn test_normalize_exact_width_is_borrowed() {
    let s = "2023-06-15T12:00:00.000000Z";
    for policy in [FractionPolicy::Truncate, FractionPolicy::Exact] {
        let got = normalize(s, policy).unwrap();
        assert!(matches!(got, std::borrow::Cow::Borrowed(_)));
        assert_eq!(got, s);
    }
    assert_eq!(normalize(s, FractionPolicy::Positional).unwrap(), s);
    assert_eq!(s.len(), NORMALIZED_LEN);
}

#[test]
fn test_normalize_truncates_nanoseconds() {
    let s = "2017-03-07T21:36:11.546284532Z";
    assert_eq!(
        normalize(s, FractionPolicy::Truncate).unwrap(),
        "2017-03-07T21:36:11.546284Z"
    );
    assert_eq!(
        normalize(s, FractionPolicy::Positional).unwrap(),
        "2017-03-07T21:36:11.546284Z"
    );
    assert!(matches!(
        normalize(s, FractionPolicy::Exact),
        Err(ParseError::Pattern { .. })
    ));
}

#[test]
fn test_normalize_rejects_short_fraction() {
    let s = "2023-06-15T12:00:00.123Z";
    assert!(normalize(s, FractionPolicy::Truncate).is_err());
    assert!(normalize(s, FractionPolicy::Exact).is_err());

    // Positional keeps the whole string and appends another Z.
    let got = normalize(s, FractionPolicy::Positional).unwrap();
    assert_eq!(got, "2023-06-15T12:00:00.123ZZ");
    assert!(Micro::parse_normalized(&got).is_err());
}

#[test]
fn test_normalize_rejects_offset() {
    let s = "2023-06-15T12:00:00.000000+00:00";
    assert!(normalize(s, FractionPolicy::Truncate).is_err());

    let got = normalize(s, FractionPolicy::Positional).unwrap();
    assert_eq!(got, "2023-06-15T12:00:00.0000000");
    assert!(Micro::parse_normalized(&got).is_err());
}

#[test]
fn test_normalize_empty() {
    for policy in [
        FractionPolicy::Truncate,
        FractionPolicy::Exact,
        FractionPolicy::Positional,
    ] {
        assert!(matches!(normalize("", policy), Err(ParseError::Empty)));
    }
}

#[test]
fn test_fraction_policy_names() {
    assert_eq!(FractionPolicy::default(), FractionPolicy::Truncate);
    assert_eq!(FractionPolicy::Truncate.as_str(), "truncate");
    assert_eq!(FractionPolicy::Exact.as_str(), "exact");
    assert_eq!(FractionPolicy::Positional.as_str(), "positional");
}

// ============================================================================
// Micro tests
// ============================================================================

#[test]
fn test_micro_parse_known_values() {
    let cases = [
        ("2023-06-15T12:00:00.000000Z", 1686830400),
        ("1970-01-01T00:00:00.000000Z", 0),
        ("2000-01-01T00:00:00.499999Z", 946684800),
        ("2000-01-01T00:00:00.500000Z", 946684801),
        ("2038-01-19T03:14:07.000000Z", 2147483647),
    ];
    for (input, want) in cases {
        let ts = Micro::parse(input, FractionPolicy::Exact).unwrap();
        assert_eq!(ts.round_to_unix().as_secs(), want, "input {input}");
    }
}

#[test]
fn test_micro_round_half_away_from_zero_before_epoch() {
    let cases = [
        ("1969-12-31T23:59:59.500000Z", -1),
        ("1969-12-31T23:59:59.600000Z", 0),
        ("1969-12-31T23:59:59.400000Z", -1),
        ("1969-12-31T23:59:58.500000Z", -2),
    ];
    for (input, want) in cases {
        let ts = Micro::parse(input, FractionPolicy::Exact).unwrap();
        assert_eq!(ts.round_to_unix().as_secs(), want, "input {input}");
    }
}

#[test]
fn test_micro_epoch_seconds_f64() {
    let ts = Micro::parse("2000-01-01T00:00:00.500000Z", FractionPolicy::Exact).unwrap();
    assert_eq!(ts.epoch_seconds_f64(), 946684800.5);

    let ts = Micro::parse("1970-01-01T00:00:00.000001Z", FractionPolicy::Exact).unwrap();
    assert!((ts.epoch_seconds_f64() - 0.000001).abs() < 1e-12);
}

#[test]
fn test_micro_parse_malformed() {
    let bad = [
        "2023-06-15 12:00:00.000000Z",
        "2023-06-15T12:00:00.000000",
        "2023-06-15T12:00:00,000000Z",
        "23-06-15T12:00:00.000000Z",
        "2023-6-15T12:00:00.000000Z",
        "2023-06-15T12:00:00Z",
        "not a timestamp",
        "２０２３-06-15T12:00:00.000000Z",
    ];
    for input in bad {
        for policy in [FractionPolicy::Truncate, FractionPolicy::Exact] {
            assert!(Micro::parse(input, policy).is_err(), "input {input}");
        }
    }
}

#[test]
fn test_micro_parse_invalid_calendar() {
    let bad = [
        "2023-02-30T12:00:00.000000Z",
        "2023-13-01T00:00:00.000000Z",
        "2023-06-15T24:00:00.000000Z",
        "2023-06-15T12:60:00.000000Z",
        "2016-12-31T23:59:60.000000Z",
    ];
    for input in bad {
        assert!(
            matches!(
                Micro::parse(input, FractionPolicy::Exact),
                Err(ParseError::Calendar { .. })
            ),
            "input {input}"
        );
    }
}

#[test]
fn test_micro_display() {
    let dt = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    assert_eq!(Micro::new(dt).to_string(), "2024-01-15T10:30:00.000000Z");

    let ts = Micro::parse("2017-03-07T21:36:11.546284532Z", FractionPolicy::Truncate).unwrap();
    assert_eq!(ts.to_string(), "2017-03-07T21:36:11.546284Z");
}

#[test]
fn test_micro_new_drops_nanoseconds() {
    let dt = Utc.timestamp_opt(10, 123_456_789).unwrap();
    let ts = Micro::new(dt);
    assert_eq!(ts.datetime().timestamp_subsec_nanos(), 123_456_000);
}

// ============================================================================
// Unix tests
// ============================================================================

#[test]
fn test_unix_display_is_integer() {
    assert_eq!(Unix::from_secs(1686830400).to_string(), "1686830400");
    assert_eq!(Unix::from_secs(-1).to_string(), "-1");
    assert_eq!(Unix::default().to_string(), "0");
}

#[test]
fn test_unix_from_secs() {
    let secs: i64 = 1705315800; // 2024-01-15 10:30:00 UTC
    let u = Unix::from_secs(secs);
    assert_eq!(u.as_secs(), secs);
    assert_eq!(u.datetime(), Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());

    let m = Micro::from_unix(u);
    assert_eq!(m.to_string(), "2024-01-15T10:30:00.000000Z");
    assert_eq!(m.round_to_unix(), u);
}

// ============================================================================
// Round trip
// ============================================================================

proptest! {
    #[test]
    fn test_round_trip_whole_seconds(secs in 0i64..(1i64 << 31)) {
        let formatted = Micro::from_unix(Unix::from_secs(secs)).to_string();
        prop_assert_eq!(formatted.len(), NORMALIZED_LEN);

        for policy in [
            FractionPolicy::Truncate,
            FractionPolicy::Exact,
            FractionPolicy::Positional,
        ] {
            let parsed = Micro::parse(&formatted, policy).unwrap();
            prop_assert_eq!(parsed.round_to_unix().as_secs(), secs);
        }
    }
}
