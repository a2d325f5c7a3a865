//! Threshold and size parser tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use chrono::{Duration, NaiveDate, NaiveDateTime};

use tierpolicy_core::{
    parse_size, parse_size_str, parse_threshold, ErrorKind, SizeSpec, Threshold,
};

fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn absolute_date() {
    let t = parse_threshold("2024-01-05").unwrap();
    assert_eq!(t, Threshold::Absolute(midnight(2024, 1, 5)));
    assert_eq!(t.to_string(), "2024-01-05");
}

#[test]
fn absolute_date_with_whitespace() {
    let t = parse_threshold("  2019-12-31 ").unwrap();
    assert_eq!(t, Threshold::Absolute(midnight(2019, 12, 31)));
}

#[test]
fn relative_units() {
    assert_eq!(parse_threshold("3 m").unwrap(), Threshold::Relative(Duration::days(90)));
    assert_eq!(parse_threshold("2w").unwrap(), Threshold::Relative(Duration::days(14)));
    assert_eq!(parse_threshold("1y").unwrap(), Threshold::Relative(Duration::days(365)));
    assert_eq!(parse_threshold("10d").unwrap(), Threshold::Relative(Duration::days(10)));
}

#[test]
fn relative_units_case_and_words() {
    assert_eq!(parse_threshold("2W").unwrap(), Threshold::Relative(Duration::days(14)));
    assert_eq!(
        parse_threshold("3 months").unwrap(),
        Threshold::Relative(Duration::days(90))
    );
    assert_eq!(
        parse_threshold("1 Year").unwrap(),
        Threshold::Relative(Duration::days(365))
    );
}

#[test]
fn text_after_unit_is_ignored() {
    assert_eq!(
        parse_threshold("3 m ago").unwrap(),
        Threshold::Relative(Duration::days(90))
    );
    assert_eq!(
        parse_threshold("6 months old").unwrap(),
        Threshold::Relative(Duration::days(180))
    );
    assert_eq!(parse_size_str("10 kB.").unwrap(), 10_000);
}

#[test]
fn fractional_period() {
    let t = parse_threshold("1.5w").unwrap();
    assert_eq!(t, Threshold::Relative(Duration::hours(252)));
    assert_eq!(t.to_string(), "10.5 days");
}

#[test]
fn invalid_thresholds() {
    for bad in ["abc", "", "5x", "w", "3", "1.2.3d", "2024-13-01"] {
        let err = parse_threshold(bad).expect_err(bad);
        assert_eq!(err.kind(), ErrorKind::Construction, "{bad}");
    }
}

#[test]
fn resolve_absolute_ignores_now() {
    let t = parse_threshold("2020-06-01").unwrap();
    assert_eq!(t.resolve(midnight(2030, 1, 1)), midnight(2020, 6, 1));
}

#[test]
fn resolve_relative_counts_back_from_now() {
    let t = parse_threshold("2w").unwrap();
    assert_eq!(t.resolve(midnight(2024, 1, 15)), midnight(2024, 1, 1));
}

#[test]
fn relative_display() {
    assert_eq!(parse_threshold("3 m").unwrap().to_string(), "90 days");
}

#[test]
fn size_units() {
    assert_eq!(parse_size_str("10k").unwrap(), 10_000);
    assert_eq!(parse_size_str("1g").unwrap(), 1_000_000_000);
    assert_eq!(parse_size_str("7b").unwrap(), 7);
    assert_eq!(parse_size_str("2 M").unwrap(), 2_000_000);
    assert_eq!(parse_size_str("3t").unwrap(), 3_000_000_000_000);
    assert_eq!(parse_size_str("10 kB").unwrap(), 10_000);
    assert_eq!(parse_size_str("1.5k").unwrap(), 1_500);
    assert_eq!(parse_size_str("1.5b").unwrap(), 2);
}

#[test]
fn size_integer_passthrough() {
    assert_eq!(parse_size(&SizeSpec::Bytes(123_456)).unwrap(), 123_456);
    assert_eq!(parse_size(&SizeSpec::Text("4k".into())).unwrap(), 4_000);
    // above 2^53, where f64 can no longer hold every integer
    assert_eq!(
        parse_size(&SizeSpec::Bytes(9_007_199_254_740_993)).unwrap(),
        9_007_199_254_740_993
    );
}

#[test]
fn invalid_sizes() {
    for bad in ["", "k", "10", "10x", "ten k", "1..k", "99999999t"] {
        let err = parse_size_str(bad).expect_err(bad);
        assert_eq!(err.kind(), ErrorKind::Construction, "{bad}");
    }
}

#[test]
fn size_spec_from_yaml() {
    let n: SizeSpec = serde_yaml::from_str("1024").unwrap();
    assert_eq!(n, SizeSpec::Bytes(1024));
    let s: SizeSpec = serde_yaml::from_str("\"5g\"").unwrap();
    assert_eq!(s, SizeSpec::Text("5g".into()));
}
