//! Age thresholds: an absolute date or a period counted back from "now".

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::split_quantity;
use crate::error::{Result, TierPolicyError};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Days per period unit. Months and years are fixed approximations, not
/// calendar arithmetic.
const DAYS_PER_UNIT: [(char, f64); 4] = [('d', 1.0), ('w', 7.0), ('m', 30.0), ('y', 365.0)];

/// Cutoff for an "older than" constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threshold {
    /// Fixed instant (midnight of a `YYYY-MM-DD` date).
    Absolute(NaiveDateTime),
    /// Age counted back from the query time.
    Relative(Duration),
}

impl Threshold {
    /// Cutoff instant for a query made at `now`.
    ///
    /// A relative age reaching past the representable range clamps to the
    /// earliest instant, so nothing is old enough.
    pub fn resolve(&self, now: NaiveDateTime) -> NaiveDateTime {
        match self {
            Threshold::Absolute(at) => *at,
            Threshold::Relative(age) => now
                .checked_sub_signed(*age)
                .unwrap_or(NaiveDateTime::MIN),
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Threshold::Absolute(at) => write!(f, "{}", at.format("%Y-%m-%d")),
            Threshold::Relative(age) => {
                let days = age.num_milliseconds() as f64 / MILLIS_PER_DAY;
                write!(f, "{days} days")
            }
        }
    }
}

/// Parse `YYYY-MM-DD` or `<number><d|w|m|y>`.
pub fn parse_threshold(s: &str) -> Result<Threshold> {
    let trimmed = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Threshold::Absolute(date.and_time(NaiveTime::default())));
    }

    let invalid = || TierPolicyError::InvalidThreshold(s.to_string());
    let (value, unit) = split_quantity(trimmed).ok_or_else(invalid)?;
    let per_unit = DAYS_PER_UNIT
        .iter()
        .find(|(u, _)| *u == unit)
        .map(|(_, days)| *days)
        .ok_or_else(invalid)?;

    let millis = value * per_unit * MILLIS_PER_DAY;
    if !millis.is_finite() {
        return Err(invalid());
    }
    let age = Duration::try_milliseconds(millis.round() as i64).ok_or_else(invalid)?;
    Ok(Threshold::Relative(age))
}
