//! Byte size thresholds (`larger_than`).

use serde::Deserialize;

use super::split_quantity;
use crate::error::{Result, TierPolicyError};

/// Decimal multipliers, not binary (`k` is 1e3).
const BYTES_PER_UNIT: [(char, f64); 5] = [
    ('b', 1.0),
    ('k', 1e3),
    ('m', 1e6),
    ('g', 1e9),
    ('t', 1e12),
];

/// Size as written in a policy document: a plain integer or `"<number><unit>"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    Bytes(u64),
    Text(String),
}

/// Resolve a size to a byte count. Integers pass through unchanged.
pub fn parse_size(spec: &SizeSpec) -> Result<u64> {
    match spec {
        SizeSpec::Bytes(n) => Ok(*n),
        SizeSpec::Text(s) => parse_size_str(s),
    }
}

/// Parse `<number><b|k|m|g|t>` into a byte count.
///
/// Fractional results round up, so `size >= threshold` keeps its meaning in
/// whole bytes (`1.5b` becomes 2).
pub fn parse_size_str(s: &str) -> Result<u64> {
    let invalid = || TierPolicyError::InvalidSize(s.to_string());
    let (value, unit) = split_quantity(s).ok_or_else(invalid)?;
    let multiplier = BYTES_PER_UNIT
        .iter()
        .find(|(u, _)| *u == unit)
        .map(|(_, m)| *m)
        .ok_or_else(invalid)?;

    let bytes = (value * multiplier).ceil();
    if !bytes.is_finite() || bytes >= u64::MAX as f64 {
        return Err(invalid());
    }
    Ok(bytes as u64)
}
