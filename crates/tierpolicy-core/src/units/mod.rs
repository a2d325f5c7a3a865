//! Quantity parsers (age thresholds and byte sizes).
//!
//! Both accept the same loose `<number><unit>` prefix:
//! - number: decimal digits with an optional fraction (`3`, `1.5`)
//! - optional whitespace
//! - a unit letter, case-insensitive
//!
//! Anything after the unit letter is ignored (`3 months`, `10 kB`, `3 m ago`).

use std::sync::OnceLock;

use regex::Regex;

pub mod size;
pub mod threshold;

fn quantity_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^([0-9.]+)\s*([A-Za-z])").ok())
        .as_ref()
}

/// Split `"<number> <unit...>"` into the value and the lowercased unit letter.
///
/// Returns `None` when the shape does not fit; callers map that to their own
/// error variant.
pub(crate) fn split_quantity(s: &str) -> Option<(f64, char)> {
    let caps = quantity_pattern()?.captures(s.trim())?;
    let value: f64 = caps.get(1)?.as_str().parse().ok()?;
    let unit = caps.get(2)?.as_str().chars().next()?;
    Some((value, unit.to_ascii_lowercase()))
}
