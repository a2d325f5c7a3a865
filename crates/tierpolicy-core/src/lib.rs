//! tierpolicy core: error types and the threshold parsers shared by the
//! policy engine and its driver.
//!
//! This crate carries no I/O and no runtime dependencies. Everything here is a
//! pure function over strings and numbers so it can be tested in isolation
//! from tree construction.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed thresholds surface as `TierPolicyError`, never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod units;

/// Shared result type.
pub use error::{ErrorKind, Result, TierPolicyError};
pub use units::size::{parse_size, parse_size_str, SizeSpec};
pub use units::threshold::{parse_threshold, Threshold};
