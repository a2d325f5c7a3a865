//! tierpolicy engine library entry.
//!
//! This crate loads a storage policy document, compiles it into a tree of
//! policies, and answers "which tier does this file belong on" and "which
//! policies use this tier" queries. It is consumed by the `tierpolicy` binary
//! (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod policy;

pub use config::PolicyConfig;
pub use policy::PolicyNode;
