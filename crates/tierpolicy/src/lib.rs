//! Top-level facade crate for tierpolicy.
//!
//! Re-exports core types and the engine library so users can depend on a single crate.

pub mod core {
    pub use tierpolicy_core::*;
}

pub mod engine {
    pub use tierpolicy_engine::*;
}

pub use tierpolicy_core::{Result, TierPolicyError};
pub use tierpolicy_engine::{PolicyConfig, PolicyNode};
