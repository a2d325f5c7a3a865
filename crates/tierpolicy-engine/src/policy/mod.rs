//! Policy tree (compiled rules, override lookup, storage enumeration).
//!
//! Compiles a [`PolicyConfig`](crate::config::PolicyConfig) into an immutable
//! tree once, then answers read-only queries against it. Nodes are
//! `Send + Sync`, so a tree can be shared via `Arc` without locking.

pub mod node;
pub mod report;
pub mod tree;

pub use node::PolicyNode;
pub use report::{storage_queries, storage_report, StorageQuery, StorageReportRow, DEFAULT_TIERS};
pub use tree::Iter;
