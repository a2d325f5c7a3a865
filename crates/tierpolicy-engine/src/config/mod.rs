//! Policy document loaders.
//!
//! The document is YAML (JSON parses too). It can come from a string, a local
//! file, or an `http(s)://` location.

pub mod schema;

use std::fs;

use tierpolicy_core::error::{Result, TierPolicyError};
use tracing::debug;

use crate::policy::PolicyNode;

pub use schema::PolicyConfig;

pub fn load_from_file(path: &str) -> Result<PolicyConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| TierPolicyError::Io(format!("read policy {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PolicyConfig> {
    serde_yaml::from_str(s)
        .map_err(|e| TierPolicyError::InvalidConfig(format!("invalid yaml: {e}")))
}

pub async fn fetch_from_url(url: &str) -> Result<PolicyConfig> {
    let body = reqwest::get(url)
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(|e| TierPolicyError::Io(format!("fetch policy {url} failed: {e}")))?
        .text()
        .await
        .map_err(|e| TierPolicyError::Io(format!("read policy body {url} failed: {e}")))?;
    load_from_str(&body)
}

/// Load from a URL when `location` looks like one, otherwise from a file.
pub async fn load_from_location(location: &str) -> Result<PolicyConfig> {
    if is_url(location) {
        debug!(%location, "fetching policy document");
        fetch_from_url(location).await
    } else {
        debug!(%location, "reading policy document");
        load_from_file(location)
    }
}

/// Compile a loaded document into a policy tree.
pub fn build_tree(cfg: &PolicyConfig) -> Result<PolicyNode> {
    let tree = PolicyNode::from_config(cfg)?;
    debug!(nodes = tree.len(), "policy tree built");
    Ok(tree)
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_schemes_select_fetch() {
        assert!(is_url("https://example.org/policy.yaml"));
        assert!(is_url("http://localhost:8000/policy.yaml"));
        assert!(!is_url("policy.yaml"));
        assert!(!is_url("/etc/tierpolicy/policy.yaml"));
        assert!(!is_url("file:///etc/policy.yaml"));
        assert!(!is_url("ftp://example.org/policy.yaml"));
    }
}
