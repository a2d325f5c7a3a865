use serde::Deserialize;
use tierpolicy_core::SizeSpec;

/// One policy as written in the policy document; `overridden_by` nests the
/// same shape recursively.
///
/// Unknown keys are ignored. Only the checks needed to build a
/// [`PolicyNode`](crate::policy::PolicyNode) are applied, and they are applied
/// at construction, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PolicyConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub regex: Option<String>,

    /// `YYYY-MM-DD` or a period such as `3m`, tested against the
    /// `year`/`month`/`day` groups of `regex`.
    #[serde(default)]
    pub regex_older_than: Option<String>,

    /// Same format, tested against the file's modification time.
    #[serde(default)]
    pub mod_older_than: Option<String>,

    #[serde(default)]
    pub storage: Option<Vec<String>>,

    #[serde(default)]
    pub larger_than: Option<SizeSpec>,

    #[serde(default)]
    pub overridden_by: Vec<PolicyConfig>,
}
