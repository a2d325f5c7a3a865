//! Storage tier breakdown: which policies put data on a tier, with and
//! without the other tiers.

use std::fmt;

use super::node::PolicyNode;

/// Default tiers for [`storage_report`].
pub const DEFAULT_TIERS: [&str; 3] = ["disk", "tape", "obstore"];

/// One `find_policy_by_storage` question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageQuery {
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl fmt::Display for StorageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.includes.join(" and "))?;
        if !self.excludes.is_empty() {
            write!(f, ", not {}", self.excludes.join(" or "))?;
        }
        Ok(())
    }
}

/// A query and the policies answering it.
#[derive(Debug)]
pub struct StorageReportRow<'a> {
    pub query: StorageQuery,
    pub policies: Vec<&'a PolicyNode>,
}

/// Queries asked for each tier, in order: the tier excluding all others,
/// excluding each other tier alone, then the tier with no exclusions.
pub fn storage_queries<S: AsRef<str>>(tiers: &[S]) -> Vec<StorageQuery> {
    let mut out = Vec::new();
    for tier in tiers {
        let tier = tier.as_ref();
        let others: Vec<String> = tiers
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| *t != tier)
            .map(str::to_string)
            .collect();
        let includes = vec![tier.to_string()];

        if !others.is_empty() {
            out.push(StorageQuery {
                includes: includes.clone(),
                excludes: others.clone(),
            });
        }
        if others.len() > 1 {
            for other in &others {
                out.push(StorageQuery {
                    includes: includes.clone(),
                    excludes: vec![other.clone()],
                });
            }
        }
        out.push(StorageQuery {
            includes,
            excludes: Vec::new(),
        });
    }
    out
}

/// Answer every query from [`storage_queries`] against `root`.
pub fn storage_report<'a, S: AsRef<str>>(
    root: &'a PolicyNode,
    tiers: &[S],
) -> Vec<StorageReportRow<'a>> {
    storage_queries(tiers)
        .into_iter()
        .map(|query| {
            let policies =
                root.find_policy_by_storage(query.includes.as_slice(), query.excludes.as_slice());
            StorageReportRow { query, policies }
        })
        .collect()
}
