use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use tracing::trace;

use tierpolicy_core::error::{Result, TierPolicyError};
use tierpolicy_core::{parse_size, parse_threshold, Threshold};

use crate::config::PolicyConfig;

/// Age constraint plus the text it was parsed from (kept for rendering).
#[derive(Debug, Clone)]
struct AgeLimit {
    written: String,
    threshold: Threshold,
}

impl AgeLimit {
    fn parse(written: &str) -> Result<Self> {
        Ok(Self {
            written: written.trim().to_string(),
            threshold: parse_threshold(written)?,
        })
    }
}

/// A compiled storage policy and the policies that override it.
///
/// Built once by [`PolicyNode::from_config`]; there is no mutating API.
#[derive(Debug, Clone)]
pub struct PolicyNode {
    name: Option<String>,
    pattern: Regex,
    storage: Vec<String>,
    regex_older_than: Option<AgeLimit>,
    mod_older_than: Option<AgeLimit>,
    larger_than: Option<u64>,
    overridden_by: Vec<PolicyNode>,
}

impl PolicyNode {
    /// Compile a policy and, recursively, its overrides.
    ///
    /// The first failing child aborts the whole build with its own error.
    pub fn from_config(cfg: &PolicyConfig) -> Result<Self> {
        let source = cfg.regex.as_deref().unwrap_or("");
        let pattern = Regex::new(source).map_err(|e| TierPolicyError::InvalidRegex {
            pattern: source.to_string(),
            source: e,
        })?;

        let regex_older_than = cfg
            .regex_older_than
            .as_deref()
            .map(AgeLimit::parse)
            .transpose()?;
        let mod_older_than = cfg
            .mod_older_than
            .as_deref()
            .map(AgeLimit::parse)
            .transpose()?;

        let storage = match &cfg.storage {
            Some(list) if !list.is_empty() => dedup_in_order(list),
            _ => return Err(TierPolicyError::MissingStorage),
        };

        let larger_than = cfg.larger_than.as_ref().map(parse_size).transpose()?;

        let overridden_by = cfg
            .overridden_by
            .iter()
            .map(PolicyNode::from_config)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: cfg.name.clone(),
            pattern,
            storage,
            regex_older_than,
            mod_older_than,
            larger_than,
            overridden_by,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Storage tiers, in document order without duplicates.
    pub fn storage(&self) -> &[String] {
        &self.storage
    }

    pub fn regex_older_than(&self) -> Option<&Threshold> {
        self.regex_older_than.as_ref().map(|l| &l.threshold)
    }

    pub fn mod_older_than(&self) -> Option<&Threshold> {
        self.mod_older_than.as_ref().map(|l| &l.threshold)
    }

    /// Minimum size in bytes.
    pub fn larger_than(&self) -> Option<u64> {
        self.larger_than
    }

    pub fn overridden_by(&self) -> &[PolicyNode] {
        &self.overridden_by
    }

    /// Does this policy alone (ignoring overrides) apply to the file?
    ///
    /// Age thresholds resolve against the local wall clock.
    pub fn matches(
        &self,
        path: &str,
        size: Option<u64>,
        mod_time: Option<NaiveDateTime>,
    ) -> Result<bool> {
        self.matches_at(path, size, mod_time, Local::now().naive_local())
    }

    /// [`matches`](Self::matches) with relative thresholds resolved against
    /// `now`.
    ///
    /// Errors when a constraint needs data the query did not supply: a size
    /// for `larger_than`, a mod time for `mod_older_than`, or
    /// `year`/`month`/`day` groups for `regex_older_than`.
    pub fn matches_at(
        &self,
        path: &str,
        size: Option<u64>,
        mod_time: Option<NaiveDateTime>,
        now: NaiveDateTime,
    ) -> Result<bool> {
        let Some(caps) = self.pattern.captures(path) else {
            return Ok(false);
        };

        if let Some(min) = self.larger_than {
            let size = size.ok_or_else(|| TierPolicyError::MissingSize(self.to_string()))?;
            if size < min {
                trace!(policy = %self, path, size, "too small");
                return Ok(false);
            }
        }

        if let Some(limit) = &self.mod_older_than {
            let mod_time =
                mod_time.ok_or_else(|| TierPolicyError::MissingModTime(self.to_string()))?;
            if mod_time > limit.threshold.resolve(now) {
                trace!(policy = %self, path, %mod_time, "modified too recently");
                return Ok(false);
            }
        }

        if let Some(limit) = &self.regex_older_than {
            let (Some(year), Some(month), Some(day)) =
                (caps.name("year"), caps.name("month"), caps.name("day"))
            else {
                return Err(TierPolicyError::MissingDateGroups(self.to_string()));
            };
            let path_date = calendar_date(year.as_str(), month.as_str(), day.as_str())
                .ok_or_else(|| TierPolicyError::InvalidPathDate {
                    date: format!("{}-{}-{}", year.as_str(), month.as_str(), day.as_str()),
                    policy: self.to_string(),
                })?;
            if path_date > limit.threshold.resolve(now) {
                trace!(policy = %self, path, %path_date, "path date too recent");
                return Ok(false);
            }
        }

        trace!(policy = %self, path, "matched");
        Ok(true)
    }

    /// True when `storage` holds every tier in `includes` and none in
    /// `excludes`.
    pub fn stores_on<I, E>(&self, includes: &[I], excludes: &[E]) -> bool
    where
        I: AsRef<str>,
        E: AsRef<str>,
    {
        let has = |tier: &str| self.storage.iter().any(|s| s == tier);
        includes.iter().all(|t| has(t.as_ref())) && !excludes.iter().any(|t| has(t.as_ref()))
    }
}

impl fmt::Display for PolicyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} ({})", self.pattern.as_str())?,
            None => write!(f, "{}", self.pattern.as_str())?,
        }
        if let Some(limit) = &self.mod_older_than {
            write!(f, " mod time older than {}", limit.written)?;
        }
        if let Some(limit) = &self.regex_older_than {
            write!(f, " regex time older than {}", limit.written)?;
        }
        if let Some(min) = self.larger_than {
            write!(f, " >{min} bytes")?;
        }
        Ok(())
    }
}

fn dedup_in_order(tiers: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tiers.len());
    for t in tiers {
        if !out.contains(t) {
            out.push(t.clone());
        }
    }
    out
}

fn calendar_date(year: &str, month: &str, day: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(
        year.parse().ok()?,
        month.parse().ok()?,
        day.parse().ok()?,
    )?;
    Some(date.and_time(NaiveTime::default()))
}
