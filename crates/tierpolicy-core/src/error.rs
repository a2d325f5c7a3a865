//! Shared error type across tierpolicy crates.

use thiserror::Error;

/// Error classification (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The policy document could not be turned into a tree.
    Construction,
    /// A query lacked data a matched policy needs.
    Usage,
    /// Reading or fetching the policy document failed.
    Io,
}

impl ErrorKind {
    /// String representation used in driver output.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Construction => "CONSTRUCTION",
            ErrorKind::Usage => "USAGE",
            ErrorKind::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TierPolicyError>;

/// Unified error type used by core and engine.
///
/// Usage variants carry the rendered form of the policy that raised them.
#[derive(Debug, Error)]
pub enum TierPolicyError {
    #[error("need a storage list")]
    MissingStorage,
    #[error("invalid regex {pattern:?}: {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error(
        "can not interpret {0:?} as a YYYY-MM-DD date or a period of form N days, N weeks, N months or N years"
    )]
    InvalidThreshold(String),
    #[error("can not interpret {0:?} as a size of form N bytes, N kB, N MB, N GB or N TB")]
    InvalidSize(String),
    #[error("invalid policy document: {0}")]
    InvalidConfig(String),

    #[error("this policy needs a size to work ({0})")]
    MissingSize(String),
    #[error("this policy needs a mod time to work ({0})")]
    MissingModTime(String),
    #[error("regex_older_than requires year/month/day named groups ({0})")]
    MissingDateGroups(String),
    #[error("path date {date} is not a calendar date ({policy})")]
    InvalidPathDate { date: String, policy: String },

    #[error("io: {0}")]
    Io(String),
}

impl TierPolicyError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TierPolicyError::MissingStorage
            | TierPolicyError::InvalidRegex { .. }
            | TierPolicyError::InvalidThreshold(_)
            | TierPolicyError::InvalidSize(_)
            | TierPolicyError::InvalidConfig(_) => ErrorKind::Construction,
            TierPolicyError::MissingSize(_)
            | TierPolicyError::MissingModTime(_)
            | TierPolicyError::MissingDateGroups(_)
            | TierPolicyError::InvalidPathDate { .. } => ErrorKind::Usage,
            TierPolicyError::Io(_) => ErrorKind::Io,
        }
    }
}
