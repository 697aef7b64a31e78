// Job Kind Domain Model

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Closed set of job kinds known to this deployment.
///
/// Not user-extensible at runtime: adding a kind means adding a variant here
/// and a handler registration in the jobs crate. The registry builder checks
/// the mapping is total over [`JobKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobKind {
    #[serde(rename = "queue/load_stream")]
    QueueLoadStream,
}

impl JobKind {
    /// Every variant, for registration-time completeness checks.
    pub const ALL: &'static [JobKind] = &[JobKind::QueueLoadStream];

    /// Wire/config form of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::QueueLoadStream => "queue/load_stream",
        }
    }
}

impl std::fmt::Display for JobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queue/load_stream" => Ok(JobKind::QueueLoadStream),
            other => Err(CoreError::UnknownJobKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_string_roundtrip() {
        for kind in JobKind::ALL {
            let parsed: JobKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, *kind);
        }
    }

    #[test]
    fn test_unknown_kind_fails() {
        let err = "queue/does_not_exist".parse::<JobKind>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownJobKind(_)));
    }
}
