// ABOUTME: What happens to a process that outlives its timeout.
// ABOUTME: Kill it before retrying, or abandon it in the background.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid timeout policy '{0}' (expected kill or abandon)")]
pub struct ParseTimeoutPolicyError(String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeoutPolicy {
    /// Kill and reap the timed-out process before the next attempt.
    #[default]
    Kill,
    /// Leave the timed-out process running; it may outlive the call.
    Abandon,
}

impl fmt::Display for TimeoutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeoutPolicy::Kill => write!(f, "kill"),
            TimeoutPolicy::Abandon => write!(f, "abandon"),
        }
    }
}

impl FromStr for TimeoutPolicy {
    type Err = ParseTimeoutPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kill" => Ok(TimeoutPolicy::Kill),
            "abandon" => Ok(TimeoutPolicy::Abandon),
            other => Err(ParseTimeoutPolicyError(other.to_string())),
        }
    }
}
