// ABOUTME: Environment variable overrides for runner settings.
// ABOUTME: Reads SIMPLE_LXD_PROGRAM, SIMPLE_LXD_TIMEOUT and SIMPLE_LXD_ON_TIMEOUT.

use super::Config;
use crate::error::{Error, Result};
use crate::runner::TimeoutPolicy;
use std::time::Duration;

pub const PROGRAM_VAR: &str = "SIMPLE_LXD_PROGRAM";
pub const TIMEOUT_VAR: &str = "SIMPLE_LXD_TIMEOUT";
pub const ON_TIMEOUT_VAR: &str = "SIMPLE_LXD_ON_TIMEOUT";

/// Parse a humantime duration such as `90s` or `2m`.
pub fn parse_timeout(value: &str) -> std::result::Result<Duration, String> {
    humantime_serde::re::humantime::parse_duration(value.trim()).map_err(|e| e.to_string())
}

pub(super) fn apply(config: &mut Config) -> Result<()> {
    if let Some(program) = var(PROGRAM_VAR) {
        config.program = program;
    }

    if let Some(timeout) = var(TIMEOUT_VAR) {
        config.timeout = parse_timeout(&timeout).map_err(|reason| Error::InvalidEnv {
            name: TIMEOUT_VAR.to_string(),
            reason,
        })?;
    }

    if let Some(policy) = var(ON_TIMEOUT_VAR) {
        config.on_timeout = policy
            .parse::<TimeoutPolicy>()
            .map_err(|e| Error::InvalidEnv {
                name: ON_TIMEOUT_VAR.to_string(),
                reason: e.to_string(),
            })?;
    }

    Ok(())
}

/// Non-empty value of an environment variable.
fn var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
