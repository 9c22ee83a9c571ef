// ABOUTME: Terminal mode for `lxc exec`.
// ABOUTME: Parses and renders the auto, interactive and non-interactive values.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid exec mode '{0}' (expected auto, interactive or non-interactive)")]
pub struct ParseExecModeError(String);

/// How `lxc exec` attaches a terminal to the command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecMode {
    Auto,
    Interactive,
    #[default]
    NonInteractive,
}

impl ExecMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecMode::Auto => "auto",
            ExecMode::Interactive => "interactive",
            ExecMode::NonInteractive => "non-interactive",
        }
    }
}

impl fmt::Display for ExecMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecMode {
    type Err = ParseExecModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ExecMode::Auto),
            "interactive" => Ok(ExecMode::Interactive),
            "non-interactive" => Ok(ExecMode::NonInteractive),
            other => Err(ParseExecModeError(other.to_string())),
        }
    }
}
