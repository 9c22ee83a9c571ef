// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use crate::runner::Invocation;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Captured lxc output as-is
    #[default]
    Normal,
    /// Only failures are printed
    Quiet,
    /// One JSON object per result
    Json,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputMode::Normal => write!(f, "normal"),
            OutputMode::Quiet => write!(f, "quiet"),
            OutputMode::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(OutputMode::Normal),
            "quiet" => Ok(OutputMode::Quiet),
            "json" => Ok(OutputMode::Json),
            other => Err(format!("unknown output mode: {other}")),
        }
    }
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Print the argument vector a dry run would have executed.
    pub fn dry_run(&self, argv: &[String]) {
        match self.mode {
            OutputMode::Json => self.emit(&JsonEvent::DryRun { argv }),
            OutputMode::Normal | OutputMode::Quiet => println!("{}", argv.join(" ")),
        }
    }

    /// Print the result of a finished invocation.
    pub fn invocation(&self, invocation: &Invocation) {
        match self.mode {
            OutputMode::Normal => print!("{}", invocation.output),
            OutputMode::Quiet => {
                if !invocation.success() {
                    eprint!("{}", invocation.output);
                }
            }
            OutputMode::Json => self.emit(&JsonEvent::Result(invocation)),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                if let Ok(json) = serde_json::to_string(&JsonEvent::Error { message }) {
                    eprintln!("{json}");
                }
            }
        }
    }

    fn emit(&self, event: &JsonEvent<'_>) {
        if let Ok(json) = serde_json::to_string(event) {
            println!("{json}");
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum JsonEvent<'a> {
    DryRun { argv: &'a [String] },
    Result(&'a Invocation),
    Error { message: &'a str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modes() {
        assert_eq!("json".parse::<OutputMode>().unwrap(), OutputMode::Json);
        assert_eq!("quiet".parse::<OutputMode>().unwrap(), OutputMode::Quiet);
        assert!("loud".parse::<OutputMode>().is_err());
    }

    #[test]
    fn result_event_is_tagged() {
        let invocation = Invocation {
            argv: vec!["lxc".into(), "stop".into(), "c1".into()],
            exit_code: Some(0),
            output: String::new(),
            attempts: 1,
        };
        let json = serde_json::to_value(JsonEvent::Result(&invocation)).unwrap();
        assert_eq!(json["event"], "result");
        assert_eq!(json["exit_code"], 0);
        assert_eq!(json["argv"][1], "stop");
    }
}
