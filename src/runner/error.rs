// ABOUTME: Runner error types with SNAFU pattern.
// ABOUTME: Separates spawn failures, exhausted retries and tool-reported failures.

use snafu::Snafu;
use std::time::Duration;

/// Why an lxc invocation did not produce a usable result.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RunError {
    #[snafu(display("failed to spawn {program}: {source}"))]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[snafu(display(
        "{program} did not finish within {timeout:?} in {attempts} attempts"
    ))]
    RetriesExhausted {
        program: String,
        attempts: u32,
        timeout: Duration,
    },

    #[snafu(display("failed to capture output of {program}: {source}"))]
    Capture {
        program: String,
        source: std::io::Error,
    },

    #[snafu(display("`{command}` exited with {}", describe_exit(*exit_code)))]
    Failed {
        command: String,
        exit_code: Option<i32>,
        output: String,
    },
}

fn describe_exit(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunErrorKind {
    /// The executable could not be started.
    SpawnFailed,
    /// Every attempt hit the timeout.
    RetriesExhausted,
    /// Reading the child's output failed.
    CaptureFailed,
    /// The tool ran and reported failure through its exit status.
    ToolFailed,
}

impl RunError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> RunErrorKind {
        match self {
            RunError::Spawn { .. } => RunErrorKind::SpawnFailed,
            RunError::RetriesExhausted { .. } => RunErrorKind::RetriesExhausted,
            RunError::Capture { .. } => RunErrorKind::CaptureFailed,
            RunError::Failed { .. } => RunErrorKind::ToolFailed,
        }
    }

    /// Exit code reported by the tool, if it ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunError::Failed { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}
