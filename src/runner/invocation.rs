// ABOUTME: Result of a finished lxc invocation.
// ABOUTME: Holds the argv, exit status and merged stdout/stderr text.

use super::error::RunError;
use serde::Serialize;

/// A process that ran to completion within the timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub argv: Vec<String>,
    /// None when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Standard output and standard error in arrival order.
    pub output: String,
    /// Attempts used, counting the successful one.
    pub attempts: u32,
}

impl Invocation {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn command_line(&self) -> String {
        self.argv.join(" ")
    }

    /// Convert a non-zero exit into [`RunError::Failed`].
    pub fn into_checked(self) -> Result<Invocation, RunError> {
        if self.success() {
            return Ok(self);
        }
        Err(RunError::Failed {
            command: self.command_line(),
            exit_code: self.exit_code,
            output: self.output,
        })
    }
}
