// ABOUTME: Builder for `lxc exec`.
// ABOUTME: Runs a command line inside a container.

use super::LxcCommand;
use crate::types::ExecMode;

/// Options for `lxc exec`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOptions {
    pub mode: ExecMode,
    /// `KEY=VALUE` pairs.
    pub env: Vec<String>,
}

impl ExecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: ExecMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn env(mut self, entry: impl Into<String>) -> Self {
        self.env.push(entry.into());
        self
    }
}

/// `lxc exec <container> --mode=<m> [--env K=V]... -- <command...>`
pub fn execute<S: AsRef<str>>(
    container: &str,
    command_line: &[S],
    options: &ExecOptions,
) -> LxcCommand {
    let mut cmd = LxcCommand::new(["exec", container]).arg(format!("--mode={}", options.mode));
    for entry in &options.env {
        cmd = cmd.arg("--env").arg(entry);
    }
    cmd.arg("--")
        .args(command_line.iter().map(|token| token.as_ref()))
}
