// ABOUTME: Executor trait for running built lxc commands.
// ABOUTME: CommandRunner is the process-spawning implementation.

use super::error::RunError;
use super::invocation::Invocation;
use crate::command::LxcCommand;
use async_trait::async_trait;

/// Runs an [`LxcCommand`] and reports how it finished.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, command: &LxcCommand) -> Result<Invocation, RunError>;
}
