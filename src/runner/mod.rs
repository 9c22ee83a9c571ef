// ABOUTME: Retrying subprocess runner for the lxc executable.
// ABOUTME: Spawns, waits with a timeout, retries on timeout, captures merged output.

mod capture;
mod error;
mod executor;
mod invocation;
mod policy;

pub use error::{RunError, RunErrorKind};
pub use executor::Executor;
pub use invocation::Invocation;
pub use policy::{ParseTimeoutPolicyError, TimeoutPolicy};

use crate::command::{DEFAULT_PROGRAM, LxcCommand};
use crate::config::Config;
use async_trait::async_trait;
use capture::Capture;
use error::{CaptureSnafu, RetriesExhaustedSnafu, SpawnSnafu};
use snafu::ResultExt;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::{Child, Command};
use tokio::time::Instant;

/// Attempts made before giving up on a command that keeps timing out.
pub const MAX_ATTEMPTS: u32 = 3;

/// Per-attempt timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs lxc commands as child processes.
#[derive(Debug, Clone)]
pub struct CommandRunner {
    program: String,
    timeout: Duration,
    on_timeout: TimeoutPolicy,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

enum Attempt {
    Finished { exit_code: Option<i32>, output: Vec<u8> },
    TimedOut,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            timeout: DEFAULT_TIMEOUT,
            on_timeout: TimeoutPolicy::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .program(config.program.clone())
            .timeout(config.timeout)
            .on_timeout(config.on_timeout)
    }

    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn on_timeout(mut self, policy: TimeoutPolicy) -> Self {
        self.on_timeout = policy;
        self
    }

    pub fn program_name(&self) -> &str {
        &self.program
    }

    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }

    /// Run `command`, retrying up to [`MAX_ATTEMPTS`] times on timeout.
    ///
    /// A non-zero exit is returned as `Ok`; use [`Invocation::into_checked`]
    /// to treat it as an error.
    pub async fn run(&self, command: &LxcCommand) -> Result<Invocation, RunError> {
        let argv = command.argv(&self.program);
        tracing::debug!(
            timeout = ?self.timeout,
            command = %argv.join(" "),
            "running command"
        );

        for attempt in 1..=MAX_ATTEMPTS {
            match self.attempt(command).await? {
                Attempt::Finished { exit_code, output } => {
                    if exit_code != Some(0) {
                        tracing::warn!(?exit_code, command = %argv.join(" "), "non-zero exit");
                    }

                    let output = String::from_utf8_lossy(&output).into_owned();
                    let trimmed = output.trim();
                    if !trimmed.is_empty() {
                        tracing::debug!("stdout+err:\n{}", trimmed);
                    }

                    return Ok(Invocation {
                        argv,
                        exit_code,
                        output,
                        attempts: attempt,
                    });
                }
                Attempt::TimedOut => {
                    tracing::debug!(attempt, timeout = ?self.timeout, "timeout expired");
                    if attempt < MAX_ATTEMPTS {
                        tracing::debug!(next_attempt = attempt + 1, "retrying");
                    }
                }
            }
        }

        tracing::debug!(max_attempts = MAX_ATTEMPTS, "max attempts tried");
        RetriesExhaustedSnafu {
            program: &self.program,
            attempts: MAX_ATTEMPTS,
            timeout: self.timeout,
        }
        .fail()
    }

    async fn attempt(&self, command: &LxcCommand) -> Result<Attempt, RunError> {
        let mut child = Command::new(&self.program)
            .args(command.as_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .context(SpawnSnafu {
                program: &self.program,
            })?;

        let deadline = Instant::now() + self.timeout;
        let capture = start_capture(&mut child);

        let waited = tokio::time::timeout_at(deadline, child.wait()).await;
        match waited {
            Ok(status) => {
                let status = status.context(CaptureSnafu {
                    program: &self.program,
                })?;
                let output = match capture {
                    Some(capture) => {
                        let drained = capture.drain_until(deadline).await.context(CaptureSnafu {
                            program: &self.program,
                        })?;
                        if !drained.complete {
                            tracing::warn!(
                                program = %self.program,
                                "output pipes still open after exit, keeping partial output"
                            );
                        }
                        drained.output
                    }
                    None => Vec::new(),
                };
                Ok(Attempt::Finished {
                    exit_code: status.code(),
                    output,
                })
            }
            Err(_) => {
                if let Some(capture) = capture {
                    capture.abort();
                }
                match self.on_timeout {
                    TimeoutPolicy::Kill => {
                        if let Err(e) = child.kill().await {
                            tracing::warn!(error = %e, "failed to kill timed-out process");
                        }
                    }
                    TimeoutPolicy::Abandon => {
                        tracing::debug!(pid = ?child.id(), "leaving timed-out process running");
                    }
                }
                Ok(Attempt::TimedOut)
            }
        }
    }
}

fn start_capture(child: &mut Child) -> Option<Capture> {
    let stdout = child.stdout.take()?;
    let stderr = child.stderr.take()?;
    Some(Capture::spawn(stdout, stderr))
}

#[async_trait]
impl Executor for CommandRunner {
    async fn execute(&self, command: &LxcCommand) -> Result<Invocation, RunError> {
        self.run(command).await
    }
}
