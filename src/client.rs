// ABOUTME: High-level lxc client, one async method per sub-command.
// ABOUTME: Logs each call, builds its argument vector and hands it to an Executor.

use crate::command::{self, ExecOptions, LaunchOptions, LxcCommand, PushOptions};
use crate::runner::{CommandRunner, Executor, Invocation, RunError};
use crate::types::Targets;
use std::future::Future;
use tracing::Dispatch;
use tracing::instrument::WithSubscriber;

/// Container operations backed by an [`Executor`].
///
/// Every method returns the executor's result unchanged: a finished run is
/// `Ok` even when lxc exits non-zero.
pub struct Lxc<E = CommandRunner> {
    executor: E,
    dispatch: Option<Dispatch>,
}

impl Default for Lxc<CommandRunner> {
    fn default() -> Self {
        Self::new(CommandRunner::default())
    }
}

impl<E: Executor> Lxc<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            dispatch: None,
        }
    }

    /// Route this client's log events to `dispatch` instead of the global default.
    pub fn with_dispatch(mut self, dispatch: impl Into<Dispatch>) -> Self {
        self.dispatch = Some(dispatch.into());
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    async fn logged<F: Future>(&self, fut: F) -> F::Output {
        match &self.dispatch {
            Some(dispatch) => fut.with_subscriber(dispatch.clone()).await,
            None => fut.await,
        }
    }

    async fn submit(&self, command: LxcCommand) -> Result<Invocation, RunError> {
        self.executor.execute(&command).await
    }

    pub async fn launch(
        &self,
        image: &str,
        name: &str,
        options: &LaunchOptions,
    ) -> Result<Invocation, RunError> {
        self.logged(async {
            tracing::debug!(image, name, ?options, "launching container");
            self.submit(command::launch(image, name, options)).await
        })
        .await
    }

    pub async fn file_pull(
        &self,
        container: &str,
        source_path: &str,
        target_path: &str,
    ) -> Result<Invocation, RunError> {
        self.logged(async {
            tracing::debug!(container, source_path, target_path, "pulling file");
            self.submit(command::file_pull(container, source_path, target_path))
                .await
        })
        .await
    }

    pub async fn file_push(
        &self,
        container: &str,
        source_path: &str,
        target_path: &str,
        options: &PushOptions,
    ) -> Result<Invocation, RunError> {
        self.logged(async {
            tracing::debug!(container, source_path, target_path, ?options, "pushing file");
            self.submit(command::file_push(
                container,
                source_path,
                target_path,
                options,
            ))
            .await
        })
        .await
    }

    pub async fn stop(&self, targets: &Targets) -> Result<Invocation, RunError> {
        self.logged(async {
            tracing::debug!(%targets, "stopping containers");
            self.submit(command::stop(targets)).await
        })
        .await
    }

    pub async fn delete(&self, targets: &Targets) -> Result<Invocation, RunError> {
        self.logged(async {
            tracing::debug!(%targets, "deleting containers");
            self.submit(command::delete(targets)).await
        })
        .await
    }

    pub async fn execute<S: AsRef<str> + std::fmt::Debug + Sync>(
        &self,
        container: &str,
        command_line: &[S],
        options: &ExecOptions,
    ) -> Result<Invocation, RunError> {
        self.logged(async {
            tracing::debug!(container, ?command_line, mode = %options.mode, env = ?options.env, "executing command");
            self.submit(command::execute(container, command_line, options))
                .await
        })
        .await
    }

    pub async fn profile_create(
        &self,
        name: &str,
        remote: Option<&str>,
    ) -> Result<Invocation, RunError> {
        self.logged(async {
            tracing::debug!(name, ?remote, "creating profile");
            self.submit(command::profile_create(name, remote)).await
        })
        .await
    }

    pub async fn profile_copy(
        &self,
        src_name: &str,
        dst_name: &str,
        src_remote: Option<&str>,
        dst_remote: Option<&str>,
    ) -> Result<Invocation, RunError> {
        self.logged(async {
            tracing::debug!(src_name, dst_name, ?src_remote, ?dst_remote, "copying profile");
            self.submit(command::profile_copy(
                src_name, dst_name, src_remote, dst_remote,
            ))
            .await
        })
        .await
    }

    pub async fn profile_set(
        &self,
        name: &str,
        key: &str,
        value: &str,
        remote: Option<&str>,
    ) -> Result<Invocation, RunError> {
        self.logged(async {
            tracing::debug!(name, key, value, ?remote, "setting profile key");
            self.submit(command::profile_set(name, key, value, remote))
                .await
        })
        .await
    }

    pub async fn profile_delete(
        &self,
        name: &str,
        remote: Option<&str>,
    ) -> Result<Invocation, RunError> {
        self.logged(async {
            tracing::debug!(name, ?remote, "deleting profile");
            self.submit(command::profile_delete(name, remote)).await
        })
        .await
    }

    /// Run a command built elsewhere, e.g. by the CLI.
    pub async fn run(&self, command: LxcCommand) -> Result<Invocation, RunError> {
        self.logged(async {
            tracing::debug!(%command, "running prepared command");
            self.submit(command).await
        })
        .await
    }
}
