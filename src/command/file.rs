// ABOUTME: Builders for `lxc file pull` and `lxc file push`.
// ABOUTME: Moves files between the host and a container.

use super::{LxcCommand, container_path};

/// Ownership and permission overrides for pushed files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushOptions {
    pub uid: Option<String>,
    pub gid: Option<String>,
    pub mode: Option<String>,
}

impl PushOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    pub fn gid(mut self, gid: impl Into<String>) -> Self {
        self.gid = Some(gid.into());
        self
    }

    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}

/// `lxc file pull <container>/<source> <target>`
pub fn file_pull(container: &str, source_path: &str, target_path: &str) -> LxcCommand {
    LxcCommand::new(["file", "pull"])
        .arg(container_path(container, source_path))
        .arg(target_path)
}

/// `lxc file push [--uid U] [--gid G] [--mode M] <source> <container>/<target>`
pub fn file_push(
    container: &str,
    source_path: &str,
    target_path: &str,
    options: &PushOptions,
) -> LxcCommand {
    LxcCommand::new(["file", "push"])
        .opt("--uid", options.uid.as_deref())
        .opt("--gid", options.gid.as_deref())
        .opt("--mode", options.mode.as_deref())
        .arg(source_path)
        .arg(container_path(container, target_path))
}
