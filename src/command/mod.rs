// ABOUTME: Argument builders for lxc sub-commands.
// ABOUTME: Each builder turns typed parameters into an immutable LxcCommand.

mod exec;
mod file;
mod launch;
mod lifecycle;
mod profile;

pub use exec::{ExecOptions, execute};
pub use file::{PushOptions, file_pull, file_push};
pub use launch::{LaunchOptions, launch};
pub use lifecycle::{delete, stop};
pub use profile::{profile_copy, profile_create, profile_delete, profile_set};

use std::fmt;

/// Executable invoked when none is configured.
pub const DEFAULT_PROGRAM: &str = "lxc";

/// Ordered tokens following the program name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LxcCommand {
    args: Vec<String>,
}

impl LxcCommand {
    pub(crate) fn new<I, S>(subcommand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: subcommand.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub(crate) fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append `flag value` when `value` is present.
    pub(crate) fn opt(self, flag: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.arg(flag).arg(value),
            None => self,
        }
    }

    /// Tokens after the program name.
    pub fn as_args(&self) -> &[String] {
        &self.args
    }

    /// Full argument vector with `program` as the first token.
    pub fn argv(&self, program: &str) -> Vec<String> {
        std::iter::once(program.to_string())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for LxcCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv(DEFAULT_PROGRAM).join(" "))
    }
}

/// Prefix `name` with `remote:` when a remote is given.
pub fn qualify(remote: Option<&str>, name: &str) -> String {
    match remote {
        Some(remote) => format!("{remote}:{name}"),
        None => name.to_string(),
    }
}

/// `<container>/<path>` as lxc expects for file transfers.
pub(crate) fn container_path(container: &str, path: &str) -> String {
    format!("{}/{}", container, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argv_prepends_program() {
        let cmd = LxcCommand::new(["stop"]).arg("c1");
        assert_eq!(cmd.argv("lxc"), vec!["lxc", "stop", "c1"]);
        assert_eq!(cmd.argv("/usr/bin/lxc")[0], "/usr/bin/lxc");
        assert_eq!(cmd.as_args(), ["stop", "c1"]);
    }

    #[test]
    fn display_uses_default_program() {
        let cmd = LxcCommand::new(["profile", "delete"]).arg("web");
        assert_eq!(cmd.to_string(), "lxc profile delete web");
    }

    #[test]
    fn opt_skips_absent_values() {
        let cmd = LxcCommand::new(["x"])
            .opt("--a", None)
            .opt("--b", Some("1"));
        assert_eq!(cmd.as_args(), ["x", "--b", "1"]);
    }

    #[test]
    fn qualify_with_and_without_remote() {
        assert_eq!(qualify(Some("r1"), "web"), "r1:web");
        assert_eq!(qualify(None, "web"), "web");
    }

    #[test]
    fn container_path_joins_once() {
        assert_eq!(container_path("c1", "/etc/hosts"), "c1/etc/hosts");
        assert_eq!(container_path("c1", "etc/hosts"), "c1/etc/hosts");
        assert_eq!(container_path("r:c1", "/tmp/x"), "r:c1/tmp/x");
    }
}
