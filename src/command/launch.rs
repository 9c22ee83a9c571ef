// ABOUTME: Builder for `lxc launch`.
// ABOUTME: Creates and starts a container from an image.

use super::LxcCommand;

/// Optional modifiers for `lxc launch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub ephemeral: bool,
    pub profiles: Vec<String>,
    /// `key=value` pairs.
    pub config: Vec<String>,
    pub instance_type: Option<String>,
}

impl LaunchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ephemeral(mut self, ephemeral: bool) -> Self {
        self.ephemeral = ephemeral;
        self
    }

    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profiles.push(profile.into());
        self
    }

    pub fn config(mut self, entry: impl Into<String>) -> Self {
        self.config.push(entry.into());
        self
    }

    pub fn instance_type(mut self, instance_type: impl Into<String>) -> Self {
        self.instance_type = Some(instance_type.into());
        self
    }
}

/// `lxc launch <image> <name> [--ephemeral] [--profile p]... [--config k=v]... [--type t]`
pub fn launch(image: &str, name: &str, options: &LaunchOptions) -> LxcCommand {
    let mut cmd = LxcCommand::new(["launch", image, name]);
    if options.ephemeral {
        cmd = cmd.arg("--ephemeral");
    }
    for profile in &options.profiles {
        cmd = cmd.arg("--profile").arg(profile);
    }
    for entry in &options.config {
        cmd = cmd.arg("--config").arg(entry);
    }
    cmd.opt("--type", options.instance_type.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_launch() {
        let cmd = launch("ubuntu:20.04", "c1", &LaunchOptions::default());
        assert_eq!(cmd.argv("lxc"), vec!["lxc", "launch", "ubuntu:20.04", "c1"]);
    }

    #[test]
    fn ephemeral_launch() {
        let cmd = launch("ubuntu:20.04", "c1", &LaunchOptions::new().ephemeral(true));
        assert_eq!(
            cmd.argv("lxc"),
            vec!["lxc", "launch", "ubuntu:20.04", "c1", "--ephemeral"]
        );
    }

    #[test]
    fn flags_follow_fixed_order() {
        // Set in reverse to show insertion order does not matter.
        let options = LaunchOptions::new()
            .instance_type("t2.micro")
            .config("limits.cpu=2")
            .profile("default")
            .ephemeral(true);
        let cmd = launch("images:alpine/3.19", "remote:c2", &options);
        assert_eq!(
            cmd.as_args(),
            [
                "launch",
                "images:alpine/3.19",
                "remote:c2",
                "--ephemeral",
                "--profile",
                "default",
                "--config",
                "limits.cpu=2",
                "--type",
                "t2.micro",
            ]
        );
    }

    #[test]
    fn repeated_profiles_keep_order() {
        let options = LaunchOptions::new().profile("base").profile("web");
        let cmd = launch("ubuntu", "c1", &options);
        assert_eq!(
            &cmd.as_args()[3..],
            ["--profile", "base", "--profile", "web"]
        );
    }
}
