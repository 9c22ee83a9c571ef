// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Args, Parser, Subcommand};
use simple_lxd::output::OutputMode;
use simple_lxd::runner::TimeoutPolicy;
use simple_lxd::types::ExecMode;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "simple-lxd")]
#[command(about = "Run LXD container operations through the lxc client")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file (defaults to simple-lxd.yml in the current directory)
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// lxc executable to invoke
    #[arg(long)]
    pub program: Option<String>,

    /// Per-attempt timeout, e.g. 60s or 2m
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// What to do with a process that outlives the timeout
    #[arg(long, value_name = "kill|abandon")]
    pub on_timeout: Option<TimeoutPolicy>,

    /// Print the lxc command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, default_value_t = OutputMode::Normal, value_name = "normal|quiet|json")]
    pub output: OutputMode,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_duration(value: &str) -> Result<Duration, String> {
    simple_lxd::config::parse_timeout(value)
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create and start a container from an image
    Launch {
        /// Image, optionally prefixed with a remote
        image: String,
        /// Container name, optionally prefixed with a remote
        name: String,
        /// Destroy the container when it stops
        #[arg(short, long)]
        ephemeral: bool,
        /// Profile to apply (repeatable)
        #[arg(short, long = "profile")]
        profiles: Vec<String>,
        /// Configuration key=value (repeatable)
        #[arg(short, long = "config", value_name = "KEY=VALUE")]
        config: Vec<String>,
        /// Instance type
        #[arg(short = 't', long = "type")]
        instance_type: Option<String>,
    },

    /// Transfer files to or from a container
    File {
        #[command(subcommand)]
        command: FileCommands,
    },

    /// Stop running containers
    Stop {
        #[arg(required = true)]
        containers: Vec<String>,
    },

    /// Delete containers or snapshots
    Delete {
        #[arg(required = true, value_name = "CONTAINER[/SNAPSHOT]")]
        containers: Vec<String>,
    },

    /// Execute a command inside a container
    Exec {
        container: String,
        /// Terminal mode
        #[arg(long, default_value_t = ExecMode::NonInteractive)]
        mode: ExecMode,
        /// Environment variable KEY=VALUE (repeatable)
        #[arg(long, value_name = "KEY=VALUE")]
        env: Vec<String>,
        /// Command line to run
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },

    /// Manage profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
}

#[derive(Subcommand)]
pub enum FileCommands {
    /// Pull a file out of a container
    Pull {
        container: String,
        source: String,
        target: String,
    },

    /// Push a file into a container
    Push {
        source: String,
        container: String,
        target: String,
        #[arg(long)]
        uid: Option<String>,
        #[arg(long)]
        gid: Option<String>,
        #[arg(long)]
        mode: Option<String>,
    },
}

#[derive(Args)]
pub struct RemoteArg {
    /// Remote hosting the profile
    #[arg(long)]
    pub remote: Option<String>,
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Create a new profile
    Create {
        name: String,
        #[command(flatten)]
        remote: RemoteArg,
    },

    /// Copy a profile
    Copy {
        source: String,
        destination: String,
        #[arg(long)]
        src_remote: Option<String>,
        #[arg(long)]
        dst_remote: Option<String>,
    },

    /// Set a profile configuration key
    Set {
        name: String,
        key: String,
        value: String,
        #[command(flatten)]
        remote: RemoteArg,
    },

    /// Delete a profile
    Delete {
        name: String,
        #[command(flatten)]
        remote: RemoteArg,
    },
}
