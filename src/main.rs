// ABOUTME: Entry point for the simple-lxd CLI application.
// ABOUTME: Parses arguments, resolves settings and runs the lxc command.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, FileCommands, ProfileCommands};
use simple_lxd::command::{self, ExecOptions, LaunchOptions, LxcCommand, PushOptions};
use simple_lxd::config::Config;
use simple_lxd::error::{Error, Result};
use simple_lxd::output::Output;
use simple_lxd::types::Targets;
use simple_lxd::{CommandRunner, Lxc};
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(cli.output);

    match run(cli, &output).await {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output.error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Run the requested command, returning the exit code to report.
async fn run(cli: Cli, output: &Output) -> Result<i32> {
    let config = load_config(&cli)?;
    let runner = CommandRunner::from_config(&config);
    let command = build_command(cli.command)?;

    if cli.dry_run {
        output.dry_run(&command.argv(runner.program_name()));
        return Ok(0);
    }

    let invocation = Lxc::new(runner).run(command).await?;
    output.invocation(&invocation);

    // Signal-terminated runs have no code of their own.
    Ok(invocation.exit_code.unwrap_or(1))
}

/// Defaults < settings file < environment < flags.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config_file {
        Some(path) => Config::load(path)?,
        None => Config::discover_or_default(&env::current_dir()?)?,
    };
    let mut config = config.apply_env()?;

    if let Some(program) = &cli.program {
        config.program = program.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    if let Some(policy) = cli.on_timeout {
        config.on_timeout = policy;
    }
    config.validate()?;
    Ok(config)
}

fn build_command(command: Commands) -> Result<LxcCommand> {
    let command = match command {
        Commands::Launch {
            image,
            name,
            ephemeral,
            profiles,
            config,
            instance_type,
        } => {
            let options = LaunchOptions {
                ephemeral,
                profiles,
                config,
                instance_type,
            };
            command::launch(&image, &name, &options)
        }
        Commands::File { command: file } => match file {
            FileCommands::Pull {
                container,
                source,
                target,
            } => command::file_pull(&container, &source, &target),
            FileCommands::Push {
                source,
                container,
                target,
                uid,
                gid,
                mode,
            } => {
                let options = PushOptions { uid, gid, mode };
                command::file_push(&container, &source, &target, &options)
            }
        },
        Commands::Stop { containers } => command::stop(&targets(containers)?),
        Commands::Delete { containers } => command::delete(&targets(containers)?),
        Commands::Exec {
            container,
            mode,
            env,
            command: command_line,
        } => command::execute(&container, &command_line, &ExecOptions { mode, env }),
        Commands::Profile { command: profile } => match profile {
            ProfileCommands::Create { name, remote } => {
                command::profile_create(&name, remote.remote.as_deref())
            }
            ProfileCommands::Copy {
                source,
                destination,
                src_remote,
                dst_remote,
            } => command::profile_copy(
                &source,
                &destination,
                src_remote.as_deref(),
                dst_remote.as_deref(),
            ),
            ProfileCommands::Set {
                name,
                key,
                value,
                remote,
            } => command::profile_set(&name, &key, &value, remote.remote.as_deref()),
            ProfileCommands::Delete { name, remote } => {
                command::profile_delete(&name, remote.remote.as_deref())
            }
        },
    };
    Ok(command)
}

fn targets(containers: Vec<String>) -> Result<Targets> {
    Targets::from_vec(containers).ok_or(Error::NoTargets)
}
