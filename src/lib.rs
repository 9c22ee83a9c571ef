// ABOUTME: Library root for simple-lxd - argument builders, runner and client.
// ABOUTME: The main binary is in main.rs.

pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod output;
pub mod runner;
pub mod types;

pub use client::Lxc;
pub use command::LxcCommand;
pub use runner::{CommandRunner, Executor, Invocation, RunError};
