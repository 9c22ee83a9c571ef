// ABOUTME: Domain value types shared by the builders and the CLI.
// ABOUTME: Target lists and exec terminal modes.

mod exec_mode;
mod targets;

pub use exec_mode::{ExecMode, ParseExecModeError};
pub use targets::Targets;
