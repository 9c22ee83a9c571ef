// ABOUTME: Runner settings loaded from simple-lxd.yml and the environment.
// ABOUTME: Handles YAML parsing, file discovery and env var overrides.

mod env;

pub use env::{ON_TIMEOUT_VAR, PROGRAM_VAR, TIMEOUT_VAR, parse_timeout};

use crate::command::DEFAULT_PROGRAM;
use crate::error::{Error, Result};
use crate::runner::{DEFAULT_TIMEOUT, TimeoutPolicy};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "simple-lxd.yml";
pub const CONFIG_FILENAME_ALT: &str = "simple-lxd.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".simple-lxd/config.yml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Executable invoked for every command.
    #[serde(default = "default_program")]
    pub program: String,

    /// Per-attempt timeout.
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    #[serde(default)]
    pub on_timeout: TimeoutPolicy,
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            program: default_program(),
            timeout: default_timeout(),
            on_timeout: TimeoutPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Like [`Config::discover`], falling back to defaults when no file exists.
    pub fn discover_or_default(dir: &Path) -> Result<Self> {
        match Self::discover(dir) {
            Err(Error::ConfigNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Apply `SIMPLE_LXD_*` environment overrides.
    pub fn apply_env(mut self) -> Result<Self> {
        env::apply(&mut self)?;
        self.validate()?;
        Ok(self)
    }

    /// Reject settings no runner can use: an empty program or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(Error::InvalidConfig("program cannot be empty".to_string()));
        }
        if self.timeout.is_zero() {
            return Err(Error::InvalidConfig("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }
}
