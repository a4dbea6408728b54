//! Toolchain settings.
//!
//! Values start from built-in defaults and are overlaid by environment
//! variables:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `BOILERCAPS_PACKAGE_MANAGER` | [`ToolchainConfig::package_manager`] | `npm` |
//! | `BOILERCAPS_RUNNER` | [`ToolchainConfig::runner`] | `npx` |
//! | `BOILERCAPS_SUDO` | [`ToolchainConfig::sudo_global_install`] | `true` on unix |
//! | `BOILERCAPS_NEXT_STARTER` | [`ToolchainConfig::next_starter`] | unset |
//!
//! Log verbosity is read separately from `BOILERCAPS_LOG` by the binary.

use std::path::Path;

use crate::commands::toolchain::Invocation;

pub const ENV_PACKAGE_MANAGER: &str = "BOILERCAPS_PACKAGE_MANAGER";
pub const ENV_RUNNER: &str = "BOILERCAPS_RUNNER";
pub const ENV_SUDO: &str = "BOILERCAPS_SUDO";
pub const ENV_NEXT_STARTER: &str = "BOILERCAPS_NEXT_STARTER";

/// Error raised while reading configuration.
pub enum ConfigError {
    /// The value could not be converted to the requested type.
    TypeMismatch {
        key: String,
        value: String,
        expected: &'static str,
    },
    /// A value that must not be blank was blank.
    Empty(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::TypeMismatch {
                key,
                value,
                expected,
            } => write!(f, "Config type mismatch for '{key}': expected {expected}, got '{value}'"),
            ConfigError::Empty(key) => write!(f, "Config value '{key}' must not be empty"),
        }
    }
}

impl std::fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl std::error::Error for ConfigError {}

/// Which executables drive the scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainConfig {
    /// Used for `install <dep>` and `install -g <package>`.
    pub package_manager: String,
    /// Runs one-off generators (`npx create-react-app ...`).
    pub runner: String,
    /// Prefix global installs with `sudo`.
    pub sudo_global_install: bool,
    /// Starter repository passed to `create-next-app -e`.
    pub next_starter: Option<String>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            package_manager: "npm".into(),
            runner: "npx".into(),
            sudo_global_install: cfg!(unix),
            next_starter: None,
        }
    }
}

impl ToolchainConfig {
    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each known key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_PACKAGE_MANAGER) {
            config.package_manager = non_empty(ENV_PACKAGE_MANAGER, value)?;
        }
        if let Some(value) = lookup(ENV_RUNNER) {
            config.runner = non_empty(ENV_RUNNER, value)?;
        }
        if let Some(value) = lookup(ENV_SUDO) {
            config.sudo_global_install = parse_bool(ENV_SUDO, &value)?;
        }
        if let Some(value) = lookup(ENV_NEXT_STARTER) {
            let value = value.trim();
            config.next_starter = (!value.is_empty()).then(|| value.to_string());
        }

        Ok(config)
    }

    /// `npm install <dependency>` inside `project_dir`.
    pub fn install(&self, dependency: &str, project_dir: &Path) -> Invocation {
        Invocation::new(&self.package_manager, project_dir).args(["install", dependency])
    }

    /// `[sudo] npm install -g <package>` inside `cwd`.
    pub fn global_install(&self, package: &str, cwd: &Path) -> Invocation {
        if self.sudo_global_install {
            Invocation::new("sudo", cwd).args([self.package_manager.as_str(), "install", "-g", package])
        } else {
            Invocation::new(&self.package_manager, cwd).args(["install", "-g", package])
        }
    }
}

fn non_empty(key: &str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty(key.to_string()));
    }
    Ok(trimmed.to_string())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::TypeMismatch {
            key: key.to_string(),
            value: value.to_string(),
            expected: "bool",
        }),
    }
}
