use colored::Colorize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::prompt::Prompter;
use crate::config::ToolchainConfig;
use crate::error::ScaffoldError;

/// An executable the run depends on, and the package that provides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    /// Name looked up on `PATH`.
    pub command: &'static str,
    /// Package passed to `npm install -g` when the command is missing.
    pub package: &'static str,
}

impl Tool {
    /// A tool whose package carries the same name as its executable.
    pub const fn named(command: &'static str) -> Self {
        Self {
            command,
            package: command,
        }
    }
}

/// A fully resolved child process: program, arguments, working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: &str, cwd: &Path) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            cwd: cwd.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<str>) -> Self {
        self.args.push(arg.as_ref().to_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_string()));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Answers whether an executable can be found.
pub trait ToolProbe {
    fn is_available(&self, command: &str) -> bool;
}

/// Resolves commands through the `PATH` search, without executing them.
pub struct PathProbe;

impl ToolProbe for PathProbe {
    fn is_available(&self, command: &str) -> bool {
        which::which(command).is_ok()
    }
}

/// Runs child processes to completion.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ScaffoldError>;
}

/// Blocks on each child with the terminal's stdin/stdout/stderr inherited,
/// so generator and installer output reaches the user untouched.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ScaffoldError> {
        tracing::info!(command = %invocation, cwd = %invocation.cwd.display(), "running");

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .status()
            .map_err(|source| ScaffoldError::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        if !status.success() {
            tracing::warn!(command = %invocation, status = ?status.code(), "command failed");
            return Err(ScaffoldError::CommandFailed {
                command: invocation.to_string(),
                status: status.code(),
            });
        }

        Ok(())
    }
}

/// Make sure `tool` is reachable before it is invoked.
///
/// A tool already on `PATH` is accepted without prompting. Otherwise the
/// user is asked whether to install it globally (default: yes); on consent
/// the install runs in `cwd` and any failure propagates, on refusal the
/// run stops with [`ScaffoldError::MissingTool`].
pub fn ensure_tool(
    tool: &Tool,
    probe: &dyn ToolProbe,
    prompter: &dyn Prompter,
    runner: &dyn CommandRunner,
    config: &ToolchainConfig,
    cwd: &Path,
) -> Result<(), ScaffoldError> {
    if probe.is_available(tool.command) {
        tracing::debug!(tool = tool.command, "found on PATH");
        return Ok(());
    }

    tracing::debug!(tool = tool.command, "not found on PATH");
    let install = prompter.confirm(
        &format!("{} is not installed. Install it now?", tool.command),
        true,
    )?;

    if !install {
        eprintln!(
            "{} {} is required to continue.",
            "x".red(),
            tool.command.yellow()
        );
        return Err(ScaffoldError::MissingTool {
            command: tool.command.to_string(),
        });
    }

    println!("{} Installing {}...", "->".blue(), tool.package.cyan());
    runner.run(&config.global_install(tool.package, cwd))
}

/// The package manager cannot bootstrap itself, so its absence is fatal
/// without asking.
pub fn require_package_manager(
    probe: &dyn ToolProbe,
    config: &ToolchainConfig,
) -> Result<(), ScaffoldError> {
    if probe.is_available(&config.package_manager) {
        return Ok(());
    }
    tracing::warn!(tool = %config.package_manager, "package manager not found on PATH");
    Err(ScaffoldError::MissingTool {
        command: config.package_manager.clone(),
    })
}
