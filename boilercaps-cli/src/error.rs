use std::path::PathBuf;

use crate::config::ConfigError;

/// Everything that can end a `boilercaps` run early.
pub enum ScaffoldError {
    /// The user backed out of a prompt. Nothing has been executed yet.
    Cancelled,
    /// A required executable is not on `PATH` and was not installed.
    MissingTool { command: String },
    /// A project name that cannot be used as a directory name.
    InvalidName(String),
    /// The target project directory is already there.
    DirectoryExists(PathBuf),
    /// A child process ran but exited unsuccessfully.
    CommandFailed {
        command: String,
        status: Option<i32>,
    },
    /// A child process could not be started at all.
    Spawn {
        command: String,
        source: std::io::Error,
    },
    /// The terminal front end failed.
    Prompt(dialoguer::Error),
    /// A `BOILERCAPS_*` variable could not be used.
    Config(ConfigError),
    /// Creating a project directory or writing a template failed.
    Io(std::io::Error),
}

impl ScaffoldError {
    /// Process exit status for this error.
    ///
    /// Cancellation follows the shell convention for an interrupted
    /// program; every other failure exits with `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::Cancelled => 130,
            _ => 1,
        }
    }
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::Cancelled => write!(f, "Cancelled, nothing was created"),
            ScaffoldError::MissingTool { command } => {
                write!(f, "{command} is required to continue. Installation aborted.")
            }
            ScaffoldError::InvalidName(name) => write!(f, "Invalid project name '{name}'"),
            ScaffoldError::DirectoryExists(path) => {
                write!(f, "Directory '{}' already exists", path.display())
            }
            ScaffoldError::CommandFailed { command, status } => match status {
                Some(code) => write!(f, "`{command}` exited with status {code}"),
                None => write!(f, "`{command}` was terminated by a signal"),
            },
            ScaffoldError::Spawn { command, source } => {
                write!(f, "Failed to start `{command}`: {source}")
            }
            ScaffoldError::Prompt(err) => write!(f, "Prompt error: {err}"),
            ScaffoldError::Config(err) => write!(f, "{err}"),
            ScaffoldError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::fmt::Debug for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as std::fmt::Display>::fmt(self, f)
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Spawn { source, .. } => Some(source),
            ScaffoldError::Prompt(err) => Some(err),
            ScaffoldError::Config(err) => Some(err),
            ScaffoldError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScaffoldError {
    fn from(err: std::io::Error) -> Self {
        ScaffoldError::Io(err)
    }
}

/// Ctrl-C while a prompt reads the terminal arrives as an interrupted
/// read; it is a cancellation like Escape on a list.
impl From<dialoguer::Error> for ScaffoldError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                ScaffoldError::Cancelled
            }
            other => ScaffoldError::Prompt(other),
        }
    }
}

impl From<ConfigError> for ScaffoldError {
    fn from(err: ConfigError) -> Self {
        ScaffoldError::Config(err)
    }
}
