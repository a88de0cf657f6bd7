//! Error types for dependency installation.
//!
//! This module defines [`DepsError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failing external command is the only domain error; it aborts the run
//! - Configuration errors surface before any command is issued
//! - [`DepsError::exit_code`] maps every error onto a process exit status

use std::path::PathBuf;
use thiserror::Error;

/// Exit status used when a program cannot be found, as a POSIX shell does.
pub const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Core error type for dependency installation.
#[derive(Debug, Error)]
pub enum DepsError {
    /// External command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// External program is not installed or not on PATH.
    #[error("Command not found: {program}")]
    CommandNotFound { program: String },

    /// Configuration file named in the environment does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error with added context, such as a config file that cannot be read.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DepsError {
    /// Process exit status for this error.
    ///
    /// A failed command propagates its own code (128 plus the signal
    /// number when it was killed). A command with no status and all other
    /// errors exit with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            Self::CommandNotFound { .. } => EXIT_COMMAND_NOT_FOUND,
            _ => 1,
        }
    }
}

/// Result type alias for installer operations.
pub type Result<T> = std::result::Result<T, DepsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = DepsError::CommandFailed {
            command: "sudo apt-get update -q".into(),
            code: Some(100),
        };
        let msg = err.to_string();
        assert!(msg.contains("sudo apt-get update -q"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn command_failed_propagates_exit_code() {
        let err = DepsError::CommandFailed {
            command: "apt-get install -y pylint".into(),
            code: Some(100),
        };
        assert_eq!(err.exit_code(), 100);
    }

    #[test]
    fn command_without_status_exits_with_one() {
        let err = DepsError::CommandFailed {
            command: "apt-get update".into(),
            code: None,
        };
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn killed_command_status_is_propagated() {
        let err = DepsError::CommandFailed {
            command: "apt-get install -y pylint".into(),
            code: Some(143),
        };
        assert_eq!(err.exit_code(), 143);
    }

    #[test]
    fn command_not_found_exits_like_a_shell() {
        let err = DepsError::CommandNotFound {
            program: "add-apt-repository".into(),
        };
        assert!(err.to_string().contains("add-apt-repository"));
        assert_eq!(err.exit_code(), 127);
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = DepsError::ConfigParseError {
            path: PathBuf::from("/etc/dfvfs-deps.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/dfvfs-deps.yml"));
        assert!(msg.contains("invalid syntax"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DepsError = io_err.into();
        assert!(matches!(err, DepsError::Io(_)));
    }
}
