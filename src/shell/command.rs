//! External command description and execution.

use crate::error::{DepsError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::io::ErrorKind;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A program invocation with its arguments and extra environment.
///
/// Commands run directly, never through a shell. [`fmt::Display`] renders a
/// shell-quoted line for logs, dry runs, and error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemCommand {
    /// Program to execute, looked up on PATH.
    pub program: String,

    /// Arguments passed verbatim.
    pub args: Vec<String>,

    /// Environment variables merged over the inherited environment.
    pub env: BTreeMap<String, String>,
}

impl SystemCommand {
    /// Create a command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable for the child.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Run this command under a privilege wrapper such as `sudo`.
    ///
    /// The wrapper becomes the program and the original program its first
    /// argument. Environment settings stay on the outer process.
    pub fn wrapped(self, wrapper: &str) -> Self {
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: wrapper.to_string(),
            args,
            env: self.env,
        }
    }
}

impl fmt::Display for SystemCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

/// Quote a word for display if a POSIX shell would split or expand it.
fn quote(word: &str) -> String {
    let safe = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=+,@%".contains(c));
    if safe {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Exit status a POSIX shell reports for a child killed by `signal`.
const SIGNAL_EXIT_BASE: i32 = 128;

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Signal that terminated the command, if any.
    pub signal: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            signal: None,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            signal: None,
            duration,
            success: false,
        }
    }

    /// Create a result for a command terminated by a signal.
    pub fn killed(signal: i32, duration: Duration) -> Self {
        Self {
            exit_code: None,
            signal: Some(signal),
            duration,
            success: false,
        }
    }

    /// Status as a shell would report it: the exit code, or 128 plus the
    /// signal number for a killed command.
    pub fn shell_status(&self) -> Option<i32> {
        self.exit_code
            .or_else(|| self.signal.map(|s| SIGNAL_EXIT_BASE + s))
    }
}

/// Execute a command, inheriting stdin, stdout, and stderr.
///
/// Blocks until the child exits. A non-zero exit is reported in the
/// returned [`CommandResult`], not as an error; only a failure to spawn is
/// an error.
pub fn execute(command: &SystemCommand) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args);
    cmd.envs(&command.env);
    cmd.stdin(Stdio::inherit());
    cmd.stdout(Stdio::inherit());
    cmd.stderr(Stdio::inherit());

    let status = cmd.status().map_err(|e| match e.kind() {
        ErrorKind::NotFound => DepsError::CommandNotFound {
            program: command.program.clone(),
        },
        _ => DepsError::Io(e),
    })?;

    let duration = start.elapsed();

    if status.success() {
        return Ok(CommandResult::success(duration));
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Ok(CommandResult::killed(signal, duration));
        }
    }

    Ok(CommandResult::failure(status.code(), duration))
}
