//! Command runners: the seam between planning and the operating system.

use super::command::{execute, CommandResult, SystemCommand};
use crate::error::Result;
use std::io::Write;
use std::time::Duration;

/// Something that can carry out a [`SystemCommand`].
pub trait CommandRunner {
    /// Run a command to completion.
    ///
    /// Returns `Err` only when the command could not be started. A command
    /// that ran and failed comes back as an unsuccessful [`CommandResult`].
    fn run(&mut self, command: &SystemCommand) -> Result<CommandResult>;
}

/// Runs commands for real, one at a time.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &SystemCommand) -> Result<CommandResult> {
        tracing::debug!("Executing: {}", command);
        let result = execute(command)?;
        tracing::debug!(
            "Finished in {:?} with exit code {:?}",
            result.duration,
            result.exit_code
        );
        Ok(result)
    }
}

/// Prints each command line instead of running it.
#[derive(Debug)]
pub struct DryRunRunner<W: Write> {
    out: W,
}

impl<W: Write> DryRunRunner<W> {
    /// Create a dry-run runner writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the runner and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CommandRunner for DryRunRunner<W> {
    fn run(&mut self, command: &SystemCommand) -> Result<CommandResult> {
        writeln!(self.out, "{}", command)?;
        Ok(CommandResult::success(Duration::ZERO))
    }
}
