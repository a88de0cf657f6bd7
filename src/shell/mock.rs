//! Mock runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] and records every command it
//! is asked to run. It can be told to fail a particular call.
//!
//! # Example
//!
//! ```
//! use dfvfs_deps::shell::{CommandRunner, MockRunner, SystemCommand};
//!
//! let mut runner = MockRunner::new();
//! runner.fail_on(1, Some(100));
//!
//! let ok = runner.run(&SystemCommand::new("apt-get").arg("update")).unwrap();
//! let failed = runner.run(&SystemCommand::new("apt-get").arg("install")).unwrap();
//!
//! assert!(ok.success);
//! assert_eq!(failed.exit_code, Some(100));
//! assert_eq!(runner.lines(), ["apt-get update", "apt-get install"]);
//! ```

use std::time::Duration;

use super::command::{CommandResult, SystemCommand};
use super::runner::CommandRunner;
use crate::error::{DepsError, Result};

#[derive(Debug, Clone, Copy)]
enum Failure {
    Exit(Option<i32>),
    Signal(i32),
    NotFound,
}

/// Recording command runner.
#[derive(Debug, Default)]
pub struct MockRunner {
    commands: Vec<SystemCommand>,
    failure: Option<(usize, Failure)>,
}

impl MockRunner {
    /// Create a runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the zero-based `index`th call exit with `code`.
    pub fn fail_on(&mut self, index: usize, code: Option<i32>) {
        self.failure = Some((index, Failure::Exit(code)));
    }

    /// Make the zero-based `index`th call die from `signal`.
    pub fn kill_on(&mut self, index: usize, signal: i32) {
        self.failure = Some((index, Failure::Signal(signal)));
    }

    /// Make the zero-based `index`th call fail to spawn.
    pub fn not_found_on(&mut self, index: usize) {
        self.failure = Some((index, Failure::NotFound));
    }

    /// Commands received so far.
    pub fn commands(&self) -> &[SystemCommand] {
        &self.commands
    }

    /// Commands received so far, rendered as command lines.
    pub fn lines(&self) -> Vec<String> {
        self.commands.iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for MockRunner {
    fn run(&mut self, command: &SystemCommand) -> Result<CommandResult> {
        let index = self.commands.len();
        self.commands.push(command.clone());

        match self.failure {
            Some((at, Failure::Exit(code))) if at == index => {
                Ok(CommandResult::failure(code, Duration::ZERO))
            }
            Some((at, Failure::Signal(signal))) if at == index => {
                Ok(CommandResult::killed(signal, Duration::ZERO))
            }
            Some((at, Failure::NotFound)) if at == index => Err(DepsError::CommandNotFound {
                program: command.program.clone(),
            }),
            _ => Ok(CommandResult::success(Duration::ZERO)),
        }
    }
}
