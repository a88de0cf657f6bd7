//! External command execution.

pub mod command;
pub mod mock;
pub mod platform;
pub mod runner;

pub use command::{execute, CommandResult, SystemCommand};
pub use mock::MockRunner;
pub use platform::is_elevated;
pub use runner::{CommandRunner, DryRunRunner, SystemRunner};
