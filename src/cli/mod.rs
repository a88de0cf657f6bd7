//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`install`] - The install command the binary runs

pub mod args;
pub mod install;

pub use args::Cli;
pub use install::InstallCommand;
