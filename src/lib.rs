//! dfvfs-deps - install the Debian packages dfVFS needs.
//!
//! The tool registers the GIFT package source, refreshes the package index,
//! installs the runtime packages, and then installs the debug, development,
//! and test packages when the matching `include-*` token is present in the
//! arguments. The first failing package-manager call ends the run with that
//! call's exit status.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading from YAML and the environment
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Turns a plan into package-manager calls and runs them
//! - [`packages`] - Package groups and their package lists
//! - [`plan`] - Derives the installation plan from invocation tokens
//! - [`shell`] - External command description and execution
//! - [`ui`] - Status output
//!
//! # Example
//!
//! ```
//! use dfvfs_deps::packages::PackageGroup;
//! use dfvfs_deps::plan::InstallationPlan;
//!
//! let plan = InstallationPlan::from_tokens(&["include-debug", "bogus"]);
//! let groups: Vec<PackageGroup> = plan.groups().collect();
//! assert_eq!(groups, [PackageGroup::Runtime, PackageGroup::Debug]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod packages;
pub mod plan;
pub mod shell;
pub mod ui;

pub use error::{DepsError, Result};
