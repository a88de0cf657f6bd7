//! Installer configuration.
//!
//! The package lists are fixed; configuration only covers how the package
//! manager is reached. See [`loader`] for the merge order.

pub mod loader;
pub mod schema;

pub use loader::{load, load_file, load_with};
pub use schema::InstallerConfig;
