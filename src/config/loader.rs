//! Configuration loading.
//!
//! Merge order (later overrides earlier):
//! 1. Built-in defaults
//! 2. YAML file named by `DFVFS_DEPS_CONFIG`
//! 3. Individual `DFVFS_DEPS_*` environment variables

use crate::config::schema::InstallerConfig;
use crate::error::{DepsError, Result};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Path to a YAML configuration file.
pub const ENV_CONFIG: &str = "DFVFS_DEPS_CONFIG";

/// Overrides [`InstallerConfig::source`].
pub const ENV_SOURCE: &str = "DFVFS_DEPS_SOURCE";

/// `0`/`false`/`no`/`off` runs the package manager without a wrapper.
pub const ENV_SUDO: &str = "DFVFS_DEPS_SUDO";

/// `1`/`true`/`yes`/`on` prints commands instead of running them.
pub const ENV_DRY_RUN: &str = "DFVFS_DEPS_DRY_RUN";

/// Load configuration from the process environment.
pub fn load() -> Result<InstallerConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Load configuration using `lookup` to read environment variables.
pub fn load_with<F>(lookup: F) -> Result<InstallerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(ENV_CONFIG).filter(|p| !p.is_empty()) {
        Some(path) => load_file(&PathBuf::from(path))?,
        None => InstallerConfig::default(),
    };

    if let Some(source) = lookup(ENV_SOURCE).filter(|s| !s.trim().is_empty()) {
        config.source = source;
    }

    if let Some(flag) = lookup(ENV_SUDO).as_deref().and_then(parse_bool) {
        if !flag {
            config.privilege_wrapper = None;
        } else if config.privilege_wrapper.is_none() {
            config.privilege_wrapper = InstallerConfig::default().privilege_wrapper;
        }
    }

    if let Some(flag) = lookup(ENV_DRY_RUN).as_deref().and_then(parse_bool) {
        config.dry_run = flag;
    }

    tracing::debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

/// Parse a YAML configuration file.
pub fn load_file(path: &Path) -> Result<InstallerConfig> {
    if !path.exists() {
        return Err(DepsError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(InstallerConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|e| DepsError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Interpret an environment flag. Unrecognized values are ignored.
fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            tracing::warn!("Ignoring unrecognized boolean value '{}'", other);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn no_environment_yields_defaults() {
        let config = load_with(env(&[])).unwrap();
        assert_eq!(config, InstallerConfig::default());
    }

    #[test]
    fn source_override() {
        let config = load_with(env(&[(ENV_SOURCE, "ppa:gift/stable")])).unwrap();
        assert_eq!(config.source, "ppa:gift/stable");
    }

    #[test]
    fn blank_source_is_ignored() {
        let config = load_with(env(&[(ENV_SOURCE, "  ")])).unwrap();
        assert_eq!(config.source, "ppa:gift/dev");
    }

    #[test]
    fn sudo_can_be_disabled() {
        let config = load_with(env(&[(ENV_SUDO, "0")])).unwrap();
        assert_eq!(config.privilege_wrapper, None);
    }

    #[test]
    fn dry_run_flag() {
        assert!(load_with(env(&[(ENV_DRY_RUN, "true")])).unwrap().dry_run);
        assert!(!load_with(env(&[(ENV_DRY_RUN, "off")])).unwrap().dry_run);
    }

    #[test]
    fn unrecognized_flag_value_is_ignored() {
        let config = load_with(env(&[(ENV_DRY_RUN, "maybe")])).unwrap();
        assert!(!config.dry_run);
    }

    #[test]
    fn file_then_environment() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps.yml");
        fs::write(
            &path,
            "source: ppa:gift/stable\nprivilege_wrapper: null\ndry_run: true\n",
        )
        .unwrap();
        let path = path.to_string_lossy().to_string();

        let config = load_with(env(&[(ENV_CONFIG, path.as_str())])).unwrap();
        assert_eq!(config.source, "ppa:gift/stable");
        assert_eq!(config.privilege_wrapper, None);
        assert!(config.dry_run);

        let config = load_with(env(&[
            (ENV_CONFIG, path.as_str()),
            (ENV_SUDO, "yes"),
            (ENV_DRY_RUN, "no"),
        ]))
        .unwrap();
        assert_eq!(config.source, "ppa:gift/stable");
        assert_eq!(config.privilege_wrapper.as_deref(), Some("sudo"));
        assert!(!config.dry_run);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps.yml");
        fs::write(&path, "\n").unwrap();
        assert_eq!(load_file(&path).unwrap(), InstallerConfig::default());
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");
        let path = path.to_string_lossy().to_string();
        let err = load_with(env(&[(ENV_CONFIG, path.as_str())])).unwrap_err();
        assert!(matches!(err, DepsError::ConfigNotFound { .. }));
    }

    #[test]
    fn unreadable_file_reports_its_path() {
        let temp = TempDir::new().unwrap();
        // A directory exists but cannot be read as a file.
        let err = load_file(temp.path()).unwrap_err();

        assert!(matches!(err, DepsError::Other(_)));
        assert!(err
            .to_string()
            .contains(&format!("Failed to read config at {}", temp.path().display())));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("deps.yml");
        fs::write(&path, "dry_run: [not, a, bool]\n").unwrap();
        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DepsError::ConfigParseError { .. }));
    }
}
