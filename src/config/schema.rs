//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Package source registered before anything is installed.
pub const DEFAULT_SOURCE: &str = "ppa:gift/dev";

/// Wrapper that grants the package manager root privileges.
pub const DEFAULT_PRIVILEGE_WRAPPER: &str = "sudo";

/// Installer settings.
///
/// Every field has a default, so an empty YAML document is a valid config.
///
/// ```yaml
/// source: ppa:gift/stable
/// privilege_wrapper: null
/// noninteractive: true
/// dry_run: false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// Repository source passed to `add-apt-repository`.
    pub source: String,

    /// Program prefixed to each package-manager call. `None` runs directly.
    #[serde(deserialize_with = "deserialize_wrapper")]
    pub privilege_wrapper: Option<String>,

    /// Set `DEBIAN_FRONTEND=noninteractive` for package-manager calls.
    pub noninteractive: bool,

    /// Print commands instead of running them.
    pub dry_run: bool,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            privilege_wrapper: Some(DEFAULT_PRIVILEGE_WRAPPER.to_string()),
            noninteractive: true,
            dry_run: false,
        }
    }
}

// An empty string means the same as null.
fn deserialize_wrapper<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|w| !w.trim().is_empty()))
}
