//! Package groups and the catalog of packages each group installs.

pub mod catalog;

pub use catalog::PackageCatalog;

use std::fmt;

/// A named set of packages installed together for one purpose.
///
/// Variant order is installation order: runtime first, then the optional
/// groups in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PackageGroup {
    /// Packages needed to run dfVFS. Always installed.
    Runtime,
    /// Debug symbol packages.
    Debug,
    /// Linters and documentation tooling.
    Development,
    /// Packages only the test suite needs.
    Test,
}

impl PackageGroup {
    /// All groups in installation order.
    pub const ALL: [PackageGroup; 4] = [
        PackageGroup::Runtime,
        PackageGroup::Debug,
        PackageGroup::Development,
        PackageGroup::Test,
    ];

    /// Groups gated behind an invocation token, in installation order.
    pub const OPTIONAL: [PackageGroup; 3] = [
        PackageGroup::Debug,
        PackageGroup::Development,
        PackageGroup::Test,
    ];

    /// Token that enables this group, or `None` for the runtime group.
    pub fn trigger(&self) -> Option<&'static str> {
        match self {
            Self::Runtime => None,
            Self::Debug => Some("include-debug"),
            Self::Development => Some("include-development"),
            Self::Test => Some("include-test"),
        }
    }

    /// Lowercase name used in logs and status output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Runtime => "runtime",
            Self::Debug => "debug",
            Self::Development => "development",
            Self::Test => "test",
        }
    }
}

impl fmt::Display for PackageGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_has_no_trigger() {
        assert_eq!(PackageGroup::Runtime.trigger(), None);
    }

    #[test]
    fn optional_groups_have_triggers() {
        for group in PackageGroup::OPTIONAL {
            let trigger = group.trigger().unwrap();
            assert!(trigger.starts_with("include-"));
            assert!(trigger.ends_with(group.name()));
        }
    }

    #[test]
    fn ordering_follows_installation_order() {
        let mut groups = vec![
            PackageGroup::Test,
            PackageGroup::Runtime,
            PackageGroup::Development,
            PackageGroup::Debug,
        ];
        groups.sort();
        assert_eq!(groups, PackageGroup::ALL.to_vec());
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(PackageGroup::Development.to_string(), "development");
    }
}
