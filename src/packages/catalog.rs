//! The fixed package lists for each group.

use super::PackageGroup;
use std::collections::BTreeMap;

/// Packages needed to run dfVFS, alphabetized.
///
/// Should not include packages only required for testing or development.
const RUNTIME_PACKAGES: &[&str] = &[
    "libbde-python",
    "libewf-python",
    "libfsntfs-python",
    "libfvde-python",
    "libfwnt-python",
    "libqcow-python",
    "libsigscan-python",
    "libsmdev-python",
    "libsmraw-python",
    "libvhdi-python",
    "libvmdk-python",
    "libvshadow-python",
    "libvslvm-python",
    "python-construct",
    "python-crypto",
    "python-dfdatetime",
    "python-dtfabric",
    "python-protobuf",
    "python-pytsk3",
    "python-six",
    "python-yaml",
];

const TEST_PACKAGES: &[&str] = &["python-mock"];

const DEVELOPMENT_PACKAGES: &[&str] = &["pylint", "python-sphinx"];

const DEBUG_PACKAGES: &[&str] = &[
    "libbde-dbg",
    "libbde-python-dbg",
    "libewf-dbg",
    "libewf-python-dbg",
    "libfsntfs-dbg",
    "libfsntfs-python-dbg",
    "libfvde-dbg",
    "libfvde-python-dbg",
    "libfwnt-dbg",
    "libfwnt-python-dbg",
    "libqcow-dbg",
    "libqcow-python-dbg",
    "libsigscan-dbg",
    "libsigscan-python-dbg",
    "libsmdev-dbg",
    "libsmdev-python-dbg",
    "libsmraw-dbg",
    "libsmraw-python-dbg",
    "libvhdi-dbg",
    "libvhdi-python-dbg",
    "libvmdk-dbg",
    "libvmdk-python-dbg",
    "libvshadow-dbg",
    "libvshadow-python-dbg",
    "libvslvm-dbg",
    "libvslvm-python-dbg",
    "python-guppy",
];

/// Immutable mapping from group to the packages it installs.
///
/// Built once at startup and shared by reference with the installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCatalog {
    groups: BTreeMap<PackageGroup, Vec<String>>,
}

impl Default for PackageCatalog {
    fn default() -> Self {
        Self::dfvfs()
    }
}

impl PackageCatalog {
    /// The dfVFS package lists for Debian-derived systems with the GIFT PPA.
    pub fn dfvfs() -> Self {
        let mut catalog = Self {
            groups: BTreeMap::new(),
        };
        catalog.insert(PackageGroup::Runtime, RUNTIME_PACKAGES);
        catalog.insert(PackageGroup::Test, TEST_PACKAGES);
        catalog.insert(PackageGroup::Development, DEVELOPMENT_PACKAGES);
        catalog.insert(PackageGroup::Debug, DEBUG_PACKAGES);
        catalog
    }

    /// Build a catalog from explicit lists. Groups left out have no packages.
    #[cfg(test)]
    pub(crate) fn from_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = (PackageGroup, Vec<S>)>,
        S: Into<String>,
    {
        let mut catalog = Self {
            groups: BTreeMap::new(),
        };
        for (group, packages) in groups {
            let packages: Vec<String> = packages.into_iter().map(Into::into).collect();
            catalog.insert(group, packages.as_slice());
        }
        catalog
    }

    fn insert<S: AsRef<str>>(&mut self, group: PackageGroup, packages: &[S]) {
        let mut unique: Vec<String> = Vec::with_capacity(packages.len());
        for package in packages {
            let package = package.as_ref();
            if !unique.iter().any(|p| p == package) {
                unique.push(package.to_string());
            }
        }
        self.groups.insert(group, unique);
    }

    /// Packages in a group, in display order.
    pub fn packages(&self, group: PackageGroup) -> &[String] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }
}
