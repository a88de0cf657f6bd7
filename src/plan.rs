//! Installation planning from invocation tokens.
//!
//! Tokens are joined with spaces and each optional group's trigger is looked
//! up as a substring of the result. This means `include-development-foo`
//! or `xinclude-testx` also enable their groups.

use crate::packages::{PackageCatalog, PackageGroup};
use std::collections::BTreeSet;

/// The set of groups one invocation installs.
///
/// Always contains [`PackageGroup::Runtime`]. Iteration follows installation
/// order regardless of the order tokens were given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationPlan {
    groups: BTreeSet<PackageGroup>,
}

impl InstallationPlan {
    /// Derive the plan from raw invocation tokens.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let joined = tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");

        let mut groups = BTreeSet::from([PackageGroup::Runtime]);
        for group in PackageGroup::OPTIONAL {
            if let Some(trigger) = group.trigger().filter(|t| joined.contains(t)) {
                tracing::debug!("Found '{}' in arguments, including {} group", trigger, group);
                groups.insert(group);
            }
        }

        Self { groups }
    }

    /// Whether the plan installs the given group.
    pub fn contains(&self, group: PackageGroup) -> bool {
        self.groups.contains(&group)
    }

    /// Groups in installation order.
    pub fn groups(&self) -> impl Iterator<Item = PackageGroup> + '_ {
        self.groups.iter().copied()
    }

    /// Number of groups in the plan.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Always false; the runtime group is unconditional.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total packages requested across all planned groups.
    pub fn package_count(&self, catalog: &PackageCatalog) -> usize {
        self.groups().map(|g| catalog.packages(g).len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(tokens: &[&str]) -> Vec<PackageGroup> {
        InstallationPlan::from_tokens(tokens).groups().collect()
    }

    #[test]
    fn no_tokens_installs_runtime_only() {
        assert_eq!(plan(&[]), [PackageGroup::Runtime]);
    }

    #[test]
    fn include_test_adds_test_group() {
        assert_eq!(plan(&["include-test"]), [PackageGroup::Runtime, PackageGroup::Test]);
    }

    #[test]
    fn debug_and_test_combine() {
        assert_eq!(
            plan(&["include-debug", "include-test"]),
            [PackageGroup::Runtime, PackageGroup::Debug, PackageGroup::Test]
        );
    }

    #[test]
    fn unrecognized_tokens_are_ignored() {
        assert_eq!(
            plan(&["include-development", "bogus"]),
            [PackageGroup::Runtime, PackageGroup::Development]
        );
        assert_eq!(plan(&["foo", "--help", "-v"]), [PackageGroup::Runtime]);
    }

    #[test]
    fn all_flags_install_every_group() {
        assert_eq!(
            plan(&["include-test", "include-development", "include-debug"]),
            PackageGroup::ALL
        );
    }

    #[test]
    fn token_order_does_not_matter() {
        let forward = InstallationPlan::from_tokens(&["include-debug", "include-development"]);
        let reverse = InstallationPlan::from_tokens(&["include-development", "include-debug"]);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn repeated_tokens_are_idempotent() {
        assert_eq!(
            plan(&["include-test", "include-test"]),
            [PackageGroup::Runtime, PackageGroup::Test]
        );
    }

    // Known quirk: triggers match as substrings, not whole tokens.
    #[test]
    fn triggers_match_as_substrings() {
        assert_eq!(
            plan(&["include-development-foo"]),
            [PackageGroup::Runtime, PackageGroup::Development]
        );
        assert_eq!(plan(&["xinclude-testx"]), [PackageGroup::Runtime, PackageGroup::Test]);
        assert_eq!(
            plan(&["please include-debug symbols"]),
            [PackageGroup::Runtime, PackageGroup::Debug]
        );
    }

    #[test]
    fn triggers_do_not_span_joined_tokens() {
        assert_eq!(plan(&["include-", "test"]), [PackageGroup::Runtime]);
    }

    #[test]
    fn case_sensitive_matching() {
        assert_eq!(plan(&["INCLUDE-TEST"]), [PackageGroup::Runtime]);
    }

    #[test]
    fn package_count_sums_planned_groups() {
        let catalog = PackageCatalog::from_groups([
            (PackageGroup::Runtime, vec!["a", "b"]),
            (PackageGroup::Test, vec!["c"]),
            (PackageGroup::Debug, vec!["d", "e", "f"]),
        ]);
        let plan = InstallationPlan::from_tokens(&["include-test"]);
        assert_eq!(plan.len(), 2);
        assert!(!plan.is_empty());
        assert_eq!(plan.package_count(&catalog), 3);
    }
}
