use crate::packages::PackageGroup;
use crate::plan::InstallationPlan;
use std::fmt;

/// One package-manager call in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Register the third-party package source.
    AddSource,
    /// Refresh the package index from all sources.
    UpdateIndex,
    /// Install one group's packages.
    Install(PackageGroup),
}

impl Step {
    /// Steps for a plan, in execution order.
    pub fn sequence(plan: &InstallationPlan) -> Vec<Step> {
        let mut steps = vec![Step::AddSource, Step::UpdateIndex];
        steps.extend(plan.groups().map(Step::Install));
        steps
    }

    /// Human-readable title for status output.
    pub fn title(&self) -> String {
        match self {
            Self::AddSource => "Adding package source".to_string(),
            Self::UpdateIndex => "Updating package index".to_string(),
            Self::Install(group) => format!("Installing {} dependencies", group),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddSource => f.write_str("add-source"),
            Self::UpdateIndex => f.write_str("update-index"),
            Self::Install(group) => write!(f, "install-{}", group),
        }
    }
}
