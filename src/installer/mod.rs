//! Dependency installation.
//!
//! An [`Installer`] turns an [`InstallationPlan`] into a fixed sequence of
//! package-manager calls and runs them one at a time:
//!
//! 1. `add-apt-repository <source> -y`
//! 2. `apt-get update -q`
//! 3. `apt-get install -y <packages>` for each planned group
//!
//! The first call that fails aborts the run. Nothing already installed is
//! rolled back.
//!
//! # Example
//!
//! ```
//! use dfvfs_deps::config::InstallerConfig;
//! use dfvfs_deps::installer::Installer;
//! use dfvfs_deps::packages::PackageCatalog;
//! use dfvfs_deps::plan::InstallationPlan;
//! use dfvfs_deps::shell::MockRunner;
//! use dfvfs_deps::ui::MockUI;
//!
//! let config = InstallerConfig::default();
//! let catalog = PackageCatalog::dfvfs();
//! let installer = Installer::new(&config, &catalog).with_elevation(false);
//!
//! let plan = InstallationPlan::from_tokens(&["include-test"]);
//! let mut runner = MockRunner::new();
//! let mut ui = MockUI::new();
//! installer.run(&plan, &mut runner, &mut ui).unwrap();
//!
//! let lines = runner.lines();
//! assert_eq!(lines[0], "sudo add-apt-repository ppa:gift/dev -y");
//! assert_eq!(lines[1], "sudo apt-get update -q");
//! assert_eq!(lines[3], "sudo apt-get install -y python-mock");
//! ```

mod step;

pub use step::Step;

use crate::config::InstallerConfig;
use crate::error::{DepsError, Result};
use crate::packages::{PackageCatalog, PackageGroup};
use crate::plan::InstallationPlan;
use crate::shell::{is_elevated, CommandRunner, SystemCommand};
use crate::ui::UserInterface;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Groups installed, in installation order.
    pub groups: Vec<PackageGroup>,

    /// Total packages requested across those groups.
    pub packages: usize,

    /// Number of external commands issued.
    pub commands: usize,
}

/// Issues package-manager calls for a plan.
#[derive(Debug, Clone)]
pub struct Installer<'a> {
    config: &'a InstallerConfig,
    catalog: &'a PackageCatalog,
    elevated: bool,
}

impl<'a> Installer<'a> {
    /// Create an installer, detecting whether the process already runs as root.
    pub fn new(config: &'a InstallerConfig, catalog: &'a PackageCatalog) -> Self {
        Self {
            config,
            catalog,
            elevated: is_elevated(),
        }
    }

    /// Override root detection.
    pub fn with_elevation(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    /// The wrapper to prefix commands with, if any.
    fn privilege_wrapper(&self) -> Option<&str> {
        if self.elevated {
            return None;
        }
        self.config.privilege_wrapper.as_deref()
    }

    /// Apply the environment and privilege wrapper to a bare command.
    fn prepare(&self, command: SystemCommand) -> SystemCommand {
        let command = if self.config.noninteractive {
            command.env("DEBIAN_FRONTEND", "noninteractive")
        } else {
            command
        };

        match self.privilege_wrapper() {
            Some(wrapper) => command.wrapped(wrapper),
            None => command,
        }
    }

    /// Build the command for a step. `None` means the step has nothing to do.
    pub fn command_for(&self, step: Step) -> Option<SystemCommand> {
        let command = match step {
            Step::AddSource => SystemCommand::new("add-apt-repository")
                .arg(self.config.source.as_str())
                .arg("-y"),
            Step::UpdateIndex => SystemCommand::new("apt-get").args(["update", "-q"]),
            Step::Install(group) => {
                let packages = self.catalog.packages(group);
                if packages.is_empty() {
                    return None;
                }
                SystemCommand::new("apt-get")
                    .args(["install", "-y"])
                    .args(packages.iter().map(String::as_str))
            }
        };
        Some(self.prepare(command))
    }

    /// Every command a plan issues, in order.
    pub fn commands(&self, plan: &InstallationPlan) -> Vec<(Step, SystemCommand)> {
        Step::sequence(plan)
            .into_iter()
            .filter_map(|step| self.command_for(step).map(|cmd| (step, cmd)))
            .collect()
    }

    /// Run the plan, stopping at the first failing command.
    pub fn run(
        &self,
        plan: &InstallationPlan,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallReport> {
        tracing::info!(
            "Installing {} groups ({} packages): {}",
            plan.len(),
            plan.package_count(self.catalog),
            plan.groups()
                .map(|g| g.name())
                .collect::<Vec<_>>()
                .join(", ")
        );

        if self.elevated && self.config.privilege_wrapper.is_some() {
            tracing::debug!("Already running as root, not using a privilege wrapper");
        } else if !self.elevated && self.config.privilege_wrapper.is_none() && !self.config.dry_run
        {
            ui.warning("Running the package manager without root privileges");
        }

        let commands = self.commands(plan);
        for (step, command) in &commands {
            ui.step(&step.title(), &self.step_detail(*step));
            tracing::debug!("{}: {}", step, command);

            let result = runner.run(command)?;
            if !result.success {
                tracing::error!(
                    "{} failed with exit code {:?} (signal {:?})",
                    step,
                    result.exit_code,
                    result.signal
                );
                return Err(DepsError::CommandFailed {
                    command: command.to_string(),
                    code: result.shell_status(),
                });
            }
        }

        Ok(InstallReport {
            groups: plan.groups().collect(),
            packages: plan.package_count(self.catalog),
            commands: commands.len(),
        })
    }

    fn step_detail(&self, step: Step) -> String {
        match step {
            Step::AddSource => self.config.source.clone(),
            Step::UpdateIndex => String::new(),
            Step::Install(group) => match self.catalog.packages(group).len() {
                1 => "(1 package)".to_string(),
                n => format!("({} packages)", n),
            },
        }
    }
}
