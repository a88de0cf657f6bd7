//! The install command.

use std::io;

use crate::config::InstallerConfig;
use crate::error::Result;
use crate::installer::{InstallReport, Installer};
use crate::packages::PackageCatalog;
use crate::plan::InstallationPlan;
use crate::shell::{CommandRunner, DryRunRunner, SystemRunner};
use crate::ui::UserInterface;

/// Plans and runs one installation from invocation tokens.
#[derive(Debug)]
pub struct InstallCommand {
    tokens: Vec<String>,
    config: InstallerConfig,
    catalog: PackageCatalog,
}

impl InstallCommand {
    /// Create the command with the dfVFS package catalog.
    pub fn new(tokens: Vec<String>, config: InstallerConfig) -> Self {
        Self {
            tokens,
            config,
            catalog: PackageCatalog::dfvfs(),
        }
    }

    /// The plan these tokens produce.
    pub fn plan(&self) -> InstallationPlan {
        InstallationPlan::from_tokens(self.tokens.as_slice())
    }

    /// Run against the real system, or print commands in dry-run mode.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> Result<InstallReport> {
        if self.config.dry_run {
            let mut runner = DryRunRunner::new(io::stdout().lock());
            self.execute_with(&mut runner, ui)
        } else {
            self.execute_with(&mut SystemRunner, ui)
        }
    }

    /// Run with a caller-supplied runner.
    pub fn execute_with(
        &self,
        runner: &mut dyn CommandRunner,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallReport> {
        let plan = self.plan();
        let installer = Installer::new(&self.config, &self.catalog);
        let report = installer.run(&plan, runner, ui)?;

        let groups: Vec<&str> = report.groups.iter().map(|g| g.name()).collect();
        let verb = if self.config.dry_run {
            "Would install"
        } else {
            "Installed"
        };
        ui.success(&format!(
            "{} {} dependencies ({} packages)",
            verb,
            groups.join(", "),
            report.packages
        ));

        Ok(report)
    }
}
