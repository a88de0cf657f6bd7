//! Visual theme and styling.

use console::Style;

/// Styles for status lines.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for step titles (bold).
    pub step_title: Style,
    /// Style for secondary text such as package counts (dim).
    pub dim: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            step_title: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            step_title: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a step title with optional detail.
    pub fn format_step(&self, title: &str, detail: &str) -> String {
        if detail.is_empty() {
            format!("{}", self.step_title.apply_to(format!("◆ {}", title)))
        } else {
            format!(
                "{} {}",
                self.step_title.apply_to(format!("◆ {}", title)),
                self.dim.apply_to(detail)
            )
        }
    }
}

/// Check if colors should be enabled on stderr.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = Theme::plain().format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = Theme::plain().format_warning("Running without sudo");
        assert_eq!(msg, "⚠ Running without sudo");
    }

    #[test]
    fn theme_formats_error() {
        let msg = Theme::plain().format_error("Failed");
        assert_eq!(msg, "✗ Failed");
    }

    #[test]
    fn theme_formats_step_with_detail() {
        let msg = Theme::plain().format_step("Installing test dependencies", "(1 package)");
        assert_eq!(msg, "◆ Installing test dependencies (1 package)");
    }

    #[test]
    fn theme_formats_step_without_detail() {
        let msg = Theme::plain().format_step("Updating package index", "");
        assert_eq!(msg, "◆ Updating package index");
    }
}
