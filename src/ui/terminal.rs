//! Status output on the terminal.

use console::Term;

use super::theme::{should_use_colors, Theme};
use super::UserInterface;

/// Writes status lines to stderr.
///
/// Stdout is left to the package manager and to dry-run command listings.
#[derive(Debug)]
pub struct TerminalUI {
    term: Term,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI, picking colors from the environment.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self {
            term: Term::stderr(),
            theme,
        }
    }

    fn write(&self, line: &str) {
        if let Err(e) = self.term.write_line(line) {
            tracing::debug!("Failed to write status line: {}", e);
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn step(&mut self, title: &str, detail: &str) {
        self.write(&self.theme.format_step(title, detail));
    }

    fn success(&mut self, msg: &str) {
        self.write(&self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        self.write(&self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        self.write(&self.theme.format_error(msg));
    }
}
