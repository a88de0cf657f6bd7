//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use dfvfs_deps::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.step("Updating package index", "");
//! ui.success("Done");
//!
//! assert_eq!(ui.steps(), ["Updating package index"]);
//! assert_eq!(ui.successes(), ["Done"]);
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    steps: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Step titles shown, without detail.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Success messages shown.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Warning messages shown.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Error messages shown.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl UserInterface for MockUI {
    fn step(&mut self, title: &str, _detail: &str) {
        self.steps.push(title.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}
