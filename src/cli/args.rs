//! CLI argument definitions.
//!
//! Every argument is a free-form token. Help and version flags are
//! disabled so that `--help` is just another token and is ignored.
//! Tokens are taken as OS strings so arguments that are not valid UTF-8
//! are ignored like any other unrecognized token.

use clap::Parser;
use std::ffi::OsString;

/// Install the Debian packages needed to run, test, debug, or develop dfVFS.
#[derive(Debug, Parser)]
#[command(name = "dfvfs-deps")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Tokens selecting optional groups: include-debug, include-development, include-test
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub tokens: Vec<OsString>,
}

impl Cli {
    /// Tokens as strings, with invalid UTF-8 replaced by U+FFFD.
    pub fn token_strings(&self) -> Vec<String> {
        self.tokens
            .iter()
            .map(|t| t.to_string_lossy().into_owned())
            .collect()
    }
}
