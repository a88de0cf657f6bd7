//! dfvfs-deps entry point.

use std::process::ExitCode;

use clap::Parser;
use dfvfs_deps::cli::{Cli, InstallCommand};
use dfvfs_deps::ui::{TerminalUI, UserInterface};
use dfvfs_deps::{config, DepsError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Set to any value to force debug logging.
const ENV_DEBUG: &str = "DFVFS_DEPS_DEBUG";

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `DFVFS_DEPS_DEBUG` sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("dfvfs_deps=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dfvfs_deps=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(err: &DepsError) -> ExitCode {
    ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(std::env::var_os(ENV_DEBUG).is_some());

    let tokens = cli.token_strings();
    tracing::debug!("dfvfs-deps starting with tokens: {:?}", tokens);

    let mut ui = TerminalUI::new();

    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return exit_code(&e);
        }
    };

    let command = InstallCommand::new(tokens, config);
    match command.execute(&mut ui) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            exit_code(&e)
        }
    }
}
