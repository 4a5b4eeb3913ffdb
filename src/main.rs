//! recom-verify CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use recom_verify::cli::{Cli, VerifyCommand};
use recom_verify::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr; stdout carries the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("recom_verify=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("recom_verify=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("recom-verify starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let command = match VerifyCommand::from_cli(&project_root, &cli) {
        Ok(command) => command,
        Err(e) => {
            let mode = OutputMode::from_flags(cli.verbose, cli.quiet, OutputMode::default());
            let mut ui = create_ui(mode);
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    let mode = OutputMode::from_flags(cli.verbose, cli.quiet, command.config().output);
    let mut ui = create_ui(mode);

    let report = command.execute(ui.as_mut());
    ExitCode::from(report.exit_code())
}
