//! auditline CLI entry point.

use std::process::ExitCode;

use auditline::cli::{Cli, ReportCommand};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("auditline=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("auditline=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("auditline starting with args: {:?}", cli);

    let working_dir = std::env::current_dir().unwrap_or_default();
    let command = ReportCommand::new(&working_dir, cli);

    match command.execute(&mut std::io::stderr()) {
        Ok(result) => {
            tracing::debug!(success = result.success, "report finished");
            ExitCode::from(result.exit_code as u8)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
