//! ccgen CLI entry point.

use std::process::ExitCode;

use ccgen::cli::{exit_code_for, run, Cli};
use ccgen::config::Config;
use ccgen::ui::{report_error, stderr_colors, Theme};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*};

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so they never mix with generated output on stdout.
/// The filter comes from `CCGEN_LOG`, then `RUST_LOG`, then `ccgen=warn`.
fn init_tracing(config: &Config) -> ccgen::Result<()> {
    let filter = config.env_filter()?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(stderr_colors(config.color))
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();
    if let Err(e) = init_tracing(&config) {
        report_error(&Theme::for_stderr(config.color), &e);
        return ExitCode::from(exit_code_for(&e));
    }

    tracing::debug!("ccgen starting with args: {:?}", cli);

    run(&cli, &config)
}
