//! Top-level run: scan the batch and pick the process exit code.

use std::process::ExitCode;

use super::args::Cli;
use crate::batch::BatchDriver;
use crate::config::Config;
use crate::error::{CcgenError, FAILURE_EXIT_CODE};
use crate::shell::ShellDispatcher;
use crate::ui::{report_error, Theme};

/// Run every file named on the command line.
///
/// Returns success when every file scans cleanly. Otherwise the error is
/// printed to stderr and the exit code is chosen by [`exit_code_for`].
pub fn run(cli: &Cli, config: &Config) -> ExitCode {
    let mut driver = BatchDriver::new(ShellDispatcher::new(config.shell.clone()));
    tracing::debug!("Running with shell {}", driver.dispatcher().shell().display());

    match driver.run(cli.files.as_slice()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&Theme::for_stderr(config.color), &e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Exit code for a failed batch.
///
/// A failed command's status passes through; codes outside `1..=255` keep
/// their low byte, falling back to the generic failure code if that is zero.
pub fn exit_code_for(err: &CcgenError) -> u8 {
    let low = (err.exit_code() & 0xff) as u8;
    if low == 0 {
        FAILURE_EXIT_CODE as u8
    } else {
        low
    }
}
