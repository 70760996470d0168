//! Per-file scan loop.

use std::io::Read;

use super::directive::decode;
use super::reader::{LineReader, ScanBuffer};
use crate::context::FileContext;
use crate::error::{CcgenError, Result};
use crate::shell::Dispatcher;

/// Counts gathered while scanning one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Lines read, including the final unterminated one.
    pub lines: usize,

    /// Directives dispatched.
    pub directives: usize,
}

/// Scan `input` line by line, dispatching every directive it contains.
///
/// Stops at end of stream, at the first read error, or at the first command
/// that exits non-zero. `buffer` is reused as-is; only its length is reset.
///
/// # Errors
///
/// - [`CcgenError::Read`] if reading `input` fails
/// - [`CcgenError::CommandFailed`] if a command exits non-zero
/// - any error returned by the dispatcher itself
pub fn scan_file<R, D>(
    input: R,
    buffer: &mut ScanBuffer,
    context: &FileContext,
    dispatcher: &mut D,
) -> Result<ScanSummary>
where
    R: Read,
    D: Dispatcher + ?Sized,
{
    let mut reader = LineReader::new(input);
    let mut summary = ScanSummary::default();

    loop {
        let line = reader
            .read_line(buffer)
            .map_err(|source| CcgenError::Read {
                path: context.file().to_path_buf(),
                source,
            })?;
        let Some(line) = line else {
            return Ok(summary);
        };
        summary.lines += 1;

        let Some(directive) = decode(line) else {
            continue;
        };

        let command = directive.command();
        tracing::debug!(
            "{}:{}: dispatching '{}' from {}",
            context.file().display(),
            summary.lines,
            command,
            directive.style()
        );

        let status = dispatcher.dispatch(&command, context)?;
        summary.directives += 1;

        if !status.success() {
            return Err(CcgenError::CommandFailed {
                command: command.into_owned(),
                path: context.file().to_path_buf(),
                code: status.code,
            });
        }
        tracing::debug!("'{}' finished in {:?}", command, status.duration);
    }
}
