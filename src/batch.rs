//! Batch driver.
//!
//! Processes an ordered list of files, one at a time, stopping at the first
//! failure. Later files may depend on artifacts generated by directives in
//! earlier ones, so nothing is skipped and nothing is retried.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::context::FileContext;
use crate::error::{CcgenError, Result};
use crate::scan::{scan_file, ScanBuffer};
use crate::shell::Dispatcher;

/// Totals for a completed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files scanned to completion.
    pub files: usize,

    /// Directives dispatched across all files.
    pub directives: usize,
}

/// Runs the scan over every input file, sharing one line buffer.
#[derive(Debug)]
pub struct BatchDriver<D> {
    dispatcher: D,
    buffer: ScanBuffer,
}

impl<D: Dispatcher> BatchDriver<D> {
    /// Create a driver that dispatches through `dispatcher`.
    pub fn new(dispatcher: D) -> Self {
        Self {
            dispatcher,
            buffer: ScanBuffer::new(),
        }
    }

    /// The dispatcher in use.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Scan each path in order.
    ///
    /// # Errors
    ///
    /// Returns the first error from any file; files after it are not opened.
    pub fn run<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        for path in paths {
            let directives = self.run_file(path.as_ref())?;
            summary.files += 1;
            summary.directives += directives;
        }

        tracing::info!(
            "Processed {} file(s), {} directive(s)",
            summary.files,
            summary.directives
        );
        Ok(summary)
    }

    fn run_file(&mut self, path: &Path) -> Result<usize> {
        let context = FileContext::resolve(path)?;
        tracing::debug!("Scanning {}", context.file().display());

        let file = File::open(context.file()).map_err(|source| CcgenError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let summary = scan_file(
            BufReader::new(file),
            &mut self.buffer,
            &context,
            &mut self.dispatcher,
        )?;
        tracing::debug!(
            "{}: {} line(s), {} directive(s)",
            context.file().display(),
            summary.lines,
            summary.directives
        );
        Ok(summary.directives)
    }
}
