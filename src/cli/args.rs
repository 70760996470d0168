//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// ccgen - Run code-generation commands embedded in source comments.
///
/// Scans each FILE for `// ccgen: <command>` or `/* ccgen: <command> */`
/// comments and runs the commands in order with the host shell
/// (CCGEN_SHELL, default /bin/sh). Commands see CCGEN_FILE (absolute path
/// of the file) and CCGEN_DIR (its directory). The first failure stops the
/// run.
#[derive(Debug, Parser)]
#[command(name = "ccgen")]
#[command(author, version, about)]
pub struct Cli {
    /// Source files to scan, processed in order
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
