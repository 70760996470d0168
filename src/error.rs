//! Error types for ccgen operations.
//!
//! This module defines [`CcgenError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every variant is fatal for the whole batch; nothing is retried
//! - Use `anyhow::Error` (via `CcgenError::Other`) for settings that fail to
//!   parse, with `anyhow::Context` naming the offending value
//! - [`CcgenError::exit_code`] decides the process exit code

use std::path::PathBuf;
use thiserror::Error;

/// Exit code used for every failure that is not a command's own status.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Core error type for ccgen operations.
#[derive(Debug, Error)]
pub enum CcgenError {
    /// The absolute path of an input file could not be resolved.
    #[error("Failed to resolve path {path}: {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The per-file context could not be made visible to commands.
    #[error("Failed to publish CCGEN_FILE/CCGEN_DIR for {path}: {message}")]
    EnvironmentPublish { path: PathBuf, message: String },

    /// An input file could not be opened for reading.
    #[error("Failed to open file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading an input file failed part-way.
    #[error("Failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The command interpreter could not be started.
    #[error("Failed to spawn command '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// A directive's command exited unsuccessfully.
    #[error("Command failed with exit code {code} in {path}: {command}")]
    CommandFailed {
        command: String,
        path: PathBuf,
        code: i32,
    },

    /// Generic wrapped error for anyhow interop (invalid settings).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CcgenError {
    /// Exit code the process should terminate with for this error.
    ///
    /// A failed command propagates its own status; everything else maps to
    /// [`FAILURE_EXIT_CODE`].
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => FAILURE_EXIT_CODE,
        }
    }
}

/// Result type alias for ccgen operations.
pub type Result<T> = std::result::Result<T, CcgenError>;
