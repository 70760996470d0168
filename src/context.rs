//! Per-file context published to dispatched commands.
//!
//! Commands see the file that named them through two environment variables,
//! [`FILE_VAR`] and [`DIR_VAR`]. The context is carried as a value and only
//! written into the child's environment when a command is spawned; the
//! ccgen process environment itself is never modified.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{CcgenError, Result};

/// Absolute path of the file being scanned.
pub const FILE_VAR: &str = "CCGEN_FILE";

/// Parent directory of [`FILE_VAR`].
pub const DIR_VAR: &str = "CCGEN_DIR";

/// The file currently being scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContext {
    file: PathBuf,
    dir: PathBuf,
}

impl FileContext {
    /// Resolve `path` to its canonical absolute form and derive its directory.
    ///
    /// # Errors
    ///
    /// [`CcgenError::PathResolution`] if the path cannot be resolved (for
    /// example, the file does not exist), and
    /// [`CcgenError::EnvironmentPublish`] if the resolved path has no parent.
    pub fn resolve(path: &Path) -> Result<Self> {
        let file = std::fs::canonicalize(path).map_err(|source| CcgenError::PathResolution {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_absolute(file)
    }

    /// Build a context from an already absolute path.
    pub fn from_absolute(file: PathBuf) -> Result<Self> {
        let dir = file
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| CcgenError::EnvironmentPublish {
                path: file.clone(),
                message: "path has no parent directory".to_string(),
            })?;
        Ok(Self { file, dir })
    }

    /// Absolute path of the file.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Directory containing the file.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Environment pairs to set on every command spawned for this file.
    pub fn env_vars(&self) -> [(&'static str, &OsStr); 2] {
        [
            (FILE_VAR, self.file.as_os_str()),
            (DIR_VAR, self.dir.as_os_str()),
        ]
    }
}
