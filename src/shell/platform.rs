//! Platform-specific interpreter selection.

use std::path::{Path, PathBuf};

/// How an interpreter expects to receive a command string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// POSIX-style shells: `sh -c <command>`.
    Posix,
    /// Windows `cmd.exe`: `cmd /C <command>`.
    Cmd,
}

impl ShellType {
    /// Infer the shell type from its executable name.
    pub fn from_executable(exe: &Path) -> Self {
        let name = exe
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();

        match name.as_str() {
            "cmd" => ShellType::Cmd,
            _ => ShellType::Posix,
        }
    }

    /// Flag that introduces the command string.
    pub fn command_flag(self) -> &'static str {
        match self {
            ShellType::Posix => "-c",
            ShellType::Cmd => "/C",
        }
    }
}

/// Interpreter used when none is configured.
///
/// `/bin/sh` on Unix, `%COMSPEC%` (or `cmd.exe`) on Windows.
pub fn default_shell() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::var_os("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("cmd.exe"))
    } else {
        PathBuf::from("/bin/sh")
    }
}
