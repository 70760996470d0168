//! Shell command execution.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use super::platform::{default_shell, ShellType};
use crate::context::FileContext;
use crate::error::{CcgenError, Result};

/// Exit status of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code; `128 + N` for a command killed by signal `N`.
    pub code: i32,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandStatus {
    /// Whether the command succeeded (exit code 0).
    pub fn success(&self) -> bool {
        self.code == 0
    }

    fn from_exit_status(status: ExitStatus, duration: Duration) -> Self {
        Self {
            code: exit_code(status),
            duration,
        }
    }
}

/// Runs decoded directive commands.
pub trait Dispatcher {
    /// Run `command` to completion with `context` visible in its environment.
    ///
    /// A command that runs and exits non-zero is reported through the
    /// returned status, not as an error.
    fn dispatch(&mut self, command: &str, context: &FileContext) -> Result<CommandStatus>;
}

/// Dispatcher that hands commands to the host shell.
///
/// Children inherit stdio and the full environment of this process, plus
/// `CCGEN_FILE` and `CCGEN_DIR` for the current file.
#[derive(Debug, Clone)]
pub struct ShellDispatcher {
    shell: PathBuf,
    shell_type: ShellType,
}

impl Default for ShellDispatcher {
    fn default() -> Self {
        Self::new(default_shell())
    }
}

impl ShellDispatcher {
    /// Create a dispatcher that runs commands with `shell`.
    pub fn new(shell: PathBuf) -> Self {
        let shell_type = ShellType::from_executable(&shell);
        Self { shell, shell_type }
    }

    /// Interpreter executable.
    pub fn shell(&self) -> &Path {
        &self.shell
    }
}

impl Dispatcher for ShellDispatcher {
    fn dispatch(&mut self, command: &str, context: &FileContext) -> Result<CommandStatus> {
        let start = Instant::now();

        let mut cmd = Command::new(&self.shell);
        cmd.arg(self.shell_type.command_flag());
        cmd.arg(command);
        cmd.envs(context.env_vars());
        cmd.stdin(Stdio::inherit());
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd.status().map_err(|source| CcgenError::SpawnFailed {
            command: command.to_string(),
            source,
        })?;

        Ok(CommandStatus::from_exit_status(status, start.elapsed()))
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(crate::error::FAILURE_EXIT_CODE)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(crate::error::FAILURE_EXIT_CODE)
}
