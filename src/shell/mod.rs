//! Shell command execution.

pub mod command;
pub mod platform;

pub use command::{CommandStatus, Dispatcher, ShellDispatcher};
pub use platform::{default_shell, ShellType};
