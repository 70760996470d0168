//! Runtime settings read from the environment.
//!
//! ccgen takes no flags beyond the file list, so everything tunable comes
//! from environment variables:
//!
//! - `CCGEN_SHELL` - interpreter for directive commands (default `/bin/sh`)
//! - `CCGEN_LOG` - log filter, falling back to `RUST_LOG`; an invalid filter
//!   is an error
//! - `NO_COLOR` - disable styled error output

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::error::Result;
use crate::shell::default_shell;

/// Variable naming the interpreter for directive commands.
pub const SHELL_VAR: &str = "CCGEN_SHELL";

/// Variable holding the log filter.
pub const LOG_VAR: &str = "CCGEN_LOG";

/// Log filter used when neither `CCGEN_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "ccgen=warn";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interpreter that runs directive commands.
    pub shell: PathBuf,

    /// `tracing` filter directive.
    pub log_filter: String,

    /// Whether errors may be printed with ANSI styles.
    pub color: bool,
}

impl Config {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values count as unset.
    ///
    /// # Example
    ///
    /// ```
    /// use ccgen::config::Config;
    /// use std::path::PathBuf;
    ///
    /// let config = Config::from_lookup(|key| match key {
    ///     "CCGEN_SHELL" => Some("/bin/bash".into()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.shell, PathBuf::from("/bin/bash"));
    /// assert_eq!(config.log_filter, "ccgen=warn");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let shell = non_empty(SHELL_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_shell);

        let log_filter = non_empty(LOG_VAR)
            .or_else(|| non_empty("RUST_LOG"))
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        // https://no-color.org/
        let color = lookup("NO_COLOR").is_none();

        Self {
            shell,
            log_filter,
            color,
        }
    }

    /// Parse [`Config::log_filter`] into a `tracing` filter.
    ///
    /// # Errors
    ///
    /// [`CcgenError::Other`](crate::CcgenError::Other) naming the filter if it
    /// does not parse.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let filter = EnvFilter::try_new(&self.log_filter)
            .with_context(|| format!("Invalid log filter '{}'", self.log_filter))?;
        Ok(filter)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
