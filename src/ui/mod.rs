//! Terminal error reporting.
//!
//! Directive commands own stdout and stderr while they run, so ccgen itself
//! only ever prints one line: the error that stopped the batch.

use console::{Style, Term};
use std::fmt::Display;

/// Styles for ccgen's own messages.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for the `error:` label (red bold).
    pub error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold().force_styling(true),
        }
    }

    /// Create a theme that emits no escape codes.
    pub fn plain() -> Self {
        Self {
            error: Style::new().force_styling(false),
        }
    }

    /// Pick a theme for stderr.
    ///
    /// Colors are used only when [`stderr_colors`] allows them.
    pub fn for_stderr(color: bool) -> Self {
        if stderr_colors(color) {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an error line.
    pub fn format_error(&self, message: impl Display) -> String {
        format!("{} {}", self.error.apply_to("error:"), message)
    }
}

/// Whether ANSI styles may be written to stderr.
///
/// `color` is the configured preference (false under `NO_COLOR`); styles are
/// also withheld when stderr is redirected to a file or pipe.
pub fn stderr_colors(color: bool) -> bool {
    color && Term::stderr().is_term()
}

/// Print an error line to stderr.
pub fn report_error(theme: &Theme, message: impl Display) {
    eprintln!("{}", theme.format_error(message));
}
