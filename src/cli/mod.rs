//! Command-line interface for ccgen.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - Runs a parsed invocation and maps the outcome to an exit code

pub mod args;
pub mod run;

pub use args::Cli;
pub use run::{exit_code_for, run};
