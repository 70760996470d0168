//! ccgen - Run code-generation commands embedded in source comments.
//!
//! ccgen scans source files for single-line comments of the form
//! `// ccgen: <command>` or `/* ccgen: <command> */` and runs each command
//! through the host shell, in file order. Every command sees `CCGEN_FILE`
//! and `CCGEN_DIR` describing the file that named it. The first failure
//! stops the whole batch.
//!
//! # Modules
//!
//! - [`batch`] - Drives the scan over an ordered list of files
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Runtime settings read from the environment
//! - [`context`] - Per-file context published to commands
//! - [`error`] - Error types and result aliases
//! - [`scan`] - Line reading, directive decoding, and per-file scanning
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal error reporting
//!
//! # Example
//!
//! ```
//! use ccgen::scan::decode;
//!
//! let directive = decode(b"  // ccgen: protoc --rust_out=. api.proto\n").unwrap();
//! assert_eq!(directive.command(), "protoc --rust_out=. api.proto");
//!
//! assert!(decode(b"int x; // ccgen: not at line start\n").is_none());
//! ```
//!
//! For running commands against real files, see the integration tests.

pub mod batch;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod scan;
pub mod shell;
pub mod ui;

pub use error::{CcgenError, Result};
