//! Line reading, directive decoding, and per-file scanning.

pub mod directive;
pub mod reader;
pub mod scanner;

pub use directive::{decode, CommentStyle, Directive};
pub use reader::{LineReader, ScanBuffer};
pub use scanner::{scan_file, ScanSummary};
