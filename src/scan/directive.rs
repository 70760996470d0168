//! Directive decoding.
//!
//! A directive is a comment that opens its line (after indentation) and names
//! a shell command:
//!
//! ```text
//! // ccgen: <command>
//! /* ccgen: <command> */
//! ```
//!
//! Block comments must close on the same physical line. Anything after the
//! closer is ignored.

use std::borrow::Cow;

/// Keyword that must follow the comment opener.
const DIRECTIVE_KEYWORD: &[u8] = b"ccgen:";

const OPENER_LEN: usize = 2;

/// Shortest input that can decode to a directive: `//ccgen:`.
const MIN_DIRECTIVE_LEN: usize = OPENER_LEN + DIRECTIVE_KEYWORD.len();

/// Which comment syntax carried the directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// ccgen: ...`
    Line,
    /// `/* ccgen: ... */`
    Block,
}

impl std::fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line => write!(f, "line comment"),
            Self::Block => write!(f, "block comment"),
        }
    }
}

/// A decoded directive, borrowing its command from the scanned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    style: CommentStyle,
    command: &'a [u8],
}

impl<'a> Directive<'a> {
    /// Comment syntax the directive was written in.
    pub fn style(&self) -> CommentStyle {
        self.style
    }

    /// Command text handed to the shell.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD.
    pub fn command(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.command)
    }
}

/// Decode one line into a directive, or `None` if the line is not one.
pub fn decode(line: &[u8]) -> Option<Directive<'_>> {
    let line = trim_start(line);
    if line.len() < MIN_DIRECTIVE_LEN || line[0] != b'/' {
        return None;
    }

    let rest = &line[OPENER_LEN..];
    let (style, body) = match line[1] {
        // Trailing newline is dropped by the final trim.
        b'/' => (CommentStyle::Line, rest),
        b'*' => (CommentStyle::Block, block_body(rest)?),
        _ => return None,
    };

    let command = trim_start(body).strip_prefix(DIRECTIVE_KEYWORD)?;
    Some(Directive {
        style,
        command: trim_end(trim_start(command)),
    })
}

/// Text between `/*` and the first `*/`, if the comment closes on this line.
fn block_body(rest: &[u8]) -> Option<&[u8]> {
    for (i, pair) in rest.windows(2).enumerate() {
        if pair[0] == b'\n' {
            return None;
        }
        if pair == b"*/" {
            return Some(&rest[..i]);
        }
    }
    None
}

/// Whitespace as C's `isspace` sees it in the default locale.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn trim_start(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|&b| !is_space(b))
        .unwrap_or(bytes.len());
    &bytes[start..]
}

fn trim_end(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| !is_space(b))
        .map_or(0, |i| i + 1);
    &bytes[..end]
}
