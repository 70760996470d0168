//! Incremental line reading into a reusable buffer.
//!
//! [`ScanBuffer`] is allocated once per run and shared by every file. Reading
//! a line only resets its length, so capacity grows to the longest line seen
//! and is never given back.

use std::io::{self, ErrorKind, Read};

/// Capacity of a fresh [`ScanBuffer`], in bytes.
pub const INITIAL_CAPACITY: usize = 128;

/// Growable byte storage holding the line currently being scanned.
#[derive(Debug)]
pub struct ScanBuffer {
    bytes: Vec<u8>,
}

impl Default for ScanBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanBuffer {
    /// Create a buffer with [`INITIAL_CAPACITY`] bytes of storage.
    pub fn new() -> Self {
        Self {
            bytes: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Allocated storage, in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Bytes of the line read so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn clear(&mut self) {
        self.bytes.clear();
    }

    /// Append a byte, doubling capacity first if the buffer is full.
    fn push(&mut self, byte: u8) {
        let capacity = self.bytes.capacity();
        if self.bytes.len() == capacity {
            self.bytes.reserve_exact(capacity.max(INITIAL_CAPACITY));
        }
        self.bytes.push(byte);
    }
}

/// Pulls newline-terminated lines out of a byte stream.
///
/// Bytes are read one at a time, so the stream should be buffered
/// (a [`std::io::BufReader`] around a file) to avoid a syscall per byte.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
}

impl<R: Read> LineReader<R> {
    /// Wrap a byte stream.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read the next line into `buffer`.
    ///
    /// Returns the line including its trailing `\n`, or without one when the
    /// stream ends mid-line. Returns `Ok(None)` once the stream is exhausted
    /// and no bytes were read. Any I/O fault other than an interrupted read is
    /// returned as-is.
    pub fn read_line<'b>(&mut self, buffer: &'b mut ScanBuffer) -> io::Result<Option<&'b [u8]>> {
        buffer.clear();
        let mut byte = [0u8; 1];

        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    buffer.push(byte[0]);
                    if byte[0] == b'\n' {
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        if buffer.bytes.is_empty() {
            Ok(None)
        } else {
            Ok(Some(buffer.as_bytes()))
        }
    }
}
