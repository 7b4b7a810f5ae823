//! Data models for header rewriting.

use crate::error::RewriteError;

/// Ordered lines kept from the input, as raw bytes without the trailing `\n`.
/// `capacity` of `None` means no limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Vec<u8>>,
    capacity: Option<usize>,
}

impl LineBuffer {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            lines: Vec::new(),
            capacity,
        }
    }

    /// Append a line, failing with `CapacityExceeded` once the buffer is full.
    pub fn push(&mut self, line: Vec<u8>) -> Result<(), RewriteError> {
        if let Some(limit) = self.capacity {
            if self.lines.len() >= limit {
                return Err(RewriteError::CapacityExceeded { limit });
            }
        }
        self.lines.push(line);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.lines.iter().map(Vec::as_slice)
    }
}

/// What happened to the leading comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripStatus {
    /// A leading `/**` block was removed up to and including its `*/` line.
    Stripped,
    /// A leading `/**` block was opened but input ended before any `*/`.
    Unterminated,
    /// The first line did not open a block comment.
    NoComment,
}

/// Result of stripping the leading comment from an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped {
    pub lines: LineBuffer,
    pub status: StripStatus,
    /// Number of input lines dropped as part of the leading comment.
    pub skipped: usize,
}

/// Result of rewriting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub status: StripStatus,
    pub lines_kept: usize,
    /// True if the produced bytes differ from the original file.
    pub changed: bool,
    pub output: Vec<u8>,
}
