//! Remove the leading `/**` block comment from a line stream.

use std::io::BufRead;
use std::sync::OnceLock;

use regex::bytes::Regex;

use super::constants::{COMMENT_CLOSE, COMMENT_OPEN};
use super::models::{LineBuffer, StripStatus, Stripped};
use crate::error::RewriteError;

static OPEN_RE: OnceLock<Regex> = OnceLock::new();
static CLOSE_RE: OnceLock<Regex> = OnceLock::new();

fn open_re() -> &'static Regex {
    OPEN_RE.get_or_init(|| Regex::new(COMMENT_OPEN).unwrap())
}

fn close_re() -> &'static Regex {
    CLOSE_RE.get_or_init(|| Regex::new(COMMENT_CLOSE).unwrap())
}

/// Byte offset just past the first `/**` in `line`, if any.
fn opener_end(line: &[u8]) -> Option<usize> {
    open_re().find(line).map(|m| m.end())
}

fn has_closer(line: &[u8]) -> bool {
    close_re().is_match(line)
}

/// Read one line without its `\n`. A `\r` before the `\n` stays in the line.
fn next_line<R: BufRead>(reader: &mut R) -> Result<Option<Vec<u8>>, RewriteError> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
    }
    Ok(Some(buf))
}

/// Discard lines up to and including the first one containing `*/`.
/// Returns the number of lines discarded and whether a closer was found.
fn skip_comment_body<R: BufRead>(reader: &mut R) -> Result<(usize, bool), RewriteError> {
    let mut skipped = 0;
    while let Some(line) = next_line(reader)? {
        skipped += 1;
        tracing::trace!(line = %String::from_utf8_lossy(&line), "skip");
        if has_closer(&line) {
            return Ok((skipped, true));
        }
    }
    Ok((skipped, false))
}

/// Split `reader` into the leading block comment (dropped) and the remaining lines.
///
/// Only the first line may open the comment. Every later line is kept as-is,
/// including lines that contain `/**`. A `*/` after the `/**` on the first
/// line closes the comment on that line, so a one-line `/** ... */` does not
/// swallow code up to the next `*/`; the older header tool only looked for the
/// closer on later lines. `max_lines` bounds the kept lines.
pub fn strip_leading_comment<R: BufRead>(
    mut reader: R,
    max_lines: Option<usize>,
) -> Result<Stripped, RewriteError> {
    let mut lines = LineBuffer::new(max_lines);
    let Some(first) = next_line(&mut reader)? else {
        return Ok(Stripped {
            lines,
            status: StripStatus::NoComment,
            skipped: 0,
        });
    };

    let (status, skipped) = match opener_end(&first) {
        None => {
            lines.push(first)?;
            (StripStatus::NoComment, 0)
        }
        Some(end) if has_closer(&first[end..]) => (StripStatus::Stripped, 1),
        Some(_) => {
            let (body, closed) = skip_comment_body(&mut reader)?;
            let status = if closed {
                StripStatus::Stripped
            } else {
                StripStatus::Unterminated
            };
            (status, body + 1)
        }
    };

    while let Some(line) = next_line(&mut reader)? {
        lines.push(line)?;
    }
    tracing::debug!(?status, skipped, kept = lines.len(), "leading comment scan done");
    Ok(Stripped {
        lines,
        status,
        skipped,
    })
}
