//! Orchestrate a single-file rewrite: read, strip, render, replace.

use std::fs;
use std::path::Path;

use super::constants::{DEFAULT_MAX_LINES, FIXED_HEADER};
use super::models::{LineBuffer, RewriteOutcome, StripStatus, Stripped};
use super::strip::strip_leading_comment;
use super::write::replace_file;
use crate::error::RewriteError;

/// What to do when the leading `/**` is never closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnterminatedPolicy {
    /// Fail with `UnterminatedComment` and leave the file untouched.
    #[default]
    Fail,
    /// Warn and write the header alone; the whole original body is dropped.
    HeaderOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Maximum number of kept lines; `None` for no limit.
    pub max_lines: Option<usize>,
    pub unterminated: UnterminatedPolicy,
    /// Compute the outcome without touching the file.
    pub dry_run: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self {
            max_lines: Some(DEFAULT_MAX_LINES),
            unterminated: UnterminatedPolicy::Fail,
            dry_run: false,
        }
    }
}

/// Full output bytes: `header`, then the kept lines, each line ending in `\n`.
pub fn render(header: &str, lines: &LineBuffer) -> Vec<u8> {
    let mut out = Vec::with_capacity(header.len() + 1);
    out.extend_from_slice(header.as_bytes());
    out.push(b'\n');
    for line in lines.iter() {
        out.extend_from_slice(line);
        out.push(b'\n');
    }
    out
}

/// Replace the leading comment of the file at `path` with [`FIXED_HEADER`].
pub fn rewrite_file(
    path: &Path,
    options: &RewriteOptions,
) -> Result<RewriteOutcome, RewriteError> {
    let original = fs::read(path).map_err(|e| RewriteError::open(path, e))?;
    let Stripped {
        lines,
        status,
        skipped,
    } = strip_leading_comment(original.as_slice(), options.max_lines)
        .map_err(|e| e.with_read_path(path))?;

    if status == StripStatus::Unterminated {
        match options.unterminated {
            UnterminatedPolicy::Fail => {
                return Err(RewriteError::UnterminatedComment {
                    path: path.to_path_buf(),
                })
            }
            UnterminatedPolicy::HeaderOnly => tracing::warn!(
                path = %path.display(),
                skipped,
                "leading comment never closed; dropping the rest of the file"
            ),
        }
    }

    let output = render(FIXED_HEADER, &lines);
    let changed = output != original;
    if changed && !options.dry_run {
        replace_file(path, &output)?;
        tracing::info!(path = %path.display(), ?status, kept = lines.len(), "header written");
    } else {
        tracing::info!(path = %path.display(), changed, "file not modified");
    }

    Ok(RewriteOutcome {
        status,
        lines_kept: lines.len(),
        changed,
        output,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(body: &str) -> String {
        format!("{FIXED_HEADER}\n{body}")
    }

    fn rewrite_str(
        input: &str,
        options: &RewriteOptions,
    ) -> (Result<RewriteOutcome, RewriteError>, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Main.java");
        fs::write(&path, input).unwrap();
        let result = rewrite_file(&path, options);
        let after = fs::read_to_string(&path).unwrap();
        (result, after)
    }

    #[test]
    fn render_matches_written_output() {
        let mut lines = LineBuffer::new(None);
        for l in ["a", "", "b\r"] {
            lines.push(l.as_bytes().to_vec()).unwrap();
        }
        let mut written = Vec::new();
        crate::rewriter::write_header_and_body(&mut written, "/** h */", &lines).unwrap();
        assert_eq!(render("/** h */", &lines), written);
    }

    #[test]
    fn render_header_only() {
        let out = render("/** h */", &LineBuffer::new(None));
        assert_eq!(out, b"/** h */\n");
    }

    #[test]
    fn rewrite_replaces_old_comment() {
        let (result, after) = rewrite_str("/**\n* old\n*/\nint x;\n", &RewriteOptions::default());
        let outcome = result.unwrap();
        assert_eq!(outcome.status, StripStatus::Stripped);
        assert!(outcome.changed);
        assert_eq!(after, expected("int x;\n"));
    }

    #[test]
    fn rewrite_without_comment_prepends_header() {
        let (result, after) = rewrite_str("int x;\n", &RewriteOptions::default());
        assert_eq!(result.unwrap().status, StripStatus::NoComment);
        assert_eq!(after, expected("int x;\n"));
    }

    #[test]
    fn unterminated_fails_by_default() {
        let input = "/**\n* old\nint x;\n";
        let (result, after) = rewrite_str(input, &RewriteOptions::default());
        assert!(matches!(
            result.unwrap_err(),
            RewriteError::UnterminatedComment { .. }
        ));
        assert_eq!(after, input);
    }

    #[test]
    fn unterminated_header_only_policy() {
        let options = RewriteOptions {
            unterminated: UnterminatedPolicy::HeaderOnly,
            ..RewriteOptions::default()
        };
        let (result, after) = rewrite_str("/**\n* old\nint x;\n", &options);
        assert_eq!(result.unwrap().status, StripStatus::Unterminated);
        assert_eq!(after, expected(""));
    }

    #[test]
    fn capacity_exceeded_leaves_file() {
        let options = RewriteOptions {
            max_lines: Some(2),
            ..RewriteOptions::default()
        };
        let (result, after) = rewrite_str("a\nb\nc\n", &options);
        assert!(matches!(
            result.unwrap_err(),
            RewriteError::CapacityExceeded { limit: 2 }
        ));
        assert_eq!(after, "a\nb\nc\n");
    }

    #[test]
    fn dry_run_does_not_write() {
        let options = RewriteOptions {
            dry_run: true,
            ..RewriteOptions::default()
        };
        let (result, after) = rewrite_str("int x;\n", &options);
        let outcome = result.unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.output, expected("int x;\n").into_bytes());
        assert_eq!(after, "int x;\n");
    }

    #[test]
    fn already_stamped_is_unchanged() {
        let (result, after) = rewrite_str(&expected("int x;\n"), &RewriteOptions::default());
        assert!(!result.unwrap().changed);
        assert_eq!(after, expected("int x;\n"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = rewrite_file(&dir.path().join("nope.c"), &RewriteOptions::default()).unwrap_err();
        assert!(matches!(err, RewriteError::FileNotFound { .. }));
    }

    #[test]
    fn directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = rewrite_file(dir.path(), &RewriteOptions::default()).unwrap_err();
        assert!(matches!(err, RewriteError::Read { .. }));
    }
}
