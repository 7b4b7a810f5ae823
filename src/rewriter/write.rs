//! Emit the header and body, and replace files atomically.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::models::LineBuffer;
use crate::error::RewriteError;

/// Write `header`, then every line of `lines`, each followed by a single `\n`.
pub fn write_header_and_body<W: Write>(
    writer: &mut W,
    header: &str,
    lines: &LineBuffer,
) -> io::Result<()> {
    writer.write_all(header.as_bytes())?;
    writer.write_all(b"\n")?;
    for line in lines.iter() {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Replace `path` with `contents` via a temp file in the same directory and a rename.
/// Symlinks are followed so the link stays and its target is rewritten.
/// The original keeps its permissions. On error the temp file is removed and
/// `path` is left as it was.
pub fn replace_file(path: &Path, contents: &[u8]) -> Result<(), RewriteError> {
    let fail = |source: io::Error| RewriteError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
    tracing::debug!(tmp = %tmp.path().display(), "writing temp file");
    tmp.write_all(contents).map_err(fail)?;
    tmp.as_file().sync_all().map_err(fail)?;
    if let Ok(meta) = fs::metadata(&target) {
        fs::set_permissions(tmp.path(), meta.permissions()).map_err(fail)?;
    }
    tmp.persist(&target).map_err(|e| fail(e.error))?;
    Ok(())
}
