//! Shared test helpers.

use std::path::PathBuf;

/// Create a temp dir holding one file. Returns (guard, path to the file).
pub fn source_file(name: &str, content: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// Expected output for a body that follows the fixed header.
pub fn stamped(body: &str) -> String {
    format!("{}\n{}", header_stamp::FIXED_HEADER, body)
}
