//! Error taxonomy for header rewriting.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("leading comment in {} is never closed (no `*/` before end of file)", .path.display())]
    UnterminatedComment { path: PathBuf },

    #[error("more than {limit} lines to keep; raise --max-lines or pass 0 for no limit")]
    CapacityExceeded { limit: usize },

    #[error("cannot write {}: {source}", .path.display())]
    WriteFailure { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl RewriteError {
    /// Classify a failure to open `path` for reading.
    pub fn open(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Read { path, source: err },
        }
    }

    /// Attach `path` to a bare I/O error raised while reading it.
    pub fn with_read_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io(source) => Self::Read {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}
