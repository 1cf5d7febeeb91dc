use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LnkError {
    // Traversal
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("symlink loop at {}", .0.display())]
    SymlinkLoop(PathBuf),

    #[error("IO error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walk error: {0}")]
    Walk(String),

    // Output
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LnkError {
    /// The path this error occurred at, if applicable.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::PermissionDenied(p)
            | Self::NotFound(p)
            | Self::SymlinkLoop(p)
            | Self::Io { path: p, .. }
            | Self::Write { path: p, .. } => Some(p),
            Self::Walk(_) => None,
        }
    }

    /// Whether a scan keeps going after this error.
    ///
    /// Every traversal error only prunes the subtree it happened in. A failed
    /// write ends the run's output step, so it is not recoverable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Write { .. })
    }
}

/// Map an `ignore` walk error onto [`LnkError`].
pub(crate) fn from_walk_error(e: ignore::Error) -> LnkError {
    match e {
        ignore::Error::WithPath { path, err } => match strip_depth(*err) {
            ignore::Error::Io(io_err) => from_io(path, io_err),
            ignore::Error::Loop { child, .. } => LnkError::SymlinkLoop(child),
            other => LnkError::Walk(format!("{}: {}", path.display(), other)),
        },
        ignore::Error::WithDepth { err, .. } => from_walk_error(*err),
        ignore::Error::Loop { child, .. } => LnkError::SymlinkLoop(child),
        ignore::Error::Io(io_err) => from_io(PathBuf::new(), io_err),
        other => LnkError::Walk(other.to_string()),
    }
}

/// `ignore` wraps errors in depth layers on either side of the path.
fn strip_depth(e: ignore::Error) -> ignore::Error {
    match e {
        ignore::Error::WithDepth { err, .. } => strip_depth(*err),
        other => other,
    }
}

fn from_io(path: PathBuf, err: std::io::Error) -> LnkError {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => LnkError::PermissionDenied(path),
        std::io::ErrorKind::NotFound => LnkError::NotFound(path),
        _ => LnkError::Io { path, source: err },
    }
}
