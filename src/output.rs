use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::LnkError;

pub const SEPARATOR: u8 = b';';

/// Overwrite `destination` with `path;` for every path, on one line.
///
/// The file is created or truncated even for an empty slice; callers that
/// must leave the destination untouched skip the call.
pub fn write(matches: &[PathBuf], destination: &Path) -> Result<(), LnkError> {
    let wrap = |source| LnkError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let file = File::create(destination).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    for path in matches {
        out.write_all(&path_bytes(path)).map_err(wrap)?;
        out.write_all(&[SEPARATOR]).map_err(wrap)?;
    }
    out.flush().map_err(wrap)
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}
