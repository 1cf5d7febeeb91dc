use std::path::PathBuf;

/// A single item met during a root scan, handed to a [`Matcher`](crate::traits::Matcher).
pub struct Entry {
    /// Full path to the entry, as reached from the scan root.
    pub path: PathBuf,

    /// The file name component only. Matchers test this, never the full path.
    pub name: String,

    /// What kind of entry this is, after following links.
    pub kind: EntryKind,

    /// How deep below the scan root this entry was found. Root = 0.
    pub depth: usize,
}

/// The kind of a traversed entry. Links are already resolved, so a link
/// shows up as the kind of its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl EntryKind {
    pub(crate) fn from_file_type(ft: std::fs::FileType) -> Self {
        if ft.is_dir() {
            Self::Dir
        } else if ft.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}
