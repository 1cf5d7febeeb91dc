use std::path::PathBuf;
use std::time::Duration;

use crate::error::LnkError;

/// The output of scanning a single root.
///
/// Scans never fail. Anything that went wrong below the root lands in
/// `errors`, and the subtree it happened in is simply missing from `paths`.
pub struct ScanReport {
    /// The root this report belongs to.
    pub root: PathBuf,

    /// Matched paths, in the order the walker found them.
    pub paths: Vec<PathBuf>,

    /// Scan statistics.
    pub stats: ScanStats,

    /// Suppressed traversal errors (permission denied, missing root, loops).
    pub errors: Vec<LnkError>,
}

/// Traversal statistics for a completed root scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanStats {
    /// Total number of non-directory entries encountered (matched or not).
    pub files: usize,

    /// Total number of directories encountered, the root included.
    pub dirs: usize,

    /// Wall-clock time from scan start to completion.
    pub duration: Duration,

    /// `(files + dirs) / duration`, 0 on zero-duration runs.
    pub entries_per_sec: usize,
}

impl ScanStats {
    pub(crate) fn compute(files: usize, dirs: usize, duration: Duration) -> Self {
        let total = files + dirs;
        let eps = if duration.as_secs_f64() > 0.0 {
            (total as f64 / duration.as_secs_f64()) as usize
        } else {
            0
        };
        Self {
            files,
            dirs,
            duration,
            entries_per_sec: eps,
        }
    }
}

/// What happened to the output file at the end of a run.
#[derive(Debug)]
pub enum WriteOutcome {
    /// The destination was overwritten with this many records.
    Written(usize),

    /// Nothing matched; the destination was not touched.
    SkippedEmpty,

    /// The write failed and was abandoned.
    Failed(LnkError),
}

/// The output of a full dispatcher run.
pub struct RunReport {
    /// One report per root, in root-list order.
    pub scans: Vec<ScanReport>,

    /// Outcome of the single output write.
    pub write: WriteOutcome,
}

impl RunReport {
    pub fn match_count(&self) -> usize {
        self.scans.iter().map(|s| s.paths.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.scans.iter().map(|s| s.errors.len()).sum()
    }
}
