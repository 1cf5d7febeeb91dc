use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use ignore::{DirEntry, WalkBuilder, WalkState};
use tracing::{debug, trace};

use crate::entry::{Entry, EntryKind};
use crate::error::{from_walk_error, LnkError};
use crate::results::{ScanReport, ScanStats};
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// WalkConfig
// ---------------------------------------------------------------------------

/// Per-root traversal parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkConfig {
    /// Walker threads used inside a single root scan.
    pub threads:   usize,

    /// Maximum depth below the root. `None` walks the whole tree.
    pub max_depth: Option<usize>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            threads:   1,
            max_depth: None,
        }
    }
}

// ---------------------------------------------------------------------------
// scan()
// ---------------------------------------------------------------------------

/// Walk everything reachable from `root`, following links, and collect the
/// entries `matcher` accepts.
///
/// Never fails. A missing, unreadable or non-directory root just yields an
/// empty report; errors below the root prune that subtree only.
pub fn scan(root: &Path, matcher: Arc<dyn Matcher>, config: &WalkConfig) -> ScanReport {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .ignore(false)
        .parents(false)
        .hidden(false)
        .follow_links(true)
        .same_file_system(false)
        .threads(config.threads.max(1))
        .max_depth(config.max_depth);

    let walker = builder.build_parallel();

    // Shared state across walker threads
    let files  = Arc::new(AtomicUsize::new(0));
    let dirs   = Arc::new(AtomicUsize::new(0));
    let paths  = Arc::new(Mutex::new(Vec::<PathBuf>::new()));
    let errors = Arc::new(Mutex::new(Vec::<LnkError>::new()));

    let start = Instant::now();

    walker.run(|| {
        let matcher = Arc::clone(&matcher);
        let files   = Arc::clone(&files);
        let dirs    = Arc::clone(&dirs);
        let paths   = Arc::clone(&paths);
        let errors  = Arc::clone(&errors);

        Box::new(move |res: Result<DirEntry, ignore::Error>| -> WalkState {
            let entry = match res {
                Ok(e) => e,
                Err(e) => {
                    let err = from_walk_error(e);
                    debug!(error = %err, "skipping unreadable entry");
                    if let Ok(mut errs) = errors.lock() {
                        errs.push(err);
                    }
                    return WalkState::Continue;
                }
            };

            let ft = match entry.file_type() {
                Some(ft) => ft,
                None     => return WalkState::Continue,
            };

            if ft.is_dir() {
                dirs.fetch_add(1, Ordering::Relaxed);
            } else {
                files.fetch_add(1, Ordering::Relaxed);
            }

            // The root is never a candidate, even when it is a file.
            if entry.depth() == 0 {
                return WalkState::Continue;
            }

            let candidate = Entry {
                path:  entry.path().to_path_buf(),
                name:  entry.file_name().to_string_lossy().into_owned(),
                kind:  EntryKind::from_file_type(ft),
                depth: entry.depth(),
            };

            if matcher.is_match(&candidate) {
                trace!(path = %candidate.path.display(), "match");
                if let Ok(mut p) = paths.lock() {
                    p.push(candidate.path);
                }
            }

            WalkState::Continue
        })
    });

    let duration = start.elapsed();

    let files  = files.load(Ordering::Relaxed);
    let dirs   = dirs.load(Ordering::Relaxed);
    let paths  = take_shared(paths);
    let errors = take_shared(errors);

    ScanReport {
        root: root.to_path_buf(),
        paths,
        stats: ScanStats::compute(files, dirs, duration),
        errors,
    }
}

/// Recover the vector behind a walker-shared `Arc<Mutex<_>>` once all
/// walker threads have joined.
fn take_shared<T>(shared: Arc<Mutex<Vec<T>>>) -> Vec<T> {
    match Arc::try_unwrap(shared) {
        Ok(m) => m.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner()),
        Err(arc) => match arc.lock() {
            Ok(mut v) => std::mem::take(&mut *v),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        },
    }
}
