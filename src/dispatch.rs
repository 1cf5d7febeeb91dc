use std::path::PathBuf;
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::engine::scan;
use crate::output;
use crate::results::{RunReport, ScanReport, WriteOutcome};
use crate::traits::Matcher;

/// Scan every configured root in parallel, then write the matches.
///
/// Results keep root-list order regardless of which scan finishes first.
/// The output file is only touched when something matched. Nothing here
/// fails: scan and write errors end up in the returned report.
pub fn run(config: &Config) -> RunReport {
    let scans = scan_all(config);

    for report in &scans {
        debug!(
            root    = %report.root.display(),
            matches = report.paths.len(),
            files   = report.stats.files,
            dirs    = report.stats.dirs,
            errors  = report.errors.len(),
            elapsed = ?report.stats.duration,
            rate    = report.stats.entries_per_sec,
            "root scanned"
        );
    }

    let matches: Vec<PathBuf> = scans
        .iter()
        .flat_map(|s| s.paths.iter().cloned())
        .collect();

    let write = if matches.is_empty() {
        info!("no matching shortcuts, output left untouched");
        WriteOutcome::SkippedEmpty
    } else {
        match output::write(&matches, config.output()) {
            Ok(()) => {
                info!(
                    count  = matches.len(),
                    output = %config.output().display(),
                    "matches written"
                );
                WriteOutcome::Written(matches.len())
            }
            Err(e) => {
                warn!(error = %e, "could not write matches");
                WriteOutcome::Failed(e)
            }
        }
    };

    RunReport { scans, write }
}

/// One scan per root on a dedicated pool of `config.workers()` threads.
///
/// `collect` on an indexed parallel iterator keeps input order.
fn scan_all(config: &Config) -> Vec<ScanReport> {
    let matcher: Arc<dyn Matcher> = Arc::new(config.matcher().clone());
    let walk = *config.walk();
    let scan_root = |root: &PathBuf| scan(root, Arc::clone(&matcher), &walk);

    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers())
        .thread_name(|i| format!("lnkscan-root-{i}"))
        .build()
    {
        Ok(pool) => pool.install(|| config.roots().par_iter().map(scan_root).collect()),
        Err(e) => {
            warn!(error = %e, "worker pool unavailable, scanning sequentially");
            config.roots().iter().map(scan_root).collect()
        }
    }
}
