//! # lnkscan
//!
//! Parallel scan for shortcut files (`.lnk`) whose names mention one of a
//! fixed set of keywords.
//!
//! A run walks every configured root on its own worker, following links,
//! keeps the entries whose name ends with `.lnk` and contains a keyword
//! (case-insensitive), and writes all matches, in root order, as
//! `path1;path2;...;pathN;` to a single output file. When nothing matches
//! the output file is not touched.
//!
//! Nothing in a run fails outward. Unreadable subtrees are skipped and
//! recorded in the per-root [`ScanReport`]; a failed write is recorded in
//! the [`RunReport`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! let config = lnkscan::Config::builder()
//!     .roots(["/mnt/c/Users/ana", "/mnt/d/Users"])
//!     .output("/tmp/resultado_atalhos.txt")
//!     .build();
//!
//! let report = lnkscan::run(&config);
//! println!("{} shortcuts found", report.match_count());
//! ```
//!
//! Single roots can be scanned directly with any [`Matcher`]:
//!
//! ```rust
//! use std::path::Path;
//! use std::sync::Arc;
//! use lnkscan::{scan, KeywordSet, ShortcutMatcher, WalkConfig};
//!
//! let matcher = Arc::new(ShortcutMatcher::new(".lnk", KeywordSet::new(["lgpd"])));
//! let report = scan(Path::new("/definitely/not/here"), matcher, &WalkConfig::default());
//!
//! assert!(report.paths.is_empty());
//! assert_eq!(report.errors.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod logging;
pub mod output;

mod config;
mod dispatch;
mod engine;
mod entry;
mod error;
mod keywords;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use config::{Config, ConfigBuilder, DEFAULT_KEYWORDS, SHORTCUT_SUFFIX};
pub use dispatch::run;
pub use engine::{scan, WalkConfig};
pub use entry::{Entry, EntryKind};
pub use error::LnkError;
pub use keywords::{KeywordSet, ShortcutMatcher};
pub use results::{RunReport, ScanReport, ScanStats, WriteOutcome};
pub use traits::Matcher;
