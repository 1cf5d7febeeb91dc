use std::path::{Path, PathBuf};

use crate::engine::WalkConfig;
use crate::keywords::{KeywordSet, ShortcutMatcher};

// ---------------------------------------------------------------------------
// Shipped defaults
// ---------------------------------------------------------------------------

/// Keywords searched for in shortcut names.
pub const DEFAULT_KEYWORDS: [&str; 12] = [
    "LGPD",
    "Ronda Senior",
    "SRVTCP",
    "Administração de Pessoal",
    "Benefícios e Tarefeiros",
    "Cargos e Salários",
    "Controle de Ponto e Refeitório",
    "Jurídico",
    "Quadro de Vagas e Orçamento",
    "Recrutamento e Seleção",
    "Segurança e Medicina",
    "Treinamento e Pesquisa",
];

pub const SHORTCUT_SUFFIX: &str = ".lnk";

/// Environment variable naming the user-profile root.
pub const PROFILE_VAR: &str = "USERPROFILE";

pub const PROFILE_FALLBACK: &str = r"C:\Users\Default";

/// Roots scanned after the user profile, in order.
pub const FIXED_ROOTS: [&str; 3] = [
    r"C:\ProgramData\Microsoft\Windows\Start Menu",
    r"D:\Users",
    r"E:\Users",
];

pub const DEFAULT_OUTPUT: &str = r"C:\Windows\Temp\resultado_atalhos.txt";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Everything a run needs, fixed at startup and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    roots:    Vec<PathBuf>,
    matcher:  ShortcutMatcher,
    output:   PathBuf,
    workers:  usize,
    walk:     WalkConfig,
}

impl Config {
    /// Start from the shipped defaults with an empty root list.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The shipped configuration: profile root from `USERPROFILE`, then the
    /// fixed roots.
    pub fn from_env() -> Self {
        let profile = std::env::var_os(PROFILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(PROFILE_FALLBACK));

        Self::builder()
            .root(profile)
            .roots(FIXED_ROOTS)
            .build()
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn matcher(&self) -> &ShortcutMatcher {
        &self.matcher
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Size of the root-scan worker pool. Always at least 1.
    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn walk(&self) -> &WalkConfig {
        &self.walk
    }
}

// ---------------------------------------------------------------------------
// ConfigBuilder
// ---------------------------------------------------------------------------

/// Chained builder for [`Config`].
///
/// ```rust
/// let config = lnkscan::Config::builder()
///     .root("/srv/share")
///     .keywords(["lgpd"])
///     .output("/tmp/atalhos.txt")
///     .workers(2)
///     .build();
///
/// assert_eq!(config.roots().len(), 1);
/// ```
pub struct ConfigBuilder {
    roots:     Vec<PathBuf>,
    keywords:  KeywordSet,
    suffix:    String,
    output:    PathBuf,
    workers:   Option<usize>,
    walk:      WalkConfig,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            roots:    Vec::new(),
            keywords: KeywordSet::new(DEFAULT_KEYWORDS),
            suffix:   SHORTCUT_SUFFIX.to_string(),
            output:   PathBuf::from(DEFAULT_OUTPUT),
            workers:  None,
            walk:     WalkConfig::default(),
        }
    }
}

impl ConfigBuilder {
    // ── Roots ─────────────────────────────────────────────────────────────

    /// Append one root to the scan list.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Append several roots, keeping their order.
    pub fn roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    // ── Matching ──────────────────────────────────────────────────────────

    /// Replace the keyword list. Keywords are lowercased.
    pub fn keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = KeywordSet::new(words);
        self
    }

    /// Replace the file-name suffix. Matched case-sensitively.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    // ── Output ────────────────────────────────────────────────────────────

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    // ── Parallelism ───────────────────────────────────────────────────────

    /// Root-scan worker pool size.
    ///
    /// Defaults to one worker per root, capped at the logical CPU count.
    pub fn workers(mut self, n: usize) -> Self {
        self.workers = Some(n);
        self
    }

    /// Walker threads used inside each root scan. Defaults to 1.
    pub fn walk_threads(mut self, n: usize) -> Self {
        self.walk.threads = n;
        self
    }

    /// Maximum depth below each root. Unlimited by default.
    pub fn max_depth(mut self, d: usize) -> Self {
        self.walk.max_depth = Some(d);
        self
    }

    pub fn build(self) -> Config {
        let workers = self
            .workers
            .unwrap_or_else(|| self.roots.len().min(num_cpus()))
            .max(1);

        Config {
            roots:   self.roots,
            matcher: ShortcutMatcher::new(self.suffix, self.keywords),
            output:  self.output,
            workers,
            walk:    WalkConfig {
                threads:   self.walk.threads.max(1),
                max_depth: self.walk.max_depth,
            },
        }
    }
}

/// Get the logical CPU count, with a safe fallback.
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
