use crate::entry::{Entry, EntryKind};
use crate::traits::Matcher;

/// An immutable set of lowercase keywords.
///
/// A name hits the set when any keyword is a substring of the lowercased
/// name. Construction lowercases and deduplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: Vec<String>,
}

impl KeywordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        words.sort();
        words.dedup();
        Self { words }
    }

    /// `true` if `name`, lowercased, contains any keyword.
    pub fn hits(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.words.iter().any(|w| lower.contains(w.as_str()))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Matches non-directory entries whose name ends with `suffix`
/// (case-sensitive) and contains one of `keywords` (case-insensitive).
#[derive(Debug, Clone)]
pub struct ShortcutMatcher {
    suffix:   String,
    keywords: KeywordSet,
}

impl ShortcutMatcher {
    pub fn new(suffix: impl Into<String>, keywords: KeywordSet) -> Self {
        Self {
            suffix: suffix.into(),
            keywords,
        }
    }

    /// The name-only half of the predicate.
    pub fn matches_name(&self, name: &str) -> bool {
        name.ends_with(&self.suffix) && self.keywords.hits(name)
    }
}

impl Matcher for ShortcutMatcher {
    fn is_match(&self, entry: &Entry) -> bool {
        entry.kind != EntryKind::Dir && self.matches_name(&entry.name)
    }
}
