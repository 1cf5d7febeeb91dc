use crate::entry::Entry;

/// Determines whether a scanned entry is a match.
///
/// The shipped predicate is [`ShortcutMatcher`](crate::ShortcutMatcher).
/// Implement this to drive the same walk engine with other logic.
///
/// # Thread Safety
///
/// `Send + Sync` are required. The walker calls the matcher concurrently
/// from its worker threads.
///
/// # Example
///
/// ```rust
/// use lnkscan::{Entry, Matcher};
///
/// struct ExtensionMatcher(String);
///
/// impl Matcher for ExtensionMatcher {
///     fn is_match(&self, entry: &Entry) -> bool {
///         entry.path
///             .extension()
///             .map(|e| e.eq_ignore_ascii_case(&self.0))
///             .unwrap_or(false)
///     }
/// }
/// ```
pub trait Matcher: Send + Sync {
    /// Returns `true` if this entry should be included in results.
    fn is_match(&self, entry: &Entry) -> bool;
}
