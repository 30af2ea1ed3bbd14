//! Entry selection: include/exclude decisions ahead of materialization.

use thiserror::Error;

use crate::reader::EntryMeta;

/// Failure raised by a selector while deciding inclusion.
///
/// The engine wraps this with the offending entry name before surfacing it.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct FilterError(pub String);

/// Decides whether an entry is materialized.
///
/// Selectors see the entry name and a read-only metadata view; they must not
/// consume the entry's content stream.
pub trait EntrySelector {
    /// Returns `true` when the entry should be extracted.
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`] when the decision itself fails (for
    /// example, an invalid filter expression).
    fn is_selected(&self, name: &str, meta: &EntryMeta) -> Result<bool, FilterError>;
}

/// Selector that includes every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectAll;

impl EntrySelector for SelectAll {
    fn is_selected(&self, _name: &str, _meta: &EntryMeta) -> Result<bool, FilterError> {
        Ok(true)
    }
}

/// Include/exclude selector over entry names.
///
/// Patterns match either the whole entry name or any `/`-separated
/// component, with glob-lite syntax: exact, `prefix*`, and `*suffix`.
/// An empty include list admits everything; excludes always win.
///
/// # Examples
///
/// ```
/// use unarc_zip::select::NameFilter;
///
/// let filter = NameFilter::new(vec!["lib/*".to_string()], vec!["*.tmp".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameFilter {
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl NameFilter {
    /// Creates a filter from include and exclude pattern lists.
    #[must_use]
    pub fn new(includes: Vec<String>, excludes: Vec<String>) -> Self {
        Self { includes, excludes }
    }

    /// Creates a filter that excludes the given patterns only.
    #[must_use]
    pub fn excluding(excludes: Vec<String>) -> Self {
        Self {
            includes: Vec::new(),
            excludes,
        }
    }

    fn matches_any(name: &str, patterns: &[String]) -> bool {
        patterns.iter().any(|pattern| {
            pattern_matches(name, pattern)
                || name
                    .split('/')
                    .filter(|component| !component.is_empty())
                    .any(|component| pattern_matches(component, pattern))
        })
    }
}

impl EntrySelector for NameFilter {
    fn is_selected(&self, name: &str, _meta: &EntryMeta) -> Result<bool, FilterError> {
        if Self::matches_any(name, &self.excludes) {
            return Ok(false);
        }
        if self.includes.is_empty() {
            return Ok(true);
        }
        Ok(Self::matches_any(name, &self.includes))
    }
}

/// Matches a string against a glob-lite pattern.
fn pattern_matches(s: &str, pattern: &str) -> bool {
    if pattern == s {
        return true;
    }

    if let Some(prefix) = pattern.strip_suffix('*') {
        return s.starts_with(prefix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        return s.ends_with(suffix);
    }

    false
}
