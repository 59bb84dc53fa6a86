//! First-match-wins keyword classification.
//!
//! Categories are checked in table order and the first one with any
//! keyword occurring in the text wins. Matching is a case-insensitive,
//! unanchored substring test, so `"sp"` also matches inside `"hospital"`.
//! That looseness is part of how stories have always been bucketed and is
//! kept as-is.

use crate::config::CategoryRule;

pub use crate::registry::UNCATEGORISED;

/// Category name for `text`, or [`UNCATEGORISED`] when nothing matches.
///
/// Keywords are expected in lower case; [`PipelineConfig`] normalizes them
/// when it is built.
///
/// [`PipelineConfig`]: crate::config::PipelineConfig
pub fn classify<'a>(text: &str, categories: &'a [CategoryRule]) -> &'a str {
    let lower = text.to_lowercase();
    categories
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw.as_str())))
        .map(|rule| rule.name.as_str())
        .unwrap_or(UNCATEGORISED)
}
