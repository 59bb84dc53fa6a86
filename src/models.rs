//! Data models for feed items and the stories written to disk.
//!
//! This module defines the two records that flow through the pipeline:
//! - [`RawItem`]: The text fields pulled out of a single feed `item`
//! - [`Story`]: The normalized record serialized into `news.json`
//!
//! The serialized field names match the keys the dashboard front-end reads,
//! hence the `pubDate` rename.

use serde::{Deserialize, Serialize};

/// The plain-text fields of one `item` element, before any inference.
///
/// Missing child elements are represented by empty strings rather than
/// errors. `link` has already been through link repair when this value is
/// produced by [`crate::scrapers::rss::parse_items`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    /// The item title with surrounding whitespace trimmed.
    pub title: String,
    /// The article URL, possibly empty if no URL could be found.
    pub link: String,
    /// The raw description, which may still contain HTML markup.
    pub description: String,
    /// The publication date exactly as the feed wrote it.
    pub pub_date: String,
}

/// A normalized news record.
///
/// Each run builds these fresh from live fetches; the output file is
/// replaced wholesale rather than merged.
///
/// # Invariants
///
/// - `pub_date` is always a fixed-width ISO-8601 UTC timestamp
/// - `category` is always one of the configured category names or
///   [`crate::classify::UNCATEGORISED`]
/// - `link` is unique within one output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Plain-text headline.
    pub title: String,
    /// Canonical article URL, used as the deduplication key.
    pub link: String,
    /// Publication time as `YYYY-MM-DDTHH:MM:SS+00:00`.
    #[serde(rename = "pubDate")]
    pub pub_date: String,
    /// Sentence- and word-bounded plain-text summary.
    pub summary: String,
    /// Topical category assigned by keyword matching.
    pub category: String,
    /// Human-readable outlet name derived from the feed domain.
    pub source: String,
    /// Locality label, or `None` when district inference is disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}
