//! Utility functions for text normalization, logging, and file system checks.
//!
//! This module provides helper functions used throughout the application:
//! - Charset detection and decoding for fetched markup
//! - HTML stripping and whitespace collapsing for feed text
//! - Word counting and Python-style title-casing for labels
//! - String truncation for log lines
//! - File system validation for the output directory

use encoding_rs::{Encoding, UTF_8};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use std::error::Error;
use std::fs as stdfs;
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, instrument};

static DECLARED_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:encoding|charset)\s*=\s*["']?([a-z0-9._:-]+)"#).unwrap()
});

/// How far into a document to look for a declared charset.
const SNIFF_LEN: usize = 1024;

/// Decode fetched markup to text.
///
/// A byte-order mark wins, then an XML `encoding=` or HTML `charset=`
/// declared near the top of the document, then UTF-8. Invalid sequences
/// become U+FFFD rather than failing the feed.
pub fn decode_markup(bytes: &[u8]) -> String {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LEN)]);
    let declared = DECLARED_CHARSET
        .captures(&head)
        .and_then(|c| Encoding::for_label(c[1].as_bytes()))
        .map(Encoding::output_encoding)
        .unwrap_or(UTF_8);

    let (text, used, had_errors) = declared.decode(bytes);
    if had_errors {
        debug!(encoding = used.name(), "Replaced undecodable bytes");
    }
    text.into_owned()
}

/// Strip HTML tags and collapse every whitespace run to a single space.
///
/// Text nodes are joined with a space so adjacent block elements do not
/// fuse their words together. Entities are decoded by the HTML parser.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_text("<p>Hello</p><p>world</p>"), "Hello world");
/// assert_eq!(clean_text("  a \n\t b "), "a b");
/// ```
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let fragment = Html::parse_fragment(text);
    let joined = fragment.root_element().text().collect::<Vec<_>>().join(" ");
    collapse_whitespace(&joined)
}

/// Collapse every whitespace run to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Number of whitespace-separated words in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Title-case a label the way Python's `str.title()` does.
///
/// A letter is upper-cased when it follows a non-letter (or starts the
/// string) and lower-cased otherwise.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(title_case("sant kabir nagar"), "Sant Kabir Nagar");
/// assert_eq!(title_case("LIVEHINDUSTAN"), "Livehindustan");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(ch);
            prev_is_letter = false;
        }
    }
    out
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to at most `max` bytes (backing off to the
/// nearest character boundary) with an ellipsis and byte count appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log("a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory if it doesn't exist, then performs
/// a write test by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_dir(path: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    // Try a small sync write using std fs (simpler error surface)
    let probe_path = path.join("..__probe_write__");
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_markup_defaults_to_utf8() {
        let xml = "<rss><title>गोरखपुर</title></rss>";
        assert_eq!(decode_markup(xml.as_bytes()), xml);
    }

    #[test]
    fn test_decode_markup_honours_xml_declaration() {
        let bytes = b"<?xml version=\"1.0\" encoding=\"windows-1252\"?><t>caf\xe9 \x93quoted\x94</t>";
        let text = decode_markup(bytes);
        assert!(text.contains("caf\u{e9}"), "got {text}");
        assert!(text.contains("\u{201c}quoted\u{201d}"), "got {text}");
    }

    #[test]
    fn test_decode_markup_honours_html_meta_charset() {
        let bytes = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=ISO-8859-1\"></head><body><p>na\xefve</p></body></html>";
        assert!(decode_markup(bytes).contains("na\u{ef}ve"));
    }

    #[test]
    fn test_decode_markup_bom_beats_declaration() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("<?xml version=\"1.0\" encoding=\"windows-1252\"?><t>é</t>".as_bytes());
        let text = decode_markup(&bytes);
        assert!(text.starts_with("<?xml"));
        assert!(text.contains("<t>é</t>"));
    }

    #[test]
    fn test_decode_markup_replaces_invalid_utf8() {
        assert_eq!(decode_markup(b"ok \xff ok"), "ok \u{fffd} ok");
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        let s = "Hello, world!";
        assert_eq!(truncate_for_log(s, 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundary() {
        // Each Devanagari letter is three bytes in UTF-8.
        let s = "योगी".repeat(10);
        let result = truncate_for_log(&s, 4);
        assert!(result.starts_with("य"));
        assert!(result.contains("bytes)"));
    }

    #[test]
    fn test_clean_text_strips_tags() {
        assert_eq!(
            clean_text("<p>Hello <b>bold</b></p><p>world</p>"),
            "Hello bold world"
        );
    }

    #[test]
    fn test_clean_text_decodes_entities_and_collapses() {
        assert_eq!(clean_text("  Tom &amp;  Jerry \n\t here "), "Tom & Jerry here");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn test_clean_text_keeps_hindi() {
        assert_eq!(clean_text("<div>योगी सरकार</div>"), "योगी सरकार");
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("  one two\nthree  "), 3);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("gorakhpur"), "Gorakhpur");
        assert_eq!(title_case("sant kabir nagar"), "Sant Kabir Nagar");
        assert_eq!(title_case("LIVEHINDUSTAN"), "Livehindustan");
        assert_eq!(title_case("kanpur rural2x"), "Kanpur Rural2X");
        assert_eq!(title_case(""), "");
    }

    #[tokio::test]
    async fn test_ensure_writable_dir_creates_nested() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        ensure_writable_dir(&nested).await.unwrap();
        assert!(nested.is_dir());
        assert!(!nested.join("..__probe_write__").exists());
    }
}
