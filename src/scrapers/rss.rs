//! RSS `item` discovery and per-item field extraction.
//!
//! Feed documents are scanned with a lenient `quick-xml` reader: end-tag
//! names are not checked, and a syntax error skips ahead to the next
//! `<item` in the raw text, or ends the scan when there is none. HTML pages
//! or Atom documents contain no `item` elements and therefore yield nothing.
//!
//! Each `item` is located by its byte span, then its inner markup is read
//! a second time for `title`, `link`, `description` and `pubDate`. The same
//! raw span feeds link repair when the `link` element is missing or does
//! not hold a URL.

use crate::error::MalformedItemError;
use crate::models::RawItem;
use once_cell::sync::Lazy;
use quick_xml::Reader;
use quick_xml::events::{BytesText, Event};
use regex::Regex;
use tracing::{debug, warn};

static EMBEDDED_URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

/// Child elements read from every item.
const FIELDS: [&str; 4] = ["title", "link", "description", "pubDate"];

/// Parse every `item` element in `xml`.
///
/// A markup error inside an item skips that item; scanning resumes at the
/// next `<item` in the raw text. An error with no later item ends the scan
/// and keeps what was already read.
pub fn parse_items(xml: &str) -> Vec<RawItem> {
    let mut items = Vec::new();
    let mut from = 0;
    while let Some(resume) = scan_from(xml, from, &mut items) {
        from = resume;
    }
    items
}

/// Scan `xml[base..]` for items. Returns the byte offset to resume at after
/// a markup error, or `None` once the document is exhausted.
fn scan_from(xml: &str, base: usize, items: &mut Vec<RawItem>) -> Option<usize> {
    let mut reader = Reader::from_str(&xml[base..]);
    reader.config_mut().check_end_names = false;
    let absolute = |pos: u64| base + usize::try_from(pos).unwrap_or(usize::MAX - base);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"item" => {
                let body_start = absolute(reader.buffer_position());
                let span = match reader.read_to_end(e.name()) {
                    Ok(span) => span,
                    Err(err) => {
                        let skipped = MalformedItemError {
                            offset: body_start,
                            reason: err.to_string(),
                        };
                        warn!(error = %skipped, "Skipping unreadable item");
                        return next_item(xml, body_start);
                    }
                };
                let (start, end) = (absolute(span.start), absolute(span.end));
                if start > end || end > xml.len() {
                    return None;
                }
                match extract_item(&xml[start..end], start) {
                    Ok(item) => items.push(item),
                    Err(err) => debug!(error = %err, "Skipping malformed item"),
                }
            }
            Ok(Event::Eof) => return None,
            Err(err) => {
                debug!(
                    error = %err,
                    parsed = items.len(),
                    "Markup error outside an item"
                );
                let at = absolute(reader.buffer_position()).max(base + 1);
                return next_item(xml, at);
            }
            _ => {}
        }
    }
}

/// Offset of the next `<item` at or after `from`.
fn next_item(xml: &str, from: usize) -> Option<usize> {
    xml.get(from..)?.find("<item").map(|i| from + i)
}

/// Read the known fields out of one item's inner markup.
///
/// Only the first occurrence of each field is kept, and nested markup
/// inside a field contributes its text. Missing fields stay empty.
pub fn extract_item(inner: &str, offset: usize) -> Result<RawItem, MalformedItemError> {
    let mut reader = Reader::from_str(inner);
    reader.config_mut().check_end_names = false;

    let mut fields: [Option<String>; 4] = Default::default();
    // (field index, nesting depth) while inside a field element
    let mut current: Option<(usize, usize)> = None;

    loop {
        let event = reader.read_event().map_err(|e| MalformedItemError {
            offset,
            reason: e.to_string(),
        })?;
        match event {
            Event::Start(e) => match current.as_mut() {
                Some((_, depth)) => *depth += 1,
                None => {
                    let name = e.local_name();
                    if let Some(idx) = FIELDS.iter().position(|f| f.as_bytes() == name.as_ref()) {
                        if fields[idx].is_none() {
                            fields[idx] = Some(String::new());
                            current = Some((idx, 0));
                        }
                    }
                }
            },
            Event::End(_) => {
                if let Some((_, depth)) = current.as_mut() {
                    if *depth == 0 {
                        current = None;
                    } else {
                        *depth -= 1;
                    }
                }
            }
            Event::Empty(e) => {
                if current.is_none() {
                    let name = e.local_name();
                    if let Some(idx) = FIELDS.iter().position(|f| f.as_bytes() == name.as_ref()) {
                        fields[idx].get_or_insert_with(String::new);
                    }
                }
            }
            Event::Text(t) => {
                if let Some((idx, _)) = current {
                    push_text(&mut fields[idx], &text_of(&t));
                }
            }
            Event::CData(c) => {
                if let Some((idx, _)) = current {
                    push_text(&mut fields[idx], &String::from_utf8_lossy(c.as_ref()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    let [title, link, description, pub_date] = fields.map(|f| f.unwrap_or_default().trim().to_string());
    let link = repair_link(link, inner);

    Ok(RawItem {
        title,
        link,
        description,
        pub_date,
    })
}

/// Keep `link` if it already looks like a URL; otherwise take the first
/// `http(s)://` run found anywhere in the item's raw markup.
///
/// Some feeds put the article URL in `guid` or inline in the description
/// instead of `link`. When nothing matches, the original value is kept.
///
/// The match runs over raw markup and stops only at whitespace, so a URL
/// directly followed by its closing tag keeps that tag (`.../x</guid>`).
pub fn repair_link(link: String, raw_item: &str) -> String {
    if link.starts_with("http") {
        return link;
    }
    match EMBEDDED_URL.find(raw_item) {
        Some(m) => {
            debug!(original = %link, repaired = m.as_str(), "Repaired item link");
            m.as_str().to_string()
        }
        None => link,
    }
}

fn text_of(t: &BytesText<'_>) -> String {
    match t.unescape() {
        Ok(s) => s.into_owned(),
        // unknown entities such as &nbsp; fail to unescape; keep the raw text
        Err(_) => String::from_utf8_lossy(t.as_ref()).into_owned(),
    }
}

fn push_text(slot: &mut Option<String>, text: &str) {
    if let Some(buf) = slot {
        buf.push_str(text);
    }
}
