//! Article page scraping for summary enrichment.
//!
//! News sites differ wildly in layout, so no site-specific selectors are
//! used: the text of every `<p>` element on the page is taken in document
//! order.

use crate::utils::clean_text;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Join the text of all paragraphs in `html`, tags stripped and whitespace
/// collapsed.
pub fn paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let joined = document
        .select(&PARAGRAPH)
        .map(|p| p.text().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join(" ");
    let text = clean_text(&joined);
    debug!(chars = text.len(), "Extracted article paragraphs");
    text
}
