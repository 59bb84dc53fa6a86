//! Extractive summaries from feed descriptions.
//!
//! No language model is involved. A summary is the first few sentences of
//! the cleaned description, capped at a word budget. When a description is
//! too terse, the linked article page is fetched and its paragraph text is
//! used instead, provided it is actually longer.
//!
//! Sentence boundaries include the Devanagari danda (`।`) and double danda
//! (`॥`), since many sources publish in Hindi.

use crate::fetch::Fetcher;
use crate::scrapers::article::paragraph_text;
use crate::utils::{clean_text, decode_markup, word_count};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use std::time::Duration;
use tracing::{debug, instrument};

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?\x{0964}\x{0965}]+\s*").unwrap());

/// Marker appended when a summary is cut at the word budget.
pub const ELLIPSIS: &str = "...";

/// Budgets and the enrichment threshold for [`summarize`].
#[derive(Debug, Clone, Copy)]
pub struct SummaryLimits {
    pub max_sentences: usize,
    pub max_words: usize,
    pub min_description_words: usize,
    pub article_timeout: Duration,
}

/// Build a plain-text summary for one item.
///
/// Article fetch failures are swallowed: the cleaned description is used
/// as-is.
#[instrument(level = "debug", skip_all, fields(%link))]
pub async fn summarize(
    description: &str,
    link: &str,
    fetcher: &Fetcher,
    limits: &SummaryLimits,
) -> String {
    let mut cleaned = clean_text(description);

    if word_count(&cleaned) < limits.min_description_words && !link.is_empty() {
        match fetcher.fetch(link, limits.article_timeout).await {
            Ok(bytes) => {
                let article_text = paragraph_text(&decode_markup(&bytes));
                if word_count(&article_text) > word_count(&cleaned) {
                    debug!(
                        description_words = word_count(&cleaned),
                        article_words = word_count(&article_text),
                        "Using article text for summary"
                    );
                    cleaned = article_text;
                }
            }
            Err(e) => debug!(error = %e, "Article fetch failed; keeping description"),
        }
    }

    trim_summary(&cleaned, limits.max_sentences, limits.max_words)
}

/// Keep the first `max_sentences` sentences, then the first `max_words`
/// words, appending [`ELLIPSIS`] if words were dropped.
///
/// Sentence-ending punctuation is consumed by the split, so the result
/// reads as space-joined sentence bodies.
pub fn trim_summary(text: &str, max_sentences: usize, max_words: usize) -> String {
    let joined = SENTENCE_BREAK
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(max_sentences)
        .join(" ");

    let words: Vec<&str> = joined.split_whitespace().collect();
    let mut summary = words.iter().take(max_words).join(" ");
    if words.len() > max_words {
        summary.push_str(ELLIPSIS);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn limits() -> SummaryLimits {
        SummaryLimits {
            max_sentences: 3,
            max_words: 80,
            min_description_words: 30,
            article_timeout: Duration::from_secs(5),
        }
    }

    fn test_fetcher() -> Fetcher {
        Fetcher::new("up-news-test/0.1").expect("failed to build test Fetcher")
    }

    const LONG_ARTICLE: &str = r#"<html><body>
        <p>The district administration in Gorakhpur inaugurated a new bridge over the Rapti river on Monday morning.</p>
        <p>Officials said the bridge will cut travel time for thousands of commuters who cross the river every day for work and school.</p>
        <p>Construction had been delayed for two years because of floods and a shortage of materials.</p>
        <p>This fourth sentence should not appear in the summary.</p>
    </body></html>"#;

    #[test]
    fn test_trim_keeps_first_sentences() {
        let text = "One is here. Two is here! Three is here? Four is here.";
        assert_eq!(trim_summary(text, 3, 80), "One is here Two is here Three is here");
    }

    #[test]
    fn test_trim_splits_on_danda() {
        let text = "पहला वाक्य। दूसरा वाक्य॥ तीसरा वाक्य। चौथा वाक्य।";
        assert_eq!(trim_summary(text, 2, 80), "पहला वाक्य दूसरा वाक्य");
    }

    #[test]
    fn test_trim_discards_empty_fragments() {
        assert_eq!(trim_summary("...Hello!!! ?? World.", 3, 80), "Hello World");
        assert_eq!(trim_summary("", 3, 80), "");
    }

    #[test]
    fn test_trim_word_budget_adds_ellipsis() {
        let text = "one two three four five six";
        assert_eq!(trim_summary(text, 3, 4), "one two three four...");
        assert_eq!(trim_summary(text, 3, 6), "one two three four five six");
    }

    #[tokio::test]
    async fn test_short_description_is_replaced_by_article_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/story"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LONG_ARTICLE))
            .mount(&server)
            .await;

        let link = format!("{}/story", server.uri());
        let summary = summarize("Short text.", &link, &test_fetcher(), &limits()).await;

        assert!(summary.starts_with("The district administration in Gorakhpur"));
        assert!(summary.contains("Construction had been delayed"));
        assert!(!summary.contains("fourth sentence"));
    }

    #[tokio::test]
    async fn test_article_fetch_failure_keeps_description() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let link = format!("{}/gone", server.uri());
        let summary = summarize("<p>Short text.</p>", &link, &test_fetcher(), &limits()).await;
        assert_eq!(summary, "Short text");
    }

    #[tokio::test]
    async fn test_article_with_fewer_words_is_ignored() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>Tiny.</p>"))
            .mount(&server)
            .await;

        let link = format!("{}/tiny", server.uri());
        let summary = summarize("A slightly longer description.", &link, &test_fetcher(), &limits()).await;
        assert_eq!(summary, "A slightly longer description");
    }

    #[tokio::test]
    async fn test_long_description_skips_article_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(LONG_ARTICLE))
            .expect(0)
            .mount(&server)
            .await;

        let description = "word ".repeat(40);
        let link = format!("{}/story", server.uri());
        let summary = summarize(&description, &link, &test_fetcher(), &limits()).await;
        assert_eq!(summary.split_whitespace().count(), 40);
    }

    #[tokio::test]
    async fn test_empty_link_skips_article_fetch() {
        let summary = summarize("Just this.", "", &test_fetcher(), &limits()).await;
        assert_eq!(summary, "Just this");
    }
}
