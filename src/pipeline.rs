//! Feed aggregation: fetch, extract, enrich, deduplicate, sort.
//!
//! Each feed becomes a `Result<Vec<Story>, FeedError>`; the aggregation
//! loop logs the error branch and moves on, so no single source can take
//! the run down. Feeds may be fetched concurrently, but results are always
//! consumed in registry order, so deduplication (first link wins) and the
//! final sort do not depend on network timing.

use crate::classify::classify;
use crate::config::PipelineConfig;
use crate::dates::parse_pubdate_or;
use crate::error::{FeedError, FetchError};
use crate::fetch::Fetcher;
use crate::infer::{derive_district, derive_source, extract_domain};
use crate::models::{RawItem, Story};
use crate::scrapers::rss::parse_items;
use crate::summarize::{SummaryLimits, summarize};
use crate::utils::{clean_text, decode_markup, truncate_for_log};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Outcome of a full run.
#[derive(Debug)]
pub struct RunReport {
    /// Deduplicated stories, newest first.
    pub stories: Vec<Story>,
    /// Feeds fetched successfully (possibly with zero items).
    pub feeds_ok: usize,
    /// Feeds that failed to fetch.
    pub feeds_failed: usize,
    /// Stories dropped for a repeated or empty link.
    pub dropped: usize,
}

/// One configured run of the pipeline.
pub struct Pipeline<'a> {
    config: &'a PipelineConfig,
    fetcher: Fetcher,
    limits: SummaryLimits,
    now: DateTime<Utc>,
}

impl<'a> Pipeline<'a> {
    /// Prepare a run. The current time is captured once and used for every
    /// story whose date cannot be parsed.
    pub fn new(config: &'a PipelineConfig) -> Result<Self, FetchError> {
        Ok(Self {
            config,
            fetcher: Fetcher::new(&config.user_agent)?,
            limits: SummaryLimits {
                max_sentences: config.max_sentences,
                max_words: config.max_words,
                min_description_words: config.min_description_words,
                article_timeout: config.article_timeout(),
            },
            now: Utc::now(),
        })
    }

    /// Override the fallback timestamp used for unparseable dates.
    #[cfg(test)]
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Process every configured feed and return the aggregated stories.
    #[instrument(level = "info", skip_all, fields(feeds = self.config.feeds.len()))]
    pub async fn run(&self) -> RunReport {
        let concurrency = self.config.concurrency.max(1);
        info!(concurrency, "Starting feed aggregation");

        let results: Vec<(&String, Result<Vec<Story>, FeedError>)> =
            stream::iter(self.config.feeds.iter())
                .map(|url| async move { (url, self.process_feed(url).await) })
                .buffered(concurrency)
                .collect()
                .await;

        let mut feeds_ok = 0;
        let mut feeds_failed = 0;
        let mut per_feed = Vec::with_capacity(results.len());
        for (url, result) in results {
            match result {
                Ok(stories) => {
                    feeds_ok += 1;
                    per_feed.push(stories);
                }
                Err(e) => {
                    feeds_failed += 1;
                    warn!(feed = %url, error = %e, "Feed failed; skipping");
                }
            }
        }

        let total: usize = per_feed.iter().map(Vec::len).sum();
        let stories = aggregate(per_feed);
        let dropped = total - stories.len();

        info!(
            stories = stories.len(),
            dropped,
            feeds_ok,
            feeds_failed,
            "Completed feed aggregation"
        );
        RunReport {
            stories,
            feeds_ok,
            feeds_failed,
            dropped,
        }
    }

    /// Fetch one feed and turn each of its items into a story.
    #[instrument(level = "info", skip(self))]
    pub async fn process_feed(&self, feed_url: &str) -> Result<Vec<Story>, FeedError> {
        let bytes = self
            .fetcher
            .fetch(feed_url, self.config.feed_timeout())
            .await?;
        let body = decode_markup(&bytes);

        let items = parse_items(&body);
        if items.is_empty() {
            debug!(preview = %truncate_for_log(&body, 200), "Feed contained no items");
        }

        let source = derive_source(&extract_domain(feed_url));
        let district = self.config.infer_districts.then(|| {
            derive_district(
                feed_url,
                &self.config.district_overrides,
                &self.config.district_stoplist,
            )
        });

        let mut stories = Vec::with_capacity(items.len());
        for item in items {
            stories.push(self.build_story(item, &source, district.as_deref()).await);
        }

        info!(count = stories.len(), %source, district = ?district, "Parsed feed");
        Ok(stories)
    }

    async fn build_story(&self, item: RawItem, source: &str, district: Option<&str>) -> Story {
        let summary = summarize(&item.description, &item.link, &self.fetcher, &self.limits).await;
        let category = classify(
            &format!("{} {} {}", item.title, item.description, summary),
            &self.config.categories,
        );
        Story {
            title: clean_text(&item.title),
            pub_date: parse_pubdate_or(&item.pub_date, self.now),
            category: category.to_string(),
            summary,
            link: item.link,
            source: source.to_string(),
            district: district.map(str::to_string),
        }
    }
}

/// Merge per-feed story lists in order, keeping the first story for each
/// non-empty link, then sort newest first.
///
/// The sort is stable, so stories with equal timestamps keep their
/// registry order.
pub fn aggregate(per_feed: impl IntoIterator<Item = Vec<Story>>) -> Vec<Story> {
    let mut seen_links: HashSet<String> = HashSet::new();
    let mut aggregated = Vec::new();

    for story in per_feed.into_iter().flatten() {
        if story.link.is_empty() {
            debug!(title = %story.title, "Dropping story without link");
            continue;
        }
        if seen_links.insert(story.link.clone()) {
            aggregated.push(story);
        }
    }

    aggregated.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
    aggregated
}
