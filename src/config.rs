//! Pipeline configuration.
//!
//! [`PipelineConfig`] gathers everything the aggregator needs (feed list,
//! category table, district data, timeouts, and summary budgets) into one
//! immutable value built at startup. The default comes from
//! [`crate::registry`]; an optional YAML file may override any subset of
//! fields.

use crate::registry;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;
use std::time::Duration;
use tracing::{info, instrument};

/// One row of the ordered category table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRule {
    /// Label written to `Story::category`.
    pub name: String,
    /// Case-insensitive substrings that select this category.
    pub keywords: Vec<String>,
}

/// Immutable settings for a single pipeline run.
///
/// # YAML
///
/// Every field is optional in the file; missing fields keep their default.
///
/// ```yaml
/// feeds:
///   - https://www.amarujala.com/rss/lucknow.xml
/// feed_timeout_secs: 20
/// max_words: 40
/// district_overrides:
///   https://www.bhaskar.com/rss-v1--category-2052.xml: Uttar Pradesh
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Feed URLs, processed in this order.
    pub feeds: Vec<String>,
    /// Categories in match-priority order.
    pub categories: Vec<CategoryRule>,
    /// Feed URL to district name, consulted before path inference.
    pub district_overrides: BTreeMap<String, String>,
    /// Substrings that disqualify a path segment as a district name.
    pub district_stoplist: Vec<String>,
    /// When false, stories carry no `district` at all.
    pub infer_districts: bool,
    /// Timeout for fetching a feed document.
    pub feed_timeout_secs: u64,
    /// Timeout for fetching an article page during summary enrichment.
    pub article_timeout_secs: u64,
    /// Descriptions shorter than this trigger article-page enrichment.
    pub min_description_words: usize,
    /// Sentences kept in a summary.
    pub max_sentences: usize,
    /// Words kept in a summary before the ellipsis marker is added.
    pub max_words: usize,
    /// Feeds fetched at once. Results are still consumed in registry order.
    pub concurrency: usize,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            feeds: registry::FEEDS.iter().map(|s| s.to_string()).collect(),
            categories: registry::CATEGORY_KEYWORDS
                .iter()
                .map(|(name, keywords)| CategoryRule {
                    name: name.to_string(),
                    keywords: keywords.iter().map(|k| k.to_string()).collect(),
                })
                .collect(),
            district_overrides: registry::DISTRICT_OVERRIDES
                .iter()
                .map(|(url, name)| (url.to_string(), name.to_string()))
                .collect(),
            district_stoplist: registry::DISTRICT_STOPLIST
                .iter()
                .map(|s| s.to_string())
                .collect(),
            infer_districts: true,
            feed_timeout_secs: 30,
            article_timeout_secs: 10,
            min_description_words: 30,
            max_sentences: 3,
            max_words: 80,
            concurrency: 1,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl PipelineConfig {
    /// Parse a YAML document, filling unspecified fields from the defaults.
    /// Category keywords are lower-cased once here so classification can
    /// match them directly.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let mut config: Self = serde_yaml::from_str(yaml)?;
        for rule in &mut config.categories {
            for kw in &mut rule.keywords {
                *kw = kw.to_lowercase();
            }
        }
        Ok(config)
    }

    /// Read and parse a YAML config file.
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub async fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let raw = tokio::fs::read_to_string(path).await?;
        let config = Self::from_yaml_str(&raw)?;
        info!(
            feeds = config.feeds.len(),
            categories = config.categories.len(),
            "Loaded pipeline configuration"
        );
        Ok(config)
    }

    pub fn feed_timeout(&self) -> Duration {
        Duration::from_secs(self.feed_timeout_secs)
    }

    pub fn article_timeout(&self) -> Duration {
        Duration::from_secs(self.article_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_registry() {
        let config = PipelineConfig::default();
        assert_eq!(config.feeds.len(), registry::FEEDS.len());
        assert_eq!(config.categories.len(), 4);
        assert_eq!(config.categories[0].name, "Opposition Activity");
        assert_eq!(config.max_sentences, 3);
        assert_eq!(config.max_words, 80);
        assert_eq!(config.min_description_words, 30);
        assert_eq!(config.concurrency, 1);
        assert!(config.infer_districts);
        assert!(config.article_timeout() < config.feed_timeout());
    }

    #[test]
    fn test_yaml_overrides_subset() {
        let yaml = r#"
feeds:
  - https://example.com/rss/agra.xml
max_words: 40
district_overrides:
  https://example.com/rss/agra.xml: Taj City
"#;
        let config = PipelineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.feeds, vec!["https://example.com/rss/agra.xml"]);
        assert_eq!(config.max_words, 40);
        assert_eq!(
            config.district_overrides.get("https://example.com/rss/agra.xml"),
            Some(&"Taj City".to_string())
        );
        // untouched fields keep their defaults
        assert_eq!(config.max_sentences, 3);
        assert_eq!(config.categories.len(), 4);
    }

    #[test]
    fn test_yaml_keywords_are_lowercased() {
        let yaml = r#"
categories:
  - name: Weather
    keywords: [Rain, HEAT, बारिश]
"#;
        let config = PipelineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.categories[0].keywords, ["rain", "heat", "बारिश"]);
        assert_eq!(config.categories[0].name, "Weather");
    }

    #[test]
    fn test_yaml_category_table_keeps_order() {
        let yaml = r#"
categories:
  - name: Weather
    keywords: [rain, heat]
  - name: Sports
    keywords: [cricket]
"#;
        let config = PipelineConfig::from_yaml_str(yaml).unwrap();
        let names: Vec<&str> = config.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Weather", "Sports"]);
    }

    #[test]
    fn test_yaml_rejects_wrong_types() {
        assert!(PipelineConfig::from_yaml_str("max_words: lots").is_err());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "infer_districts: false\nconcurrency: 4\n").unwrap();
        let config = PipelineConfig::load(&path).await.unwrap();
        assert!(!config.infer_districts);
        assert_eq!(config.concurrency, 4);
    }
}
