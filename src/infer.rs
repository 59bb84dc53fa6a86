//! Source and district inference from URLs.
//!
//! Feeds carry no reliable outlet or locality metadata, so both labels are
//! derived from the feed URL itself:
//!
//! - `source` comes from the registrable part of the host
//!   (`api.livehindustan.com` -> `Livehindustan`)
//! - `district` comes from the last meaningful path segment
//!   (`/rss/gorakhpur.xml` -> `Gorakhpur`)

use crate::registry::GENERAL_DISTRICT;
use crate::utils::title_case;
use std::collections::BTreeMap;
use url::Url;

/// The host of `url`, or an empty string if it cannot be parsed.
pub fn extract_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// Human-readable outlet label for a host.
///
/// Strips a leading `www.`, takes the second-to-last dot-separated label
/// (or the only label), turns hyphens into spaces and title-cases it.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(derive_source("www.amarujala.com"), "Amarujala");
/// assert_eq!(derive_source(""), "Unknown");
/// ```
pub fn derive_source(host: &str) -> String {
    if host.is_empty() {
        return "Unknown".to_string();
    }
    let host = host.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    let labels: Vec<&str> = host.split('.').collect();
    let label = if labels.len() >= 2 {
        labels[labels.len() - 2]
    } else {
        labels[0]
    };
    title_case(&label.replace('-', " "))
}

/// Locality label for a feed URL.
///
/// An entry in `overrides` wins outright. Otherwise path segments are
/// scanned from the end; each has its file extension and any `-news` slug
/// suffix removed, and is skipped when empty, purely numeric, or when it
/// contains a `stoplist` substring. The first survivor becomes the district.
/// With no survivor the result is [`GENERAL_DISTRICT`].
pub fn derive_district(
    url: &str,
    overrides: &BTreeMap<String, String>,
    stoplist: &[String],
) -> String {
    if let Some(name) = overrides.get(url) {
        return name.clone();
    }

    let Ok(parsed) = Url::parse(url) else {
        return GENERAL_DISTRICT.to_string();
    };

    parsed
        .path()
        .split('/')
        .filter(|seg| !seg.is_empty())
        .rev()
        .map(district_slug)
        .find(|slug| is_district_slug(slug, stoplist))
        .map(|slug| title_case(&slug.replace(['-', '_'], " ")))
        .unwrap_or_else(|| GENERAL_DISTRICT.to_string())
}

fn district_slug(segment: &str) -> String {
    let segment = segment.to_lowercase();
    let stem = match segment.rsplit_once('.') {
        Some((stem, _ext)) => stem,
        None => segment.as_str(),
    };
    stem.strip_suffix("-news").unwrap_or(stem).to_string()
}

fn is_district_slug(slug: &str, stoplist: &[String]) -> bool {
    if slug.is_empty() || slug.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    !stoplist.iter().any(|stop| slug.contains(stop.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::DISTRICT_STOPLIST;

    fn stoplist() -> Vec<String> {
        DISTRICT_STOPLIST.iter().map(|s| s.to_string()).collect()
    }

    fn district(url: &str) -> String {
        derive_district(url, &BTreeMap::new(), &stoplist())
    }

    #[test]
    fn test_extract_domain() {
        assert_eq!(
            extract_domain("https://www.amarujala.com/rss/gorakhpur.xml"),
            "www.amarujala.com"
        );
        assert_eq!(extract_domain("not a url"), "");
        assert_eq!(extract_domain(""), "");
    }

    #[test]
    fn test_derive_source() {
        assert_eq!(derive_source("www.amarujala.com"), "Amarujala");
        assert_eq!(derive_source("api.livehindustan.com"), "Livehindustan");
        assert_eq!(derive_source("cms.patrika.com"), "Patrika");
        assert_eq!(derive_source("www.dainik-jagran.in"), "Dainik Jagran");
        assert_eq!(derive_source("localhost"), "Localhost");
        assert_eq!(derive_source(""), "Unknown");
    }

    #[test]
    fn test_district_from_amarujala_file_name() {
        assert_eq!(district("https://www.amarujala.com/rss/gorakhpur.xml"), "Gorakhpur");
        assert_eq!(
            district("https://www.amarujala.com/rss/sant-kabir-nagar.xml"),
            "Sant Kabir Nagar"
        );
    }

    #[test]
    fn test_district_all_segments_stoplisted() {
        assert_eq!(district("https://x.com/uttar-pradesh/news"), "General");
        assert_eq!(district("https://www.amarujala.com/rss/uttar-pradesh.xml"), "General");
        assert_eq!(district("https://www.bhaskar.com/rss-v1--category-2052.xml"), "General");
    }

    #[test]
    fn test_district_from_livehindustan_path() {
        assert_eq!(
            district("https://api.livehindustan.com/feeds/rss/uttar-pradesh/lucknow/rssfeed.xml"),
            "Lucknow"
        );
        assert_eq!(
            district("https://api.livehindustan.com/feeds/rss/uttar-pradesh/rssfeed.xml"),
            "General"
        );
    }

    #[test]
    fn test_district_from_patrika_slug() {
        assert_eq!(
            district("https://cms.patrika.com/googlefeed/blog/location/lakhimpur-kheri-news"),
            "Lakhimpur Kheri"
        );
        assert_eq!(
            district("https://cms.patrika.com/googlefeed/blog/location/uttar-pradesh-news"),
            "General"
        );
    }

    #[test]
    fn test_district_skips_numeric_segments() {
        assert_eq!(district("https://example.com/agra/12345"), "Agra");
        assert_eq!(district("https://example.com/kanpur_dehat/2024.xml"), "Kanpur Dehat");
    }

    #[test]
    fn test_district_override_wins() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "https://www.bhaskar.com/rss-v1--category-2052.xml".to_string(),
            "Uttar Pradesh".to_string(),
        );
        assert_eq!(
            derive_district(
                "https://www.bhaskar.com/rss-v1--category-2052.xml",
                &overrides,
                &stoplist()
            ),
            "Uttar Pradesh"
        );
    }

    #[test]
    fn test_district_unparseable_url() {
        assert_eq!(district("::not-a-url::"), "General");
    }

    #[test]
    fn test_every_registry_district_feed_resolves() {
        // District-level feeds all carry a locality; only state-wide feeds fall back.
        let general = crate::registry::FEEDS
            .iter()
            .filter(|url| district(url) == "General")
            .count();
        assert_eq!(general, 6);
    }
}
