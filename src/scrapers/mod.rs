//! Markup scrapers for feed documents and article pages.
//!
//! Both scrapers are pure functions over already-fetched text; network
//! access lives in [`crate::fetch`].
//!
//! | Input | Module | Parser | Output |
//! |-------|--------|--------|--------|
//! | RSS 2.0 feed | [`rss`] | `quick-xml` | one `RawItem` per `item` element |
//! | Article HTML | [`article`] | `scraper` | joined paragraph text |

pub mod article;
pub mod rss;
