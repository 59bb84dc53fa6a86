//! Command-line interface definitions for UP News.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Every option has a default, so a bare invocation runs the full registry
//! and writes `data/news.json`.

use crate::outputs::json::DEFAULT_OUTPUT_PATH;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the UP News aggregator.
///
/// # Examples
///
/// ```sh
/// # Default run
/// up_news
///
/// # Custom output path and a trimmed-down feed list
/// up_news -o /srv/dashboard/data/news.json -c ./feeds.yaml
///
/// # Fetch four feeds at a time
/// up_news --concurrency 4
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Path of the JSON file to write
    #[arg(short, long, env = "UP_NEWS_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Optional YAML file overriding the built-in pipeline configuration
    #[arg(short, long, env = "UP_NEWS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of feeds to fetch at once (overrides the config file)
    #[arg(long)]
    pub concurrency: Option<usize>,
}
