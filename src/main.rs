//! # UP News
//!
//! A batch aggregator for Uttar Pradesh regional news. It pulls a fixed
//! registry of RSS feeds, normalizes every item into a story record, tags
//! it with a topical category and a district, and writes one sorted JSON
//! file for the dashboard front-end.
//!
//! ## Usage
//!
//! ```sh
//! up_news -o ./data/news.json
//! ```
//!
//! ## Architecture
//!
//! The application follows a one-way pipeline:
//! 1. **Fetching**: GET each feed in registry order; failures are logged and skipped
//! 2. **Extraction**: Pull `title`/`link`/`description`/`pubDate` out of every `item`
//! 3. **Enrichment**: Summarize (fetching the article when the description is terse),
//!    classify by keyword, infer source and district, normalize the date
//! 4. **Aggregation**: Deduplicate by link (first wins) and sort newest first
//! 5. **Output**: Replace the JSON file

use clap::Parser;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod classify;
mod cli;
mod config;
mod dates;
mod error;
mod fetch;
mod infer;
mod models;
mod outputs;
mod pipeline;
mod registry;
mod scrapers;
mod summarize;
mod utils;

use cli::Cli;
use config::PipelineConfig;
use outputs::json;
use pipeline::Pipeline;
use utils::ensure_writable_dir;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("up_news starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(output = %args.output.display(), config = ?args.config, "Parsed CLI arguments");

    // ---- Load config ----
    let mut config = match &args.config {
        Some(path) => PipelineConfig::load(path).await?,
        None => PipelineConfig::default(),
    };
    if let Some(n) = args.concurrency {
        config.concurrency = n;
    }
    info!(
        feeds = config.feeds.len(),
        concurrency = config.concurrency,
        "Pipeline configured"
    );

    // Early check: ensure the output dir is writable before spending minutes fetching
    let output_dir = args
        .output
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    if let Err(e) = ensure_writable_dir(output_dir).await {
        error!(
            path = %output_dir.display(),
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Fetch, enrich, aggregate ----
    let report = Pipeline::new(&config)?.run().await;

    // ---- Output ----
    let written = match json::write_stories(&report.stories, &args.output).await {
        Ok(n) => n,
        Err(e) => {
            error!(error = %e, "Failed to write stories JSON");
            return Err(e.into());
        }
    };
    println!("Wrote {} stories to {}", written, args.output.display());

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        stories = written,
        feeds_ok = report.feeds_ok,
        feeds_failed = report.feeds_failed,
        dropped = report.dropped,
        "Execution complete"
    );

    Ok(())
}
