//! JSON output for the dashboard.
//!
//! The whole story list is written as one pretty-printed array. Non-ASCII
//! text (Hindi headlines and summaries) is written literally, not as
//! `\u` escapes. Any existing file is replaced, never merged.

use crate::error::WriteError;
use crate::models::Story;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Default location of the output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "data/news.json";

/// Serialize `stories` to `path`, creating parent directories as needed.
///
/// # Returns
///
/// The number of stories written.
///
/// # Errors
///
/// Any failure here is fatal for the run: the directory cannot be created,
/// serialization fails, or the file cannot be written.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_stories(stories: &[Story], path: &Path) -> Result<usize, WriteError> {
    let json = serde_json::to_string_pretty(stories)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        info!(dir = %dir.display(), "Ensuring output directory exists");
        if let Err(source) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %source, "Failed to create output dir");
            return Err(WriteError::CreateDir {
                path: dir.to_path_buf(),
                source,
            });
        }
    }

    fs::write(path, json)
        .await
        .map_err(|source| WriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    info!(count = stories.len(), "Wrote stories JSON");

    Ok(stories.len())
}
