//! Error types for each stage of the pipeline.
//!
//! Only [`WriteError`] is fatal. Every other error is caught at the feed or
//! item level, logged, and turned into "no additional data".

use std::path::PathBuf;
use thiserror::Error;

/// A single HTTP GET that did not produce a usable body.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection failure, timeout, or an unreadable body.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status outside 200-299.
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },
}

/// Why a feed contributed zero stories.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// An `item` element whose inner markup could not be read.
#[derive(Debug, Error)]
#[error("malformed item at byte {offset}: {reason}")]
pub struct MalformedItemError {
    pub offset: usize,
    pub reason: String,
}

/// Failure to deliver the output file. Always aborts the run.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize stories: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
