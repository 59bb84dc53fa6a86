//! Output generation.
//!
//! # Submodules
//!
//! - [`json`]: Writes the aggregated story list for the dashboard front-end
//!
//! # Output Structure
//!
//! ```text
//! data/
//! └── news.json   # array of stories, newest first, replaced every run
//! ```

pub mod json;
