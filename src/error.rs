// src/error.rs
//! Error types for the scrape pipeline.
//!
//! Every variant is fatal to a run. Cells that simply carry no usable data are
//! not errors; the extractor skips them.

use std::io;
use thiserror::Error;

/// Result type alias for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The page could not be fetched.
    #[error("fetch failed for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The last-match selection for a landmark came back empty.
    #[error("no landmark matches `{selector}` (page structure changed?)")]
    MissingLandmark { selector: String },

    /// The element located from a landmark is not a `<table>`.
    #[error(
        "landmark `{selector}` resolved to <{found}>, expected <table> (page structure changed?)"
    )]
    NotATable { selector: String, found: String },

    /// A split table held an entry that neither side of the split claims.
    #[error("{category}: {name:?} fits neither side of the split (page structure changed?)")]
    Unpartitioned { category: String, name: String },

    /// A landmark produced a selector the parser rejects.
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    /// Writing the generated literal failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The binary takes no arguments.
    #[error("{0}")]
    Usage(String),
}
