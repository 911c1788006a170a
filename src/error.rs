// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Why a single source could not be retrieved.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    /// Recorded per source and skipped; a run never returns this.
    #[error("source '{label}' unavailable: {source}")]
    DocumentUnavailable {
        label: String,
        #[source]
        source: FetchError,
    },

    #[error("could not write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("unknown source label: {0}")]
    UnknownSource(String),

    #[error("duplicate source label: {0}")]
    DuplicateSource(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
