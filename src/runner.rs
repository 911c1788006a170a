// src/runner.rs
//! Top-level run: sources in order → one canonical table → one file.
//!
//! Strictly sequential. A source that can't be fetched is skipped and
//! reported; only the final write can fail the run.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    config::{RunOptions, Source, consts::FALLBACKS},
    core::{Fetcher, html},
    error::{Error, FetchError, Result},
    extract::Extractor,
    file,
    progress::Progress,
    store::MergeStore,
};

/// A source that contributed nothing because it couldn't be retrieved.
#[derive(Debug)]
pub struct SkippedSource {
    pub label: String,
    pub url: String,
    pub error: FetchError,
}

impl SkippedSource {
    pub fn into_error(self) -> Error {
        Error::DocumentUnavailable { label: self.label, source: self.error }
    }
}

/// Outcome of processing every source, before anything is written.
#[derive(Debug, Default)]
pub struct Collected {
    pub store: MergeStore,
    pub fetched: Vec<String>,
    pub skipped: Vec<SkippedSource>,
    pub candidates: usize,
    pub fallbacks_added: usize,
}

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub candidates: usize,
    pub fetched: Vec<String>,
    pub skipped: Vec<SkippedSource>,
}

/// Fetch, extract and merge every source, then seed fallbacks. Never fails.
pub fn collect(
    sources: &[Source],
    fetcher: &dyn Fetcher,
    extractor: &Extractor,
    mut progress: Option<&mut dyn Progress>,
) -> Collected {
    let mut out = Collected::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(sources.len());
    }

    for source in sources {
        match fetcher.fetch(&source.url) {
            Ok(markup) => {
                let (found, kept) = ingest(&mut out.store, extractor, &markup, &source.label);
                info!(source = %source.label, found, kept, "source processed");
                out.candidates += found;
                out.fetched.push(source.label.clone());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(&source.label, found, kept);
                }
            }
            Err(error) => {
                warn!(source = %source.label, url = %source.url, %error, "source unavailable, skipping");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&source.label, &error.to_string());
                }
                out.skipped.push(SkippedSource {
                    label: source.label.clone(),
                    url: source.url.clone(),
                    error,
                });
            }
        }
    }

    out.fallbacks_added = out.store.seed_fallbacks(FALLBACKS);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}

/// One document into the store. Returns (candidates found, candidates kept).
pub fn ingest(store: &mut MergeStore, extractor: &Extractor, markup: &str, label: &str) -> (usize, usize) {
    let text = html::to_text(markup);
    let records = extractor.extract(&text, label);
    let found = records.len();
    let kept = store.extend(records);
    (found, kept)
}

/// Collect, then write the table to the configured path.
pub fn run(
    options: &RunOptions,
    fetcher: &dyn Fetcher,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let extractor = Extractor::builtin()?;
    let collected = collect(&options.sources, fetcher, &extractor, progress);

    let path = file::write_table(&options.export.out_path(), &collected.store, options.export.format)?;

    Ok(RunSummary {
        path,
        rows: collected.store.len(),
        candidates: collected.candidates,
        fetched: collected.fetched,
        skipped: collected.skipped,
    })
}
