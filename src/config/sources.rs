// src/config/sources.rs
//! Source list: the built-in table from `consts`, or a TOML file.
//!
//! ```toml
//! out = "out/device_mapping.csv"   # optional
//!
//! [[source]]
//! label = "galaxy_s"
//! url = "https://en.wikipedia.org/wiki/Galaxy_S_series"
//! ```
//!
//! Order matters: the first source to mention an identifier wins it.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::SOURCES;
use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Source {
    pub label: String,
    /// `http(s)://` URL, `file://` URL or plain filesystem path.
    pub url: String,
}

impl Source {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self { label: label.into(), url: url.into() }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub out: Option<PathBuf>,
    #[serde(rename = "source", default)]
    pub sources: Vec<Source>,
}

pub fn builtin() -> Vec<Source> {
    SOURCES.iter().map(|(label, url)| Source::new(*label, *url)).collect()
}

pub fn load(path: &Path) -> Result<ConfigFile> {
    let text = fs::read_to_string(path)
        .map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    parse(&text, path)
}

pub fn parse(text: &str, path: &Path) -> Result<ConfigFile> {
    let cfg: ConfigFile = toml::from_str(text)
        .map_err(|e| Error::Config { path: path.to_path_buf(), reason: e.to_string() })?;

    if cfg.sources.is_empty() {
        return Err(Error::Config { path: path.to_path_buf(), reason: "no [[source]] entries".into() });
    }
    check_unique(&cfg.sources)?;
    Ok(cfg)
}

fn check_unique(sources: &[Source]) -> Result<()> {
    let mut seen = HashSet::new();
    for s in sources {
        if !seen.insert(s.label.as_str()) {
            return Err(Error::DuplicateSource(s.label.clone()));
        }
    }
    Ok(())
}

/// Keep only the labelled sources, in configured order.
pub fn select(sources: Vec<Source>, only: &[String]) -> Result<Vec<Source>> {
    if only.is_empty() {
        return Ok(sources);
    }
    if let Some(missing) = only.iter().find(|l| !sources.iter().any(|s| &s.label == *l)) {
        return Err(Error::UnknownSource(missing.clone()));
    }
    Ok(sources.into_iter().filter(|s| only.contains(&s.label)).collect())
}

/// "a, b,,c" → ["a", "b", "c"]
pub fn parse_labels(s: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() || out.iter().any(|l| l == part) { continue; }
        out.push(part.to_string());
    }
    out
}
