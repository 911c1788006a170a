// src/core/net.rs
//! Document retrieval. One blocking GET per source, no retries.

use std::fs;
use std::time::Duration;

use tracing::debug;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// Location → raw markup. Failure means the caller skips that source.
pub trait Fetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError>;
}

/// `http(s)://` via reqwest; `file://` and bare paths from disk.
pub struct NetFetcher {
    client: reqwest::blocking::Client,
}

impl NetFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client })
    }

    fn http_get(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16() });
        }
        Ok(resp.text()?)
    }
}

impl Fetcher for NetFetcher {
    fn fetch(&self, location: &str) -> Result<String, FetchError> {
        if is_http(location) {
            debug!(url = location, "GET");
            return self.http_get(location);
        }
        let path = location.strip_prefix("file://").unwrap_or(location);
        debug!(path, "read");
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn is_http(location: &str) -> bool {
    let lc = location.get(..8).unwrap_or(location).to_ascii_lowercase();
    lc.starts_with("http://") || lc.starts_with("https://")
}
