// src/fetch.rs
//! Fetcher: turn a URL into header-keyed rows.
//!
//! Text comes through a [`Source`] so the pipeline can run against canned
//! fixtures as easily as against the live CSV host.

use std::collections::HashMap;

use reqwest::blocking::Client;
use tracing::debug;

use crate::core::net;
use crate::csv::{parse_rows, parse_rows_where, RawRow};
use crate::error::Result;

/// Something that can hand back the body behind a URL.
pub trait Source {
    fn get_text(&self, url: &str) -> Result<String>;
}

/// Live HTTP(S) transport.
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        Ok(Self { client: net::client()? })
    }
}

impl Source for HttpSource {
    fn get_text(&self, url: &str) -> Result<String> {
        net::http_get(&self.client, url)
    }
}

/// In-memory transport keyed by URL. Unknown URLs answer 404.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    bodies: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.bodies.insert(url.into(), body.into());
        self
    }
}

impl Source for MemorySource {
    fn get_text(&self, url: &str) -> Result<String> {
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| crate::Error::Status { url: s!(url), status: 404 })
    }
}

/// Download `url` through `source` and parse it as CSV.
pub fn fetch_rows(source: &dyn Source, url: &str) -> Result<Vec<RawRow>> {
    let text = source.get_text(url)?;
    let t = std::time::Instant::now();
    let rows = parse_rows(&text, url)?;
    debug!("Parsed {} rows from {url} in {:?}", rows.len(), t.elapsed());
    Ok(rows)
}

/// Download `url` and keep only the rows `keep` accepts.
pub fn fetch_rows_where(
    source: &dyn Source,
    url: &str,
    keep: impl FnMut(&RawRow) -> bool,
) -> Result<Vec<RawRow>> {
    let text = source.get_text(url)?;
    let t = std::time::Instant::now();
    let rows = parse_rows_where(&text, url, keep)?;
    debug!("Kept {} rows from {url} in {:?}", rows.len(), t.elapsed());
    Ok(rows)
}
