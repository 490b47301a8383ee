// src/core/net.rs
// Blocking HTTPS GET. No timeout, no retry, no status handling: any transport
// failure aborts the run.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{Result, ScrapeError};

/// Source of raw page markup. The runner only talks to this seam, so tests
/// can hand it canned pages.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// `user_agent` identifies the client to the remote site.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(None::<Duration>)
            .build()
            .map_err(|source| ScrapeError::Transport { url: s!("<client setup>"), source })?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let transport = |source: reqwest::Error| ScrapeError::Transport { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(transport)?;
        logd!("Fetch: {} → {}", url, resp.status());
        let body = resp.text().map_err(transport)?;
        logf!("Fetch: {} ({} bytes)", url, body.len());
        Ok(body)
    }
}
