// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP page fetching with a bounded timeout
//!
//! One GET per call, no retries, no caching. Failures are folded into
//! placeholder content so the analysis pipeline keeps going.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use super::config::FetchConfig;
use super::extractor::{extract_title, extract_visible_text};

/// Title carried by placeholder content when a fetch fails
pub const FETCH_FAILED_TITLE: &str = "抓取失败";

/// Title used when the page has no `<title>`
pub const UNTITLED: &str = "无标题";

/// Fetched page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub title: String,
    pub body: String,
    pub source_url: String,
}

impl PageContent {
    /// Placeholder content describing a failed fetch
    pub fn failed(url: &str, error: &FetchError) -> Self {
        Self {
            title: FETCH_FAILED_TITLE.to_string(),
            body: format!("无法获取网页内容: {}", error),
            source_url: url.to_string(),
        }
    }

    /// Whether this content is a fetch-failure placeholder
    pub fn is_failure(&self) -> bool {
        self.title == FETCH_FAILED_TITLE
    }
}

/// Content fetch error types
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// URL could not be parsed or is not http(s)
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Request timed out
    #[error("Timeout fetching: {0}")]
    Timeout(String),
    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(String),
    /// HTTP non-success status
    #[error("HTTP {0} for: {1}")]
    HttpStatus(u16, String),
    /// Response body could not be read
    #[error("Failed to read body: {0}")]
    Body(String),
}

/// Single-page content fetcher
pub struct ContentFetcher {
    client: Client,
    config: FetchConfig,
}

impl ContentFetcher {
    /// Create a new content fetcher
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Fetch a page, never failing
    ///
    /// Any error becomes a [`PageContent`] titled [`FETCH_FAILED_TITLE`]
    /// whose body describes the problem.
    pub async fn fetch(&self, url: &str) -> PageContent {
        match self.try_fetch(url).await {
            Ok(content) => content,
            Err(e) => {
                warn!("Fetch failed for {}: {}", url, e);
                PageContent::failed(url, &e)
            }
        }
    }

    /// Fetch a page, reporting the failure kind
    pub async fn try_fetch(&self, url: &str) -> Result<PageContent, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        if !["http", "https"].contains(&parsed.scheme()) {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme: {}",
                parsed.scheme()
            )));
        }

        debug!("Fetching content from: {}", url);

        let response = self.client.get(parsed).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16(), url.to_string()));
        }

        let html = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        let body = extract_visible_text(&html, self.config.max_chars);
        let title = extract_title(&html).unwrap_or_else(|| UNTITLED.to_string());

        info!("Fetched {} chars from: {}", body.chars().count(), url);

        Ok(PageContent {
            title,
            body,
            source_url: url.to_string(),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}
