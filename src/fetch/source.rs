// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page source trait definition

use async_trait::async_trait;

use super::fetcher::{ContentFetcher, PageContent};

/// Anything that can turn a URL into page content
///
/// Implementations must not fail: problems are reported through placeholder
/// content (see [`PageContent::failed`]).
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Retrieve the page behind `url`
    async fn fetch(&self, url: &str) -> PageContent;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

#[async_trait]
impl PageSource for ContentFetcher {
    async fn fetch(&self, url: &str) -> PageContent {
        ContentFetcher::fetch(self, url).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
