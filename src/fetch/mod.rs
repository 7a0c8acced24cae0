// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page fetching for content analysis
//!
//! Retrieves a single web page and reduces it to its visible text so the
//! keyword battery has something to scan.
//!
//! ## Architecture
//!
//! ```text
//! URL → ContentFetcher → HTML → extract_visible_text → PageContent (≤ max_chars)
//!             ↓ (any failure)
//!       PageContent { title: FETCH_FAILED_TITLE, body: error message }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let fetcher = ContentFetcher::new(FetchConfig::from_env())?;
//! let content = fetcher.fetch("https://example.com").await;
//! ```

pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod source;

pub use config::FetchConfig;
pub use extractor::{extract_title, extract_visible_text};
pub use fetcher::{ContentFetcher, FetchError, PageContent, FETCH_FAILED_TITLE};
pub use source::PageSource;
