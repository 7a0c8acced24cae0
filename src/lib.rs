// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod session;
pub mod version;

// Re-export main types
pub use analysis::{
    AnalysisOutcome, AnalysisService, Category, ReportSynthesizer, SectionFlags, SynthesisError,
};
pub use config::ServerConfig;
pub use fetch::{ContentFetcher, FetchConfig, FetchError, PageContent, PageSource};
pub use session::{Authenticator, Credentials, SessionStore, StaticAuthenticator};
