// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analysis service orchestration
//!
//! Fetches the page, synthesizes the report and tags the result with a
//! record id.

use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

use super::synthesizer::ReportSynthesizer;
use super::types::{AnalysisOutcome, SectionFlags};
use crate::fetch::{PageContent, PageSource};

/// Prefix of every analysis record id
pub const RECORD_ID_PREFIX: &str = "ANALYSIS_";

/// Generate a record id from the current Unix timestamp
pub fn generate_record_id() -> String {
    format!("{}{}", RECORD_ID_PREFIX, Utc::now().timestamp())
}

/// Main analysis service: page source plus report synthesizer
pub struct AnalysisService {
    source: Arc<dyn PageSource>,
    synthesizer: ReportSynthesizer,
}

impl AnalysisService {
    pub fn new(source: Arc<dyn PageSource>, synthesizer: ReportSynthesizer) -> Self {
        Self {
            source,
            synthesizer,
        }
    }

    /// Fetch `url` and analyze it
    ///
    /// Fetch problems never fail the analysis; they flow through as
    /// placeholder content. Only a synthesis error yields a failure outcome.
    pub async fn analyze(&self, url: &str, flags: SectionFlags) -> AnalysisOutcome {
        let start = Instant::now();

        let content = self.source.fetch(url).await;
        if content.is_failure() {
            warn!(
                "Analyzing placeholder content for {} ({} source)",
                url,
                self.source.name()
            );
        }

        let outcome = self.analyze_content(&content, flags);

        info!(
            "Analysis of {} finished in {}ms (success: {})",
            url,
            start.elapsed().as_millis(),
            outcome.success
        );

        outcome
    }

    /// Analyze already fetched content
    pub fn analyze_content(&self, content: &PageContent, flags: SectionFlags) -> AnalysisOutcome {
        match self.synthesizer.synthesize(content, flags) {
            Ok(report) => AnalysisOutcome::success(report, generate_record_id()),
            Err(e) => {
                warn!("Report synthesis failed for {}: {}", content.source_url, e);
                AnalysisOutcome::failure(e.to_string())
            }
        }
    }
}
