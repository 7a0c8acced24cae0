// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze API response types

use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisOutcome, Category};

/// Response body for POST /v1/analyze
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeApiResponse {
    /// Whether a report was produced
    pub success: bool,

    /// Markdown report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,

    /// Record id, e.g. `ANALYSIS_1735000000`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,

    /// Human-readable failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The analyzed URL
    pub url: String,

    /// Sections requested, in report order
    pub sections: Vec<Category>,
}

impl AnalyzeApiResponse {
    /// Create a new analyze API response
    pub fn new(outcome: AnalysisOutcome, url: String, sections: Vec<Category>) -> Self {
        Self {
            success: outcome.success,
            report: outcome.report,
            record_id: outcome.record_id,
            error: outcome.error,
            url,
            sections,
        }
    }
}
