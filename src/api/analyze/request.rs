// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze API request types

use serde::{Deserialize, Serialize};

use crate::analysis::SectionFlags;

/// Request body for POST /v1/analyze
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeApiRequest {
    /// Page to analyze, must start with http:// or https://
    pub url: String,

    /// Render the consensus section (default true)
    #[serde(default = "default_true")]
    pub include_consensus: bool,

    /// Render the bias section (default true)
    #[serde(default = "default_true")]
    pub include_bias: bool,

    /// Render the summary/terms section (default true)
    #[serde(default = "default_true")]
    pub include_terms: bool,

    /// Render the advice section (default true)
    #[serde(default = "default_true")]
    pub include_advice: bool,
}

fn default_true() -> bool {
    true
}

impl AnalyzeApiRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err("请输入网页URL".to_string());
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err("请输入完整的URL，包括 http:// 或 https://".to_string());
        }
        Ok(())
    }

    /// Section flags selected by this request
    pub fn flags(&self) -> SectionFlags {
        SectionFlags {
            consensus: self.include_consensus,
            bias: self.include_bias,
            terms: self.include_terms,
            advice: self.include_advice,
        }
    }
}
