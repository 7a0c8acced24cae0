// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for report synthesis

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Report categories in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Summary,
    Consensus,
    Bias,
    Advice,
}

impl Category {
    /// Every category, in the order sections appear in a report
    pub const ALL: [Category; 4] = [
        Category::Summary,
        Category::Consensus,
        Category::Bias,
        Category::Advice,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Summary => "summary",
            Category::Consensus => "consensus",
            Category::Bias => "bias",
            Category::Advice => "advice",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which report sections the caller asked for
///
/// `terms` selects the summary section, which carries the key terms and key
/// data findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionFlags {
    pub consensus: bool,
    pub bias: bool,
    pub terms: bool,
    pub advice: bool,
}

impl SectionFlags {
    /// All sections enabled
    pub fn all() -> Self {
        Self {
            consensus: true,
            bias: true,
            terms: true,
            advice: true,
        }
    }

    /// No sections enabled
    pub fn none() -> Self {
        Self {
            consensus: false,
            bias: false,
            terms: false,
            advice: false,
        }
    }

    /// Whether the section for `category` should be rendered
    pub fn includes(&self, category: Category) -> bool {
        match category {
            Category::Summary => self.terms,
            Category::Consensus => self.consensus,
            Category::Bias => self.bias,
            Category::Advice => self.advice,
        }
    }

    /// Enabled categories in rendering order
    pub fn enabled(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.includes(*c))
            .collect()
    }
}

impl Default for SectionFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Errors raised while evaluating a single predicate
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PredicateError {
    /// A predicate's regular expression failed to compile
    #[error("invalid pattern in {predicate}: {message}")]
    InvalidPattern {
        predicate: &'static str,
        message: String,
    },

    /// A predicate's thresholds or buckets are inconsistent
    #[error("invalid thresholds in {predicate}: {reason}")]
    InvalidThresholds {
        predicate: &'static str,
        reason: &'static str,
    },
}

/// Errors that abort report synthesis
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SynthesisError {
    /// A template referenced a placeholder nobody supplied
    #[error("unresolved placeholder {{{name}}} in {template}")]
    UnresolvedPlaceholder { template: String, name: String },

    /// A template opened a placeholder and never closed it
    #[error("unterminated placeholder in {template}")]
    UnterminatedPlaceholder { template: String },

    /// The category table has no entry for an enabled category
    #[error("no section definition for category {0}")]
    MissingCategory(Category),
}

/// Result of one analysis request, tagged success or failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisOutcome {
    pub fn success(report: String, record_id: String) -> Self {
        Self {
            success: true,
            report: Some(report),
            record_id: Some(record_id),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            report: None,
            record_id: None,
            error: Some(error.into()),
        }
    }
}
