// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword predicates
//!
//! A predicate maps page text to a short finding. Every predicate in the
//! battery is one of four shapes:
//! - membership scan: which listed keywords occur (first 3, list order)
//! - count threshold: how many distinct listed keywords occur, bucketed
//! - length threshold: how long the text is, bucketed
//! - key data: numeric figures such as `15%`, `2.5亿`

use regex::Regex;
use std::sync::OnceLock;

use super::types::PredicateError;

/// Maximum number of keywords a membership scan reports
pub const MAX_REPORTED_MATCHES: usize = 3;

/// Separator between reported keywords
pub const MATCH_SEPARATOR: &str = "、";

/// Figures followed by a percent sign, 万 or 亿
pub const KEY_DATA_PATTERN: &str = r"\d+(?:\.\d+)?(?:%|万|亿)";

/// Message when no figures are present
pub const NO_KEY_DATA: &str = "未发现关键数据";

/// A count bucket: `min` distinct matches or more selects `message`
#[derive(Debug, Clone, Copy)]
pub struct Threshold {
    pub min: usize,
    pub message: &'static str,
}

/// A length bucket: text shorter than `below` characters selects `message`
#[derive(Debug, Clone, Copy)]
pub struct LengthBucket {
    pub below: usize,
    pub message: &'static str,
}

/// The shape of a predicate and its constants
#[derive(Debug, Clone, Copy)]
pub enum PredicateKind {
    Membership {
        keywords: &'static [&'static str],
        found_prefix: &'static str,
        not_found: &'static str,
    },
    CountThreshold {
        keywords: &'static [&'static str],
        high: Threshold,
        medium: Threshold,
        low: &'static str,
    },
    LengthThreshold {
        buckets: &'static [LengthBucket],
        overflow: &'static str,
    },
    KeyData,
}

/// A named predicate; the name doubles as its template placeholder
#[derive(Debug, Clone, Copy)]
pub struct PredicateSpec {
    pub name: &'static str,
    pub kind: PredicateKind,
}

impl PredicateSpec {
    /// Evaluate the predicate against page text
    pub fn evaluate(&self, body: &str) -> Result<String, PredicateError> {
        match self.kind {
            PredicateKind::Membership {
                keywords,
                found_prefix,
                not_found,
            } => {
                let found = membership_matches(body, keywords, MAX_REPORTED_MATCHES);
                if found.is_empty() {
                    Ok(not_found.to_string())
                } else {
                    Ok(format!("{}{}", found_prefix, found.join(MATCH_SEPARATOR)))
                }
            }
            PredicateKind::CountThreshold {
                keywords,
                high,
                medium,
                low,
            } => {
                if medium.min == 0 || high.min <= medium.min {
                    return Err(PredicateError::InvalidThresholds {
                        predicate: self.name,
                        reason: "expected 0 < medium.min < high.min",
                    });
                }
                let count = count_matches(body, keywords);
                let message = if count >= high.min {
                    high.message
                } else if count >= medium.min {
                    medium.message
                } else {
                    low
                };
                Ok(message.to_string())
            }
            PredicateKind::LengthThreshold { buckets, overflow } => {
                if buckets.windows(2).any(|w| w[0].below >= w[1].below) {
                    return Err(PredicateError::InvalidThresholds {
                        predicate: self.name,
                        reason: "length buckets must be strictly ascending",
                    });
                }
                let length = body.chars().count();
                let message = buckets
                    .iter()
                    .find(|bucket| length < bucket.below)
                    .map(|bucket| bucket.message)
                    .unwrap_or(overflow);
                Ok(message.to_string())
            }
            PredicateKind::KeyData => {
                let figures = extract_key_data(body)?;
                if figures.is_empty() {
                    Ok(NO_KEY_DATA.to_string())
                } else {
                    Ok(figures.join(MATCH_SEPARATOR))
                }
            }
        }
    }
}

/// Keywords from `keywords` that occur in `body`, in list order, at most `cap`
pub fn membership_matches(
    body: &str,
    keywords: &'static [&'static str],
    cap: usize,
) -> Vec<&'static str> {
    keywords
        .iter()
        .copied()
        .filter(|keyword| body.contains(keyword))
        .take(cap)
        .collect()
}

/// Number of distinct keywords from `keywords` that occur in `body`
pub fn count_matches(body: &str, keywords: &[&str]) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for keyword in keywords {
        if !seen.contains(keyword) && body.contains(keyword) {
            seen.push(*keyword);
        }
    }
    seen.len()
}

/// First three figures (`15%`, `2.5亿`, `300万`...) in left-to-right order
pub fn extract_key_data(body: &str) -> Result<Vec<String>, PredicateError> {
    static PATTERN: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();

    let pattern = PATTERN
        .get_or_init(|| Regex::new(KEY_DATA_PATTERN))
        .as_ref()
        .map_err(|e| PredicateError::InvalidPattern {
            predicate: "key_data",
            message: e.to_string(),
        })?;

    Ok(pattern
        .find_iter(body)
        .take(MAX_REPORTED_MATCHES)
        .map(|m| m.as_str().to_string())
        .collect())
}
