// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword-driven content analysis
//!
//! Scans fetched page text with a fixed battery of keyword predicates and
//! renders the findings into a Markdown report.
//!
//! Key properties:
//! - Deterministic: identical text always yields identical findings
//! - Fixed section order: summary → consensus → bias → advice
//! - Predicate failures are contained to their own report line

pub mod keywords;
pub mod predicate;
pub mod service;
pub mod synthesizer;
pub mod template;
pub mod types;

// Re-export commonly used types
pub use keywords::{detect_main_topic, CategorySpec, CATEGORIES};
pub use predicate::{extract_key_data, PredicateKind, PredicateSpec};
pub use service::{generate_record_id, AnalysisService, RECORD_ID_PREFIX};
pub use synthesizer::ReportSynthesizer;
pub use types::{AnalysisOutcome, Category, PredicateError, SectionFlags, SynthesisError};
