// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for ClarityAI

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-keyword-analysis-2025-10-20";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-10-20";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "page-fetch",
    "keyword-analysis",
    "key-data-extraction",
    "section-flags",
    "predicate-isolation",
    "session-login",
    "demo-login",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("ClarityAI {} ({})", VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}
