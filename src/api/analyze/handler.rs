// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze API endpoint handler

use axum::{extract::State, http::HeaderMap, Json};
use tracing::{debug, info, warn};

use super::request::AnalyzeApiRequest;
use super::response::AnalyzeApiResponse;
use crate::api::auth::require_session;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /v1/analyze - Fetch a page and build its analysis report
///
/// # Request
/// - `url`: Page URL (required, http:// or https://)
/// - `includeConsensus`, `includeBias`, `includeTerms`, `includeAdvice`:
///   section toggles (default true)
///
/// # Response
/// - `success`: Whether a report was produced
/// - `report`: Markdown report
/// - `recordId`: `ANALYSIS_<unix seconds>`
/// - `error`: Failure message when `success` is false
///
/// # Errors
/// - 400 Bad Request: Empty URL or missing scheme
/// - 401 Unauthorized: Missing or unknown session token
pub async fn analyze_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<AnalyzeApiRequest>,
) -> Result<Json<AnalyzeApiResponse>, ApiError> {
    let token = require_session(&state, &headers)?;
    debug!("Analyze request: {}", request.url);

    if let Err(e) = request.validate() {
        warn!("Analyze validation failed: {}", e);
        return Err(ApiError::ValidationError {
            field: "url".to_string(),
            message: e,
        });
    }

    let url = request.url.trim().to_string();
    let flags = request.flags();
    let outcome = state.analysis.analyze(&url, flags).await;

    if let Some(record_id) = &outcome.record_id {
        if !state.sessions.record_analysis(&token, record_id) {
            debug!(
                "Session ended before analysis {} could be recorded",
                record_id
            );
        }
        info!("Analysis {} complete for {}", record_id, url);
    }

    Ok(Json(AnalyzeApiResponse::new(outcome, url, flags.enabled())))
}
