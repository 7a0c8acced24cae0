// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Login, logout and session endpoint handlers

use axum::{extract::State, http::HeaderMap, Json};
use tracing::debug;

use super::response::{LoginApiResponse, LogoutApiResponse, SessionApiResponse};
use super::{require_session, session_token};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::session::{Credentials, SessionMode};

/// POST /v1/login - Log in with username and password
///
/// # Errors
/// - 400 Bad Request: Username or password missing
/// - 401 Unauthorized: Wrong username or password
pub async fn login_handler(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginApiResponse>, ApiError> {
    debug!("Login attempt for {}", credentials.username);
    let token = state.sessions.login(&credentials)?;

    Ok(Json(LoginApiResponse {
        token,
        mode: SessionMode::Authenticated,
    }))
}

/// POST /v1/login/demo - Start a demo session
///
/// # Errors
/// - 403 Forbidden: Demo login disabled on this server
pub async fn demo_login_handler(
    State(state): State<AppState>,
) -> Result<Json<LoginApiResponse>, ApiError> {
    let token = state.sessions.login_demo()?;

    Ok(Json(LoginApiResponse {
        token,
        mode: SessionMode::Demo,
    }))
}

/// POST /v1/logout - End the current session
///
/// # Errors
/// - 401 Unauthorized: No session token supplied
pub async fn logout_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<LogoutApiResponse>, ApiError> {
    let token = session_token(&headers)
        .ok_or_else(|| ApiError::Unauthorized("missing session token".to_string()))?;

    Ok(Json(LogoutApiResponse {
        logged_out: state.sessions.logout(token),
    }))
}

/// GET /v1/session - Login state and last analysis id
pub async fn session_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<SessionApiResponse> {
    let context = require_session(&state, &headers)
        .ok()
        .and_then(|token| state.sessions.get(&token));

    Json(SessionApiResponse::from_context(context))
}
