// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Session API endpoints
//!
//! Provides `/v1/login`, `/v1/login/demo`, `/v1/logout` and `/v1/session`.

pub mod handler;
pub mod response;

use axum::http::HeaderMap;

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

pub use handler::{demo_login_handler, login_handler, logout_handler, session_handler};
pub use response::{LoginApiResponse, LogoutApiResponse, SessionApiResponse};

/// Header carrying the session token
pub const SESSION_HEADER: &str = "x-session-token";

/// Session token from the request headers, if present
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Token of an open session, or 401
pub fn require_session(state: &AppState, headers: &HeaderMap) -> Result<String, ApiError> {
    let token = session_token(headers)
        .ok_or_else(|| ApiError::Unauthorized("请先登录".to_string()))?;

    if state.sessions.get(token).is_none() {
        return Err(ApiError::Unauthorized("会话已失效，请重新登录".to_string()));
    }
    Ok(token.to_string())
}
