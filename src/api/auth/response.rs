// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Session API response types

use serde::{Deserialize, Serialize};

use crate::session::{SessionContext, SessionMode};

/// Response body for POST /v1/login and POST /v1/login/demo
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginApiResponse {
    /// Token to send back in the `x-session-token` header
    pub token: String,
    /// How the session was established
    pub mode: SessionMode,
}

/// Response body for POST /v1/logout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutApiResponse {
    /// False when the token did not belong to an open session
    pub logged_out: bool,
}

/// Response body for GET /v1/session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionApiResponse {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SessionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_analysis_id: Option<String>,
}

impl SessionApiResponse {
    pub fn from_context(context: Option<SessionContext>) -> Self {
        match context {
            Some(context) => Self {
                logged_in: true,
                mode: Some(context.mode),
                last_analysis_id: context.last_analysis_id,
            },
            None => Self {
                logged_in: false,
                mode: None,
                last_analysis_id: None,
            },
        }
    }
}
