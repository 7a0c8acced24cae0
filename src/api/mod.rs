// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze;
pub mod auth;
pub mod errors;
pub mod http_server;

pub use analyze::{analyze_handler, AnalyzeApiRequest, AnalyzeApiResponse};
pub use auth::{LoginApiResponse, LogoutApiResponse, SessionApiResponse, SESSION_HEADER};
pub use errors::{ApiError, ErrorResponse};
pub use http_server::{build_router, start_server, AppState, HealthResponse};
