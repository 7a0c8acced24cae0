// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::Json,
    http::Uri,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::{future::Future, net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::analyze::analyze_handler;
use super::auth::{demo_login_handler, login_handler, logout_handler, session_handler};
use super::errors::ApiError;
use crate::analysis::AnalysisService;
use crate::session::SessionStore;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub analysis: Arc<AnalysisService>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(analysis: AnalysisService, sessions: SessionStore) -> Self {
        Self {
            analysis: Arc::new(analysis),
            sessions: Arc::new(sessions),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Build the API router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_handler))
        // Session endpoints
        .route("/v1/login", post(login_handler))
        .route("/v1/login/demo", post(demo_login_handler))
        .route("/v1/logout", post(logout_handler))
        .route("/v1/session", get(session_handler))
        // Analysis endpoint
        .route("/v1/analyze", post(analyze_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Serve the API on `addr` until `shutdown` resolves
pub async fn start_server<F>(addr: SocketAddr, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("API server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::version::VERSION.to_string(),
    })
}

async fn not_found_handler(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
