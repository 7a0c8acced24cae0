// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clarity_ai::{
    analysis::{AnalysisService, ReportSynthesizer},
    api::{start_server, AppState},
    config::ServerConfig,
    fetch::ContentFetcher,
    session::{SessionStore, StaticAuthenticator},
};
use std::{env, sync::Arc, time::Duration};
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("🚀 Starting {}", clarity_ai::version::get_version_string());

    let config = ServerConfig::from_env();
    config.validate().map_err(|e| anyhow!("invalid configuration: {}", e))?;
    let addr = config.socket_addr().map_err(|e| anyhow!(e))?;

    let authenticator = StaticAuthenticator::new(
        config.admin_username.clone(),
        config.admin_password.clone(),
    );
    if !authenticator.is_configured() {
        warn!("CLARITY_ADMIN_PASSWORD not set, password login disabled");
    }
    if config.demo_login {
        info!("Demo login enabled");
    }
    info!(
        "Sessions expire after {}s (at most {} open)",
        config.session_ttl_secs, config.max_sessions
    );

    let fetcher = ContentFetcher::new(config.fetch.clone())?;
    info!(
        "Page fetcher ready (timeout {}s, max {} chars)",
        config.fetch.timeout_secs, config.fetch.max_chars
    );

    let state = AppState::new(
        AnalysisService::new(Arc::new(fetcher), ReportSynthesizer::new()),
        SessionStore::new(Arc::new(authenticator), config.demo_login).with_limits(
            Duration::from_secs(config.session_ttl_secs),
            config.max_sessions,
        ),
    );

    start_server(addr, state, async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received");
    })
    .await?;

    info!("👋 ClarityAI stopped");
    Ok(())
}
