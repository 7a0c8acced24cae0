// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server configuration

use std::env;
use std::net::SocketAddr;

use crate::fetch::FetchConfig;

/// Configuration for the HTTP server and its login gate
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen host (default: 127.0.0.1)
    pub host: String,
    /// Listen port (default: 8080)
    pub port: u16,
    /// Admin username (default: admin)
    pub admin_username: String,
    /// Admin password; password login is disabled when unset
    pub admin_password: Option<String>,
    /// Allow demo login without credentials (default: true)
    pub demo_login: bool,
    /// Session lifetime in seconds (default: 86400)
    pub session_ttl_secs: u64,
    /// Maximum number of open sessions (default: 10000)
    pub max_sessions: usize,
    /// Page fetch settings
    pub fetch: FetchConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("CLARITY_API_HOST").unwrap_or(defaults.host),
            port: env::var("CLARITY_API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            admin_username: env::var("CLARITY_ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: env::var("CLARITY_ADMIN_PASSWORD")
                .ok()
                .filter(|v| !v.is_empty()),
            demo_login: env::var("CLARITY_DEMO_LOGIN")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.demo_login),
            session_ttl_secs: env::var("CLARITY_SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.session_ttl_secs),
            max_sessions: env::var("CLARITY_MAX_SESSIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_sessions),
            fetch: FetchConfig::from_env(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.admin_username.trim().is_empty() {
            return Err("admin_username cannot be empty".to_string());
        }
        if self.session_ttl_secs == 0 {
            return Err("session_ttl_secs must be greater than 0".to_string());
        }
        if self.max_sessions == 0 {
            return Err("max_sessions must be greater than 0".to_string());
        }
        self.socket_addr()?;
        self.fetch.validate()
    }

    /// Address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("invalid listen address {}:{}: {}", self.host, self.port, e))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            admin_username: "admin".to_string(),
            admin_password: None,
            demo_login: true,
            session_ttl_secs: 24 * 60 * 60,
            max_sessions: 10_000,
            fetch: FetchConfig::default(),
        }
    }
}
