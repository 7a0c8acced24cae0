// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! In-memory login sessions
//!
//! Each session is keyed by an opaque token and remembers how the user
//! logged in and the id of their last analysis. Nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use super::auth::{Authenticator, Credentials};

/// How a session was established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    /// Logged in with username and password
    Authenticated,
    /// Logged in through demo mode
    Demo,
}

/// Per-user state carried between requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub mode: SessionMode,
    pub created_at: DateTime<Utc>,
    pub last_analysis_id: Option<String>,
}

/// Why a login attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("请输入用户名和密码")]
    MissingCredentials,
    #[error("用户名或密码错误")]
    InvalidCredentials,
    #[error("演示模式未启用")]
    DemoDisabled,
}

/// Default session lifetime
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Default upper bound on open sessions
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

type SessionMap = HashMap<String, SessionContext>;

/// Session store with pluggable authentication
///
/// Sessions expire `ttl` after login. Expired sessions are dropped when a new
/// one opens, and once `max_sessions` are open the oldest is evicted.
pub struct SessionStore {
    sessions: RwLock<SessionMap>,
    authenticator: Arc<dyn Authenticator>,
    demo_enabled: bool,
    ttl: Duration,
    max_sessions: usize,
}

impl SessionStore {
    pub fn new(authenticator: Arc<dyn Authenticator>, demo_enabled: bool) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            authenticator,
            demo_enabled,
            ttl: DEFAULT_SESSION_TTL,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }

    /// Override session lifetime and capacity
    pub fn with_limits(mut self, ttl: Duration, max_sessions: usize) -> Self {
        self.ttl = ttl;
        self.max_sessions = max_sessions.max(1);
        self
    }

    /// Log in with credentials, returning the new session token
    pub fn login(&self, credentials: &Credentials) -> Result<String, LoginError> {
        if !credentials.is_complete() {
            return Err(LoginError::MissingCredentials);
        }
        if !self.authenticator.authenticate(credentials) {
            info!("Rejected login for user {}", credentials.username);
            return Err(LoginError::InvalidCredentials);
        }
        info!("User {} logged in", credentials.username);
        Ok(self.open(SessionMode::Authenticated))
    }

    /// Log in through demo mode
    pub fn login_demo(&self) -> Result<String, LoginError> {
        if !self.demo_enabled {
            return Err(LoginError::DemoDisabled);
        }
        info!("Demo session started");
        Ok(self.open(SessionMode::Demo))
    }

    /// End a session; returns whether it existed
    pub fn logout(&self, token: &str) -> bool {
        self.write().remove(token).is_some()
    }

    /// Current state of a live session
    pub fn get(&self, token: &str) -> Option<SessionContext> {
        let now = Utc::now();
        self.read()
            .get(token)
            .filter(|session| !self.is_expired(session, now))
            .cloned()
    }

    /// Remember the id of the session's latest analysis
    ///
    /// Returns false when the session is gone or expired.
    pub fn record_analysis(&self, token: &str, record_id: &str) -> bool {
        let now = Utc::now();
        let mut sessions = self.write();
        let Some(session) = sessions.get_mut(token) else {
            return false;
        };
        if self.is_expired(session, now) {
            sessions.remove(token);
            return false;
        }
        session.last_analysis_id = Some(record_id.to_string());
        debug!("Recorded analysis {} for session", record_id);
        true
    }

    /// Whether demo login is available
    pub fn demo_enabled(&self) -> bool {
        self.demo_enabled
    }

    /// Number of stored sessions, expired ones included until pruned
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn open(&self, mode: SessionMode) -> String {
        let now = Utc::now();
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.write();

        let before = sessions.len();
        sessions.retain(|_, session| !self.is_expired(session, now));
        if sessions.len() < before {
            debug!("Pruned {} expired sessions", before - sessions.len());
        }

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, session)| session.created_at)
                .map(|(token, _)| token.clone());
            let Some(oldest) = oldest else {
                break;
            };
            sessions.remove(&oldest);
            debug!("Session limit {} reached, evicted oldest", self.max_sessions);
        }

        sessions.insert(
            token.clone(),
            SessionContext {
                mode,
                created_at: now,
                last_analysis_id: None,
            },
        );
        token
    }

    fn is_expired(&self, session: &SessionContext, now: DateTime<Utc>) -> bool {
        (now - session.created_at)
            .to_std()
            .map(|age| age >= self.ttl)
            .unwrap_or(false)
    }

    // A panic while holding the lock leaves the map itself intact
    fn read(&self) -> RwLockReadGuard<'_, SessionMap> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionMap> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }
}
