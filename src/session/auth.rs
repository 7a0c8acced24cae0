// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Login credential checks

use serde::{Deserialize, Serialize};
use std::fmt;

/// Username and password submitted at login
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Both fields present after trimming
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

/// Decides whether a set of credentials may log in
#[cfg_attr(test, mockall::automock)]
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, credentials: &Credentials) -> bool;
}

/// Single admin account taken from configuration
///
/// With no password configured every login is refused.
pub struct StaticAuthenticator {
    username: String,
    password: Option<String>,
}

impl StaticAuthenticator {
    pub fn new(username: impl Into<String>, password: Option<String>) -> Self {
        Self {
            username: username.into(),
            password: password.filter(|p| !p.is_empty()),
        }
    }

    /// Whether password login is possible at all
    pub fn is_configured(&self) -> bool {
        self.password.is_some()
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, credentials: &Credentials) -> bool {
        match &self.password {
            Some(password) => {
                credentials.username == self.username && &credentials.password == password
            }
            None => false,
        }
    }
}
