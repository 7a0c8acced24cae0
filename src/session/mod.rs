// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Login and session state for the HTTP surface
//!
//! The analysis core never sees this module; handlers consult it before
//! running an analysis and record the resulting id afterwards.

pub mod auth;
pub mod store;

pub use auth::{Authenticator, Credentials, StaticAuthenticator};
pub use store::{LoginError, SessionContext, SessionMode, SessionStore};
