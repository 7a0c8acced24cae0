// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content analysis API endpoint
//!
//! Provides the `/v1/analyze` HTTP endpoint.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::analyze_handler;
pub use request::AnalyzeApiRequest;
pub use response::AnalyzeApiResponse;
