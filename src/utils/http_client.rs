// ABOUTME: Shared HTTP client utilities with timeout configuration
// ABOUTME: Builds pooled reqwest clients for the REST store backend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create a new HTTP client with custom timeout settings
///
/// The client pools connections; build one per backend and reuse it for
/// every request rather than creating clients per call.
///
/// Falls back to a default client if custom client creation fails.
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}
