// ABOUTME: Process-wide HTTP client shared by every tracker-backed activity provider
// ABOUTME: Timeouts are fixed once at startup; later providers reuse the same connection pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

/// Request timeout used when the client is never configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connect timeout used when the client is never configured
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("allure/", env!("CARGO_PKG_VERSION"));

static CLIENT_TIMEOUTS: OnceLock<(u64, u64)> = OnceLock::new();

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Fix the shared client's timeouts
///
/// Only the first call counts, and only if it happens before the first
/// [`shared_client`] call. Returns whether these values were recorded.
#[must_use]
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) -> bool {
    CLIENT_TIMEOUTS
        .set((timeout_secs, connect_timeout_secs))
        .is_ok()
}

/// Timeouts in effect for the shared client, as (request, connect) seconds
#[must_use]
pub fn shared_client_timeouts() -> (u64, u64) {
    CLIENT_TIMEOUTS
        .get()
        .copied()
        .unwrap_or((DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS))
}

/// The shared client, built on first use
#[must_use]
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let (timeout, connect_timeout) = shared_client_timeouts();
        ClientBuilder::new()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout))
            .connect_timeout(Duration::from_secs(connect_timeout))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
