// ABOUTME: Environment configuration for the planner service and CLI
// ABOUTME: Activity provider endpoint, fetch timeouts, review cooldown and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::logging::LoggingConfig;
use crate::rate_limiting::DEFAULT_REVIEW_COOLDOWN_DAYS;
use allure_providers::{initialize_shared_client, HttpActivityProvider};
use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use tracing::{debug, info};

/// Default bound on one activity fetch, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
/// Default HTTP request timeout, in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
/// Default HTTP connect timeout, in seconds
pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Activity provider endpoint settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Tracker API base URL; no HTTP provider without it
    pub base_url: Option<String>,
    /// Bearer token sent to the tracker
    pub access_token: Option<String>,
    /// Per-request timeout of the shared HTTP client
    pub request_timeout_secs: u64,
    /// Connect timeout of the shared HTTP client
    pub connect_timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            access_token: None,
            request_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ProviderSettings {
    /// Configure the shared HTTP client and build the tracker provider, if a base URL is set
    #[must_use]
    pub fn http_provider(&self) -> Option<HttpActivityProvider> {
        let base_url = self.base_url.as_deref()?;
        if !initialize_shared_client(self.request_timeout_secs, self.connect_timeout_secs) {
            debug!("shared HTTP client timeouts were already set");
        }
        Some(HttpActivityProvider::new(
            base_url,
            self.access_token.clone(),
        ))
    }
}

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Activity provider settings
    pub provider: ProviderSettings,
    /// Days between two comprehensive reviews of one athlete
    pub review_cooldown_days: u32,
    /// Bound on one activity fetch
    pub fetch_timeout: Duration,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            provider: ProviderSettings::default(),
            review_cooldown_days: DEFAULT_REVIEW_COOLDOWN_DAYS,
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error naming the variable when a numeric value does not parse
    pub fn from_env() -> Result<Self> {
        let config = Self {
            logging: LoggingConfig::from_env(),
            provider: ProviderSettings {
                base_url: non_empty_var("ALLURE_PROVIDER_BASE_URL"),
                access_token: non_empty_var("ALLURE_PROVIDER_TOKEN"),
                request_timeout_secs: env_var_or(
                    "ALLURE_HTTP_TIMEOUT_SECS",
                    &DEFAULT_HTTP_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid ALLURE_HTTP_TIMEOUT_SECS value")?,
                connect_timeout_secs: env_var_or(
                    "ALLURE_HTTP_CONNECT_TIMEOUT_SECS",
                    &DEFAULT_HTTP_CONNECT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid ALLURE_HTTP_CONNECT_TIMEOUT_SECS value")?,
            },
            review_cooldown_days: env_var_or(
                "ALLURE_REVIEW_COOLDOWN_DAYS",
                &DEFAULT_REVIEW_COOLDOWN_DAYS.to_string(),
            )
            .parse()
            .context("Invalid ALLURE_REVIEW_COOLDOWN_DAYS value")?,
            fetch_timeout: Duration::from_secs(
                env_var_or(
                    "ALLURE_FETCH_TIMEOUT_SECS",
                    &DEFAULT_FETCH_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid ALLURE_FETCH_TIMEOUT_SECS value")?,
            ),
        };

        info!("{}", config.summary());
        Ok(config)
    }

    /// One-block human-readable summary, tokens redacted
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Allure configuration:\n\
             - Environment: {}\n\
             - Provider: {}\n\
             - Provider token: {}\n\
             - Fetch timeout: {}s\n\
             - Review cooldown: {} days",
            self.logging.environment,
            self.provider.base_url.as_deref().unwrap_or("none"),
            if self.provider.access_token.is_some() {
                "set"
            } else {
                "not set"
            },
            self.fetch_timeout.as_secs(),
            self.review_cooldown_days,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
