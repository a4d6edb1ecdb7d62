// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Planner defaults and overrides, invalid values and intelligence parameter overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use allure::config::environment::{
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_HTTP_CONNECT_TIMEOUT_SECS, DEFAULT_HTTP_TIMEOUT_SECS,
};
use allure::config::{CrossTrainingConfig, IntelligenceConfig, PlannerConfig};
use allure::logging::{LogFormat, LoggingConfig};
use allure::models::ActivityType;
use allure::rate_limiting::DEFAULT_REVIEW_COOLDOWN_DAYS;
use serial_test::serial;

const PLANNER_VARS: [&str; 6] = [
    "ALLURE_PROVIDER_BASE_URL",
    "ALLURE_PROVIDER_TOKEN",
    "ALLURE_HTTP_TIMEOUT_SECS",
    "ALLURE_HTTP_CONNECT_TIMEOUT_SECS",
    "ALLURE_REVIEW_COOLDOWN_DAYS",
    "ALLURE_FETCH_TIMEOUT_SECS",
];

fn clear_planner_vars() {
    for var in PLANNER_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_planner_defaults() {
    clear_planner_vars();
    let config = PlannerConfig::from_env().unwrap();

    assert_eq!(config.provider.base_url, None);
    assert_eq!(config.provider.access_token, None);
    assert_eq!(config.provider.request_timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    assert_eq!(
        config.provider.connect_timeout_secs,
        DEFAULT_HTTP_CONNECT_TIMEOUT_SECS
    );
    assert_eq!(config.review_cooldown_days, DEFAULT_REVIEW_COOLDOWN_DAYS);
    assert_eq!(
        config.fetch_timeout,
        Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS)
    );
    assert!(config.provider.http_provider().is_none());
}

#[test]
#[serial]
fn test_planner_overrides() {
    clear_planner_vars();
    env::set_var("ALLURE_PROVIDER_BASE_URL", "https://tracker.example.com/api/v3");
    env::set_var("ALLURE_PROVIDER_TOKEN", "  secret  ");
    env::set_var("ALLURE_REVIEW_COOLDOWN_DAYS", "3");
    env::set_var("ALLURE_FETCH_TIMEOUT_SECS", "5");

    let config = PlannerConfig::from_env().unwrap();
    clear_planner_vars();

    assert_eq!(
        config.provider.base_url.as_deref(),
        Some("https://tracker.example.com/api/v3")
    );
    assert_eq!(config.provider.access_token.as_deref(), Some("secret"));
    assert_eq!(config.review_cooldown_days, 3);
    assert_eq!(config.fetch_timeout, Duration::from_secs(5));
    assert!(config.provider.http_provider().is_some());

    let summary = config.summary();
    assert!(summary.contains("Provider token: set"));
    assert!(!summary.contains("secret"));
}

#[test]
#[serial]
fn test_blank_provider_values_count_as_unset() {
    clear_planner_vars();
    env::set_var("ALLURE_PROVIDER_BASE_URL", "   ");
    env::set_var("ALLURE_PROVIDER_TOKEN", "");

    let config = PlannerConfig::from_env().unwrap();
    clear_planner_vars();

    assert_eq!(config.provider.base_url, None);
    assert_eq!(config.provider.access_token, None);
    assert!(config.summary().contains("Provider token: not set"));
}

#[test]
#[serial]
fn test_invalid_numbers_name_the_variable() {
    clear_planner_vars();
    env::set_var("ALLURE_REVIEW_COOLDOWN_DAYS", "a week");
    let error = PlannerConfig::from_env().unwrap_err();
    clear_planner_vars();
    assert_eq!(error.to_string(), "Invalid ALLURE_REVIEW_COOLDOWN_DAYS value");

    env::set_var("ALLURE_FETCH_TIMEOUT_SECS", "-1");
    let error = PlannerConfig::from_env().unwrap_err();
    clear_planner_vars();
    assert_eq!(error.to_string(), "Invalid ALLURE_FETCH_TIMEOUT_SECS value");
}

#[test]
#[serial]
fn test_intelligence_overrides() {
    let ride_var = CrossTrainingConfig::coefficient_env_var(&ActivityType::Ride);
    assert_eq!(ride_var, "ALLURE_CROSS_TRAINING_RIDE_COEFFICIENT");

    env::set_var(&ride_var, "0.8");
    env::set_var("ALLURE_ADAPTATION_MIN_SESSION_MINUTES", "20");
    let config = IntelligenceConfig::from_env().unwrap();
    env::remove_var(&ride_var);
    env::remove_var("ALLURE_ADAPTATION_MIN_SESSION_MINUTES");

    assert_eq!(
        config.cross_training.coefficient(&ActivityType::Ride),
        Some(0.8)
    );
    assert_eq!(config.adaptation.min_session_minutes, 20);
}

#[test]
#[serial]
fn test_intelligence_rejects_out_of_range_values() {
    env::set_var("ALLURE_CROSS_TRAINING_SWIM_COEFFICIENT", "1.5");
    let result = IntelligenceConfig::from_env();
    env::remove_var("ALLURE_CROSS_TRAINING_SWIM_COEFFICIENT");
    assert!(result.is_err());

    env::set_var("ALLURE_ADAPTATION_MAX_VOLUME_CHANGE_PERCENT", "-5");
    let result = IntelligenceConfig::from_env();
    env::remove_var("ALLURE_ADAPTATION_MAX_VOLUME_CHANGE_PERCENT");
    assert!(result.is_err());

    env::set_var("ALLURE_ADAPTATION_ROUNDING_STEP_MINUTES", "five");
    let result = IntelligenceConfig::from_env();
    env::remove_var("ALLURE_ADAPTATION_ROUNDING_STEP_MINUTES");
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_logging_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);

    let cli = LoggingConfig::for_cli(false);
    assert_eq!(cli.level, "warn");
    assert_eq!(cli.format, LogFormat::Compact);
    assert_eq!(LoggingConfig::for_cli(true).level, "debug");
}
