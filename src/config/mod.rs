// ABOUTME: Configuration module for the planner service and CLI
// ABOUTME: Re-exports environment configuration and the intelligence tuning parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for Allure
//!
//! - **Environment**: provider endpoint, timeouts and review cooldown from environment variables
//! - **Intelligence**: cross-training coefficients and adaptation bounds, owned by
//!   `allure-intelligence` and re-exported here

/// Environment and service configuration
pub mod environment;

pub use allure_intelligence::config::{
    AdaptationConfig, ConfigError, CrossTrainingConfig, IntelligenceConfig,
};
pub use environment::{PlannerConfig, ProviderSettings};
