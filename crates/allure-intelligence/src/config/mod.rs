// ABOUTME: Configuration module for allure-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Cross-training and adaptation parameters
pub mod intelligence;

pub use intelligence::{AdaptationConfig, ConfigError, CrossTrainingConfig, IntelligenceConfig};
