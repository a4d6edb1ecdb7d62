// ABOUTME: Configuration error types for intelligence parameter validation
// ABOUTME: Defines error variants for invalid ranges, inconsistent weights and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for intelligence parameter validation.

use crate::errors::AppError;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., coefficient not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Parameters that contradict each other (e.g., min above max)
    #[error("Invalid weights: {0}")]
    InvalidWeights(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
