// ABOUTME: Unified error handling for the calibration and adaptation engine
// ABOUTME: Defines error codes, the AppError type, and conversions from provider failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns `AppResult<T>`. The
//! `ErrorCode` carried by an `AppError` tells the caller which recovery
//! policy applies:
//!
//! - `InvalidFormat`: an unparseable field, the caller may drop it and continue
//! - `InvalidInput`: a computation received unusable input and is not retried
//! - `InvariantViolation`: a structural rule was broken upstream (duplicate days, foreign `ZoneSet`)
//! - `ExternalService*`: the activity feed failed, surfaced as-is without retry

/// Provider-specific error types
pub mod provider;

pub use provider::{ProviderError, ProviderResult};

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use thiserror::Error;

/// Standard error codes used throughout the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Free-form text could not be parsed
    InvalidFormat = 3000,
    /// Input is structurally valid but unusable
    InvalidInput = 3001,
    /// Value outside the accepted range
    ValueOutOfRange = 3002,
    /// A structural invariant of the domain was broken
    InvariantViolation = 3003,

    // Rate Limiting (4000-4999)
    /// The caller exceeded a usage policy
    RateLimitExceeded = 4000,

    // External Services (5000-5999)
    /// The activity feed returned an error
    ExternalServiceError = 5000,
    /// The activity feed is unreachable or timed out
    ExternalServiceUnavailable = 5001,
    /// The activity feed rejected our credentials
    ExternalAuthFailed = 5002,

    // Configuration (6000-6999)
    /// Configuration is invalid
    ConfigInvalid = 6000,

    // Internal Errors (9000-9999)
    /// Data serialization/deserialization failed
    SerializationError = 9000,
    /// Unexpected internal failure
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidFormat | Self::InvalidInput | Self::ValueOutOfRange => 400,
            Self::InvariantViolation => 409,
            Self::RateLimitExceeded => 429,
            Self::ExternalServiceError | Self::ExternalServiceUnavailable => 502,
            Self::ExternalAuthFailed => 503,
            Self::ConfigInvalid | Self::SerializationError | Self::InternalError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidFormat => "The data format is invalid",
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::InvariantViolation => "A domain invariant was violated",
            Self::RateLimitExceeded => "Rate limit exceeded",
            Self::ExternalServiceError => "The activity provider encountered an error",
            Self::ExternalServiceUnavailable => "The activity provider is currently unavailable",
            Self::ExternalAuthFailed => "Authentication with the activity provider failed",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether this code describes a failure of the external activity feed
    #[must_use]
    pub const fn is_external(self) -> bool {
        matches!(
            self,
            Self::ExternalServiceError
                | Self::ExternalServiceUnavailable
                | Self::ExternalAuthFailed
        )
    }
}

/// Unified error type for the workspace
#[derive(Debug, Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Unparseable free-form text; the offending text is kept in the message
    #[must_use]
    pub fn invalid_format(text: &str) -> Self {
        Self::new(
            ErrorCode::InvalidFormat,
            format!("unrecognized duration '{text}'"),
        )
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Value out of range
    #[must_use]
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Domain invariant violated
    #[must_use]
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvariantViolation, message)
    }

    /// Rate limit exceeded
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RateLimitExceeded, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Whether the activity feed caused this error
    #[must_use]
    pub const fn is_external_fetch(&self) -> bool {
        self.code.is_external()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}
