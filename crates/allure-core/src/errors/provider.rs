// ABOUTME: Structured error types for activity feed operations
// ABOUTME: Distinguishes unreachable, unauthorized, timed-out, and malformed provider responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while fetching activity records from an external provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider could not be reached
    #[error("Provider {provider} unavailable: {reason}")]
    Unavailable {
        /// Provider name
        provider: String,
        /// Failure details
        reason: String,
    },

    /// Provider rejected the credentials
    #[error("Authentication failed for {provider}: {reason}")]
    AuthenticationFailed {
        /// Provider name
        provider: String,
        /// Failure details
        reason: String,
    },

    /// Fetch did not complete within the caller's deadline
    #[error("Provider {provider} timed out after {timeout_ms}ms")]
    Timeout {
        /// Provider name
        provider: String,
        /// Deadline that elapsed, in milliseconds
        timeout_ms: u64,
    },

    /// Provider answered with a body we could not interpret
    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse {
        /// Provider name
        provider: String,
        /// Parse failure details
        reason: String,
    },

    /// Provider answered with a non-success status
    #[error("{provider} API error ({status}): {message}")]
    ApiError {
        /// Provider name
        provider: String,
        /// HTTP status code
        status: u16,
        /// Error message from the provider
        message: String,
    },

    /// Provider is misconfigured or its local state is unusable
    #[error("Configuration error for {provider}: {details}")]
    ConfigurationError {
        /// Provider name
        provider: String,
        /// Configuration issue details
        details: String,
    },
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

impl ProviderError {
    /// Name of the provider that failed
    #[must_use]
    pub fn provider_name(&self) -> &str {
        match self {
            Self::Unavailable { provider, .. }
            | Self::AuthenticationFailed { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::InvalidResponse { provider, .. }
            | Self::ApiError { provider, .. }
            | Self::ConfigurationError { provider, .. } => provider,
        }
    }

    /// Whether a later attempt could succeed. Informational only: nothing in
    /// this workspace retries, that belongs to the calling layer.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Unavailable { .. } | Self::Timeout { .. } => true,
            Self::ApiError { status, .. } => *status >= 500,
            Self::AuthenticationFailed { .. }
            | Self::InvalidResponse { .. }
            | Self::ConfigurationError { .. } => false,
        }
    }

    const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Unavailable { .. } | Self::Timeout { .. } => {
                ErrorCode::ExternalServiceUnavailable
            }
            Self::AuthenticationFailed { .. } => ErrorCode::ExternalAuthFailed,
            Self::InvalidResponse { .. }
            | Self::ApiError { .. }
            | Self::ConfigurationError { .. } => ErrorCode::ExternalServiceError,
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        Self::new(error.error_code(), error.to_string()).with_source(error)
    }
}
