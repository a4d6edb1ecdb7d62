// ABOUTME: Activity feed providers for the adherence analysis
// ABOUTME: Provider trait, timeout-bounded fetch, synthetic and HTTP implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Activity feed providers and core abstractions.
//!
//! The compliance analysis never talks to a fitness tracker directly. It goes
//! through the [`ActivityProvider`] trait so the network boundary can be
//! swapped for an in-memory provider in tests.

// Re-export allure-core modules so provider files can keep `use crate::errors::*` etc.
pub use allure_core::constants;
pub use allure_core::errors;
pub use allure_core::models;

/// Core provider trait and timeout-bounded fetch
pub mod core;
/// Shared HTTP client for provider API calls
pub mod http_client;
/// HTTP activity provider for tracker REST APIs
pub mod http_provider;
/// In-memory provider for development and tests
pub mod synthetic_provider;

pub use crate::core::{fetch_with_timeout, ActivityProvider, FnActivityProvider};
pub use allure_core::errors::provider::{ProviderError, ProviderResult};
pub use http_client::{initialize_shared_client, shared_client, shared_client_timeouts};
pub use http_provider::HttpActivityProvider;
pub use synthetic_provider::{FailureMode, SyntheticProvider};
