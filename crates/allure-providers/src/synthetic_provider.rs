// ABOUTME: In-memory activity provider for development and testing
// ABOUTME: Supports per-athlete activity injection and failure injection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// RwLock poisoning errors are converted to ProviderError::ConfigurationError
// for proper error propagation through the application

//! # Synthetic Activity Provider
//!
//! Unlike a real tracker, the synthetic provider:
//!
//! - Requires no credentials
//! - Supports dynamic activity injection per athlete
//! - Can be told to fail (unreachable, unauthorized, or never answering)
//!   so error propagation and timeouts can be tested deterministically
//!
//! ## Thread Safety
//!
//! All data access is protected by `RwLock`; one instance can serve
//! concurrent analyses of different weeks.

use crate::core::ActivityProvider;
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::models::{ActivityRecord, WeekRange};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;
use tokio::time::sleep;

/// Default provider name
const SYNTHETIC: &str = "synthetic";

/// How long a hanging fetch sleeps before giving up on its own
const HANG_DURATION: Duration = Duration::from_secs(3600);

/// Failure the provider should simulate on every fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Behave like an unreachable service
    Unavailable,
    /// Behave like revoked credentials
    Unauthorized,
    /// Never answer, for timeout tests
    Hang,
}

/// In-memory provider keyed by athlete
pub struct SyntheticProvider {
    name: String,
    activities: RwLock<HashMap<String, Vec<ActivityRecord>>>,
    failure: RwLock<Option<FailureMode>>,
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticProvider {
    /// Create an empty provider
    #[must_use]
    pub fn new() -> Self {
        Self::with_name(SYNTHETIC)
    }

    /// Create an empty provider with a custom name
    #[must_use]
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activities: RwLock::new(HashMap::new()),
            failure: RwLock::new(None),
        }
    }

    /// Create a provider pre-loaded with one athlete's activities
    #[must_use]
    pub fn with_activities(athlete_id: &str, activities: Vec<ActivityRecord>) -> Self {
        let provider = Self::new();
        if let Ok(mut map) = provider.activities.write() {
            map.insert(athlete_id.to_owned(), activities);
        }
        provider
    }

    /// Add one activity for an athlete
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn add_activity(&self, athlete_id: &str, activity: ActivityRecord) -> ProviderResult<()> {
        self.activities
            .write()
            .map_err(|_| self.poisoned("activities"))?
            .entry(athlete_id.to_owned())
            .or_default()
            .push(activity);
        Ok(())
    }

    /// Replace all activities of an athlete
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn set_activities(
        &self,
        athlete_id: &str,
        activities: Vec<ActivityRecord>,
    ) -> ProviderResult<()> {
        self.activities
            .write()
            .map_err(|_| self.poisoned("activities"))?
            .insert(athlete_id.to_owned(), activities);
        Ok(())
    }

    /// Make every following fetch fail, or succeed again with `None`
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::ConfigurationError` if the internal `RwLock` is poisoned.
    pub fn set_failure(&self, failure: Option<FailureMode>) -> ProviderResult<()> {
        *self.failure.write().map_err(|_| self.poisoned("failure"))? = failure;
        Ok(())
    }

    fn poisoned(&self, lock: &str) -> ProviderError {
        ProviderError::ConfigurationError {
            provider: self.name.clone(),
            details: format!("RwLock poisoned: {lock} lock"),
        }
    }
}

#[async_trait]
impl ActivityProvider for SyntheticProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_activities(
        &self,
        athlete_id: &str,
        range: WeekRange,
    ) -> ProviderResult<Vec<ActivityRecord>> {
        let failure = *self.failure.read().map_err(|_| self.poisoned("failure"))?;
        match failure {
            Some(FailureMode::Unavailable) => {
                return Err(ProviderError::Unavailable {
                    provider: self.name.clone(),
                    reason: "simulated outage".to_owned(),
                });
            }
            Some(FailureMode::Unauthorized) => {
                return Err(ProviderError::AuthenticationFailed {
                    provider: self.name.clone(),
                    reason: "simulated revoked token".to_owned(),
                });
            }
            Some(FailureMode::Hang) => {
                sleep(HANG_DURATION).await;
                return Err(ProviderError::Unavailable {
                    provider: self.name.clone(),
                    reason: "simulated hang ended".to_owned(),
                });
            }
            None => {}
        }

        let activities = self
            .activities
            .read()
            .map_err(|_| self.poisoned("activities"))?
            .get(athlete_id)
            .map(|records| {
                records
                    .iter()
                    .filter(|record| range.contains(record.start_date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(activities)
    }
}
