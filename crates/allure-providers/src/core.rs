// ABOUTME: Core provider trait for fetching an athlete's activities over a week
// ABOUTME: Adds closure-backed providers and a timeout-bounded fetch helper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Activity Provider Seam
//!
//! `ActivityProvider` is the only I/O boundary of the adherence analysis.
//! Implementations return the athlete's activities for a Monday-to-Sunday
//! range. They may return a superset; callers restrict to the range again.
//!
//! Errors are surfaced as-is. Nothing here retries: backoff and fallback to
//! cached reports belong to the calling layer.
//!
//! A fetch is cancelled by dropping its future. [`fetch_with_timeout`] bounds
//! it with a deadline and turns an elapsed deadline into
//! `ProviderError::Timeout`.

use crate::errors::provider::{ProviderError, ProviderResult};
use crate::models::{ActivityRecord, WeekRange};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use tracing::{debug, warn};

/// Source of activity records for one athlete and week
#[async_trait]
pub trait ActivityProvider: Send + Sync {
    /// Provider name used in logs and errors
    fn name(&self) -> &str;

    /// Fetch the athlete's activities for the week
    async fn fetch_activities(
        &self,
        athlete_id: &str,
        range: WeekRange,
    ) -> ProviderResult<Vec<ActivityRecord>>;
}

#[async_trait]
impl<P: ActivityProvider + ?Sized> ActivityProvider for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn fetch_activities(
        &self,
        athlete_id: &str,
        range: WeekRange,
    ) -> ProviderResult<Vec<ActivityRecord>> {
        (**self).fetch_activities(athlete_id, range).await
    }
}

/// Provider backed by an async closure `(athlete_id, range) -> records`
pub struct FnActivityProvider<F> {
    name: String,
    fetch: F,
}

impl<F> FnActivityProvider<F> {
    /// Wrap a fetch function
    #[must_use]
    pub fn new(name: impl Into<String>, fetch: F) -> Self {
        Self {
            name: name.into(),
            fetch,
        }
    }
}

#[async_trait]
impl<F, Fut> ActivityProvider for FnActivityProvider<F>
where
    F: Fn(String, WeekRange) -> Fut + Send + Sync,
    Fut: Future<Output = ProviderResult<Vec<ActivityRecord>>> + Send,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_activities(
        &self,
        athlete_id: &str,
        range: WeekRange,
    ) -> ProviderResult<Vec<ActivityRecord>> {
        (self.fetch)(athlete_id.to_owned(), range).await
    }
}

/// Fetch activities, failing with `ProviderError::Timeout` once `timeout` elapses
///
/// # Errors
///
/// Returns the provider's own error, or `ProviderError::Timeout` when the
/// deadline passes first
pub async fn fetch_with_timeout(
    provider: &dyn ActivityProvider,
    athlete_id: &str,
    range: WeekRange,
    timeout: Duration,
) -> ProviderResult<Vec<ActivityRecord>> {
    let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
    debug!(
        provider = provider.name(),
        athlete_id,
        %range,
        timeout_ms,
        "fetching activities"
    );
    let fetch = provider.fetch_activities(athlete_id, range);
    if let Ok(result) = time::timeout(timeout, fetch).await {
        result
    } else {
        warn!(provider = provider.name(), athlete_id, %range, timeout_ms, "activity fetch timed out");
        Err(ProviderError::Timeout {
            provider: provider.name().to_owned(),
            timeout_ms,
        })
    }
}
