// ABOUTME: HTTP activity provider for fitness tracker REST APIs
// ABOUTME: Maps tracker DTOs into activity records and status codes into provider errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # HTTP Activity Provider
//!
//! Fetches `GET {base_url}/athletes/{athlete_id}/activities?after=..&before=..`
//! with an optional bearer token. `before` is exclusive, so it carries the
//! Monday after the requested week. The tracker answers with Strava-shaped
//! records (meters, seconds) which are converted into [`ActivityRecord`]s.
//!
//! Token refresh is the tracker integration's business; an expired token
//! surfaces here as `ProviderError::AuthenticationFailed`.

use crate::core::ActivityProvider;
use crate::errors::provider::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use crate::models::{ActivityRecord, ActivityType, WeekRange};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

/// Default provider name
const PROVIDER_NAME: &str = "tracker";

/// Tracker activity DTO
///
/// Strava sends both the legacy `type` and the finer `sport_type`.
#[derive(Debug, Deserialize)]
struct TrackerActivity {
    #[serde(default)]
    sport_type: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    /// Meters
    #[serde(default)]
    distance: f64,
    /// Seconds
    moving_time: u64,
    start_date: DateTime<Utc>,
}

impl From<TrackerActivity> for ActivityRecord {
    fn from(dto: TrackerActivity) -> Self {
        #[allow(clippy::cast_precision_loss)] // Safe: activity durations are far below 2^52 seconds
        let moving_time_minutes = dto.moving_time as f64 / 60.0;
        let sport = dto.sport_type.or(dto.kind).unwrap_or_default();
        Self::new(
            ActivityType::from_provider_string(&sport),
            dto.distance / 1000.0,
            moving_time_minutes,
            dto.start_date,
        )
    }
}

/// Activity provider backed by a tracker REST API
pub struct HttpActivityProvider {
    name: String,
    base_url: String,
    access_token: Option<String>,
    client: Client,
}

impl HttpActivityProvider {
    /// Create a provider using the shared HTTP client
    #[must_use]
    pub fn new(base_url: impl Into<String>, access_token: Option<String>) -> Self {
        Self::with_client(base_url, access_token, shared_client().clone())
    }

    /// Create a provider with a dedicated HTTP client
    #[must_use]
    pub fn with_client(
        base_url: impl Into<String>,
        access_token: Option<String>,
        client: Client,
    ) -> Self {
        Self {
            name: PROVIDER_NAME.to_owned(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            access_token,
            client,
        }
    }

    /// Override the provider name used in errors and logs
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    fn activities_url(&self, athlete_id: &str) -> String {
        format!("{}/athletes/{athlete_id}/activities", self.base_url)
    }

    fn map_transport_error(&self, error: &reqwest::Error) -> ProviderError {
        if error.is_timeout() {
            ProviderError::Timeout {
                provider: self.name.clone(),
                timeout_ms: 0,
            }
        } else {
            ProviderError::Unavailable {
                provider: self.name.clone(),
                reason: error.to_string(),
            }
        }
    }

    fn map_status(&self, status: StatusCode, body: String) -> ProviderError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ProviderError::AuthenticationFailed {
                    provider: self.name.clone(),
                    reason: format!("tracker answered {status}"),
                }
            }
            _ if status.is_server_error() => ProviderError::Unavailable {
                provider: self.name.clone(),
                reason: format!("tracker answered {status}: {body}"),
            },
            _ => ProviderError::ApiError {
                provider: self.name.clone(),
                status: status.as_u16(),
                message: body,
            },
        }
    }
}

#[async_trait]
impl ActivityProvider for HttpActivityProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_activities(
        &self,
        athlete_id: &str,
        range: WeekRange,
    ) -> ProviderResult<Vec<ActivityRecord>> {
        let url = self.activities_url(athlete_id);
        debug!(provider = %self.name, %url, %range, "requesting tracker activities");

        let mut request = self.client.get(&url).query(&[
            ("after", range.start().to_string()),
            ("before", range.end_exclusive().to_string()),
        ]);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(provider = %self.name, status = status.as_u16(), "tracker request failed");
            return Err(self.map_status(status, body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(&e))?;
        let activities: Vec<TrackerActivity> =
            serde_json::from_str(&body).map_err(|e| ProviderError::InvalidResponse {
                provider: self.name.clone(),
                reason: e.to_string(),
            })?;

        Ok(activities.into_iter().map(ActivityRecord::from).collect())
    }
}
