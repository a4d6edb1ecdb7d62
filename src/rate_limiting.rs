// ABOUTME: Cooldown policy for comprehensive weekly reviews, one per athlete per window
// ABOUTME: Sharded concurrent map of last review timestamps with atomic acquire and rollback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Review Rate Limiting
//!
//! Comprehensive reviews are expensive for the calling layer, so each athlete
//! gets one per cooldown window (7 days by default). The limiter only tracks
//! timestamps; the analysis itself knows nothing about it.

use chrono::{DateTime, Duration, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::Serialize;
use std::sync::Arc;

/// Default number of days between two reviews of the same athlete
pub const DEFAULT_REVIEW_COOLDOWN_DAYS: u32 = 7;

/// Outcome of a rate limit check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRateLimitStatus {
    /// Whether the review is refused
    pub is_limited: bool,
    /// Last accepted review before this check
    pub last_review_at: Option<DateTime<Utc>>,
    /// Earliest time the next review is accepted
    pub next_allowed_at: Option<DateTime<Utc>>,
    /// Seconds until `next_allowed_at`, only when limited
    pub retry_after_seconds: Option<i64>,
}

/// Per-athlete review limiter
///
/// Clones share state.
#[derive(Debug, Clone)]
pub struct ReviewRateLimiter {
    /// Athlete id -> time of the last accepted review
    state: Arc<DashMap<String, DateTime<Utc>>>,
    cooldown: Duration,
}

impl Default for ReviewRateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_REVIEW_COOLDOWN_DAYS)
    }
}

impl ReviewRateLimiter {
    /// Create a limiter allowing one review per `cooldown_days`
    #[must_use]
    pub fn new(cooldown_days: u32) -> Self {
        Self {
            state: Arc::new(DashMap::new()),
            cooldown: Duration::days(i64::from(cooldown_days)),
        }
    }

    /// Cooldown window
    #[must_use]
    pub const fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Inspect the limit without recording anything
    #[must_use]
    pub fn check(&self, athlete_id: &str, now: DateTime<Utc>) -> ReviewRateLimitStatus {
        let last = self.state.get(athlete_id).map(|entry| *entry.value());
        self.status(last, now)
    }

    /// Record a review at `now` unless the athlete is still in cooldown
    ///
    /// Check and record happen under one shard lock.
    #[must_use]
    pub fn try_acquire(&self, athlete_id: &str, now: DateTime<Utc>) -> ReviewRateLimitStatus {
        match self.state.entry(athlete_id.to_owned()) {
            Entry::Occupied(mut entry) => {
                let status = self.status(Some(*entry.get()), now);
                if !status.is_limited {
                    entry.insert(now);
                }
                status
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
                self.status(None, now)
            }
        }
    }

    /// Undo an acquisition whose review did not complete
    ///
    /// `previous` is the `last_review_at` returned by [`Self::try_acquire`].
    pub fn rollback(&self, athlete_id: &str, previous: Option<DateTime<Utc>>) {
        match previous {
            Some(at) => {
                self.state.insert(athlete_id.to_owned(), at);
            }
            None => {
                self.state.remove(athlete_id);
            }
        }
    }

    fn status(&self, last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> ReviewRateLimitStatus {
        let next_allowed_at = last.map(|at| at + self.cooldown);
        let is_limited = next_allowed_at.is_some_and(|next| now < next);
        ReviewRateLimitStatus {
            is_limited,
            last_review_at: last,
            next_allowed_at,
            retry_after_seconds: next_allowed_at
                .filter(|_| is_limited)
                .map(|next| (next - now).num_seconds()),
        }
    }
}
