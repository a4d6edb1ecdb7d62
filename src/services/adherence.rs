// ABOUTME: Weekly adherence review service: fetch activities, score the week, adapt the next one
// ABOUTME: Bounds the fetch with a timeout and enforces the per-athlete review cooldown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::config::PlannerConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{AdaptationAdvisor, AdaptationApplier, WeekComplianceAnalyzer};
use crate::logging::AppLogger;
use crate::models::{AdaptationSuggestion, ComplianceReport, PlannedWeek, SessionFeedback};
use crate::plan::TrainingPlan;
use crate::providers::ActivityProvider;
use crate::rate_limiting::{ReviewRateLimitStatus, ReviewRateLimiter};

const SECONDS_PER_HOUR: i64 = 3600;

/// Outcome of one weekly review
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyReview {
    /// Plan the review belongs to
    pub plan_id: Uuid,
    /// Reviewed week
    pub week_number: u32,
    /// Compliance of the reviewed week
    pub report: ComplianceReport,
    /// Advice for the following week
    pub suggestion: AdaptationSuggestion,
    /// Following week with the advice applied
    pub revised_next_week: PlannedWeek,
}

/// Runs weekly reviews against one activity provider
pub struct AdherenceService {
    provider: Arc<dyn ActivityProvider>,
    analyzer: WeekComplianceAnalyzer,
    advisor: AdaptationAdvisor,
    applier: AdaptationApplier,
    rate_limiter: Option<ReviewRateLimiter>,
}

impl AdherenceService {
    /// Service with default analysis settings, no fetch timeout and no cooldown
    #[must_use]
    pub fn new(provider: Arc<dyn ActivityProvider>) -> Self {
        Self {
            provider,
            analyzer: WeekComplianceAnalyzer::default(),
            advisor: AdaptationAdvisor::default(),
            applier: AdaptationApplier::default(),
            rate_limiter: None,
        }
    }

    /// Service using the configured fetch timeout and review cooldown
    #[must_use]
    pub fn from_config(config: &PlannerConfig, provider: Arc<dyn ActivityProvider>) -> Self {
        let mut service = Self::new(provider);
        service.analyzer = service.analyzer.with_fetch_timeout(config.fetch_timeout);
        service.rate_limiter = Some(ReviewRateLimiter::new(config.review_cooldown_days));
        service
    }

    /// Replace the compliance analyzer
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: WeekComplianceAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Replace the advisor
    #[must_use]
    pub fn with_advisor(mut self, advisor: AdaptationAdvisor) -> Self {
        self.advisor = advisor;
        self
    }

    /// Replace the applier
    #[must_use]
    pub fn with_applier(mut self, applier: AdaptationApplier) -> Self {
        self.applier = applier;
        self
    }

    /// Enforce a review cooldown; clones of the limiter share state
    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: ReviewRateLimiter) -> Self {
        self.rate_limiter = Some(rate_limiter);
        self
    }

    /// Name of the underlying activity provider
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Cooldown state of an athlete as of `now`, `None` without a limiter
    ///
    /// Nothing is recorded.
    #[must_use]
    pub fn review_status(
        &self,
        athlete_id: &str,
        now: DateTime<Utc>,
    ) -> Option<ReviewRateLimitStatus> {
        self.rate_limiter
            .as_ref()
            .map(|limiter| limiter.check(athlete_id, now))
    }

    /// Review `week_number` of `plan` now
    ///
    /// # Errors
    ///
    /// See [`Self::review_at`]
    pub async fn review(
        &self,
        plan: &TrainingPlan,
        week_number: u32,
        feedback: &[SessionFeedback],
    ) -> AppResult<WeeklyReview> {
        self.review_at(plan, week_number, feedback, Utc::now()).await
    }

    /// Review `week_number` of `plan` as of `now`
    ///
    /// The plan is not modified; pass the result to [`Self::apply_review`] to
    /// install the revised week. A review that fails does not consume the
    /// athlete's cooldown.
    ///
    /// # Errors
    ///
    /// - `ValueOutOfRange` if the plan has no week `week_number`
    /// - `InvalidInput` if the plan lacks the week after it
    /// - `RateLimitExceeded` while the athlete is in cooldown
    /// - `InvariantViolation` if the week has two sessions on one day
    /// - an external-service error if the activity fetch fails or times out
    pub async fn review_at(
        &self,
        plan: &TrainingPlan,
        week_number: u32,
        feedback: &[SessionFeedback],
        now: DateTime<Utc>,
    ) -> AppResult<WeeklyReview> {
        let week = plan.week(week_number).ok_or_else(|| {
            AppError::value_out_of_range(format!("plan {} has no week {week_number}", plan.id()))
        })?;
        let next_week = plan.next_week_after(week_number).ok_or_else(|| {
            AppError::invalid_input(format!(
                "plan {} has no week after week {week_number} to adapt",
                plan.id()
            ))
        })?;

        let previous_review = self.acquire(plan.athlete_id(), now)?;

        match self.run(plan, week, next_week, feedback).await {
            Ok(review) => {
                AppLogger::log_review(
                    plan.athlete_id(),
                    week_number,
                    review.report.compliance_percent,
                    review.suggestion.verdict.as_str(),
                );
                Ok(review)
            }
            Err(e) => {
                if let Some(limiter) = &self.rate_limiter {
                    limiter.rollback(plan.athlete_id(), previous_review);
                }
                Err(e)
            }
        }
    }

    /// Install a review's revised week into the plan, returning the week it replaced
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the review belongs to another plan, plus the
    /// checks of [`TrainingPlan::replace_week`]
    pub fn apply_review(plan: &mut TrainingPlan, review: &WeeklyReview) -> AppResult<PlannedWeek> {
        if review.plan_id != plan.id() {
            return Err(AppError::invalid_input(format!(
                "review belongs to plan {}, not {}",
                review.plan_id,
                plan.id()
            )));
        }
        plan.replace_week(review.revised_next_week.clone())
    }

    /// Returns the previous review time, for rollback
    fn acquire(&self, athlete_id: &str, now: DateTime<Utc>) -> AppResult<Option<DateTime<Utc>>> {
        let Some(limiter) = &self.rate_limiter else {
            return Ok(None);
        };
        let status = limiter.try_acquire(athlete_id, now);
        if status.is_limited {
            let retry_after_seconds = status.retry_after_seconds.unwrap_or_default();
            AppLogger::log_review_throttled(
                athlete_id,
                (retry_after_seconds + SECONDS_PER_HOUR - 1) / SECONDS_PER_HOUR,
            );
            let next = status
                .next_allowed_at
                .map_or_else(|| "later".to_owned(), |at| at.to_rfc3339());
            return Err(AppError::rate_limited(format!(
                "athlete {athlete_id} was reviewed recently, next review allowed at {next}"
            )));
        }
        Ok(status.last_review_at)
    }

    async fn run(
        &self,
        plan: &TrainingPlan,
        week: &PlannedWeek,
        next_week: &PlannedWeek,
        feedback: &[SessionFeedback],
    ) -> AppResult<WeeklyReview> {
        let range = plan.week_range(week.week_number);
        let started = Instant::now();
        let report = self
            .analyzer
            .compare(week, self.provider.as_ref(), plan.athlete_id(), range, feedback)
            .await;
        AppLogger::log_activity_fetch(
            self.provider.name(),
            plan.athlete_id(),
            report.is_ok(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        let report = report?;

        let suggestion = self.advisor.advise(&report, next_week);
        let revised_next_week = self.applier.apply(next_week, &suggestion);
        debug!(
            week = week.week_number,
            before = next_week.total_minutes(),
            after = revised_next_week.total_minutes(),
            "next week revised"
        );

        Ok(WeeklyReview {
            plan_id: plan.id(),
            week_number: week.week_number,
            report,
            suggestion,
            revised_next_week,
        })
    }
}
