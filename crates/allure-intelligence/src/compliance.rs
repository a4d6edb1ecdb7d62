// ABOUTME: Compares a planned week with the activities recorded in the same Monday-Sunday range
// ABOUTME: Aggregate session counting, cross-training equivalence, bounded partial credit and RPE
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Week Compliance Analyzer
//!
//! Adherence is aggregated at week level: every running activity in the
//! range counts as one done session, regardless of which planned day it
//! lands on. Non-running endurance activity is converted into
//! running-equivalent minutes through [`CrossTrainingConfig`].
//!
//! ## Partial credit
//!
//! ```text
//! counted = min(done, planned)
//! missed  = planned - counted
//! credit  = min(missed, equivalent_minutes / minutes_per_session_credit) * credit_per_session
//! percent = round(100 * (counted + credit) / planned), clamped to [0, 100]
//! ```
//!
//! Credit only ever covers missed sessions, so cross-training alone can never
//! reach 100% and an empty week always scores 0.

use crate::config::{CrossTrainingConfig, IntelligenceConfig};
use crate::constants::rpe;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, ComplianceReport, PlannedWeek, SessionFeedback, WeekRange};
use allure_providers::{fetch_with_timeout, ActivityProvider};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Running and cross-training totals of one week
#[derive(Debug, Default)]
struct WeekTotals {
    running_sessions: u32,
    running_distance_km: f64,
    running_minutes: f64,
    cross_training_sessions: u32,
    cross_training_equivalent_minutes: f64,
}

/// Weekly compliance analyzer
#[derive(Debug, Clone)]
pub struct WeekComplianceAnalyzer {
    cross_training: CrossTrainingConfig,
    fetch_timeout: Option<Duration>,
}

impl Default for WeekComplianceAnalyzer {
    fn default() -> Self {
        Self::new(IntelligenceConfig::global().cross_training.clone())
    }
}

impl WeekComplianceAnalyzer {
    /// Create an analyzer with explicit cross-training parameters
    #[must_use]
    pub fn new(cross_training: CrossTrainingConfig) -> Self {
        Self {
            cross_training,
            fetch_timeout: None,
        }
    }

    /// Bound every activity fetch by `timeout`
    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    /// Cross-training parameters in use
    #[must_use]
    pub const fn cross_training(&self) -> &CrossTrainingConfig {
        &self.cross_training
    }

    /// Fetch the week's activities and score them
    ///
    /// The planned week is validated before any I/O happens.
    ///
    /// # Errors
    ///
    /// - `InvariantViolation` if the planned week has two sessions on one day
    /// - an external-service error if the provider fails, times out or rejects
    ///   the credentials; no report is produced in that case
    pub async fn compare(
        &self,
        week: &PlannedWeek,
        provider: &dyn ActivityProvider,
        athlete_id: &str,
        range: WeekRange,
        feedback: &[SessionFeedback],
    ) -> AppResult<ComplianceReport> {
        week.validate()?;

        let fetched = match self.fetch_timeout {
            Some(timeout) => fetch_with_timeout(provider, athlete_id, range, timeout).await,
            None => provider.fetch_activities(athlete_id, range).await,
        };
        let records = fetched.map_err(|e| {
            warn!(
                provider = e.provider_name(),
                week = week.week_number,
                error = %e,
                "activity fetch failed, no compliance report produced"
            );
            AppError::from(e)
        })?;

        self.compare_records(week, &records, range, feedback)
    }

    /// Score a week against already-fetched activity records
    ///
    /// Records outside `range` are ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the planned week has two sessions on one day.
    pub fn compare_records(
        &self,
        week: &PlannedWeek,
        records: &[ActivityRecord],
        range: WeekRange,
        feedback: &[SessionFeedback],
    ) -> AppResult<ComplianceReport> {
        week.validate()?;

        let totals = self.totals(records.iter().filter(|r| range.contains(r.start_date)));
        let sessions_planned = week.sessions_planned();
        let compliance_percent = self.compliance_percent(
            sessions_planned,
            totals.running_sessions,
            totals.cross_training_equivalent_minutes,
        );
        let avg_rpe = average_rpe(feedback);

        let report = ComplianceReport {
            week_number: week.week_number,
            sessions_planned,
            sessions_done: totals.running_sessions,
            compliance_percent,
            avg_rpe,
            cross_training_equivalent_minutes: totals.cross_training_equivalent_minutes,
            cross_training_sessions: totals.cross_training_sessions,
            running_distance_km: round_to_tenth(totals.running_distance_km),
            running_minutes: round_to_tenth(totals.running_minutes),
            summary_text: String::new(),
        };
        let report = ComplianceReport {
            summary_text: summarize(&report),
            ..report
        };

        info!(
            week = report.week_number,
            planned = report.sessions_planned,
            done = report.sessions_done,
            compliance = report.compliance_percent,
            cross_minutes = report.cross_training_equivalent_minutes,
            "compliance computed"
        );
        Ok(report)
    }

    /// Compliance percentage including cross-training partial credit
    #[must_use]
    pub fn compliance_percent(
        &self,
        sessions_planned: u32,
        sessions_done: u32,
        cross_training_equivalent_minutes: f64,
    ) -> u8 {
        if sessions_planned == 0 {
            return 0;
        }
        let counted = sessions_done.min(sessions_planned);
        let missed = sessions_planned - counted;
        let credit = self.cross_training_credit(missed, cross_training_equivalent_minutes);

        let ratio = (f64::from(counted) + credit) / f64::from(sessions_planned);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // Safe: clamped to [0, 100] before the cast
        let percent = (ratio * 100.0).round().clamp(0.0, 100.0) as u8;
        percent
    }

    /// Fraction of sessions credited for cross-training, never more than `missed` covers
    #[must_use]
    pub fn cross_training_credit(&self, missed: u32, equivalent_minutes: f64) -> f64 {
        if missed == 0 || !equivalent_minutes.is_finite() || equivalent_minutes <= 0.0 {
            return 0.0;
        }
        let sessions = equivalent_minutes / self.cross_training.minutes_per_session_credit;
        let covered = sessions.min(f64::from(missed));
        covered * self.cross_training.credit_per_session
    }

    fn totals<'a>(&self, records: impl Iterator<Item = &'a ActivityRecord>) -> WeekTotals {
        let mut totals = WeekTotals::default();
        for record in records {
            if !record.moving_time_minutes.is_finite() || record.moving_time_minutes < 0.0 {
                warn!(
                    activity = %record.activity_type,
                    start = %record.start_date,
                    "ignoring activity with invalid moving time"
                );
                continue;
            }

            if record.activity_type.is_running() {
                totals.running_sessions += 1;
                totals.running_distance_km += record.distance_km.max(0.0);
                totals.running_minutes += record.moving_time_minutes;
            } else if let Some(coefficient) = self.cross_training.coefficient(&record.activity_type)
            {
                totals.cross_training_sessions += 1;
                totals.cross_training_equivalent_minutes +=
                    record.moving_time_minutes * coefficient;
            } else {
                debug!(
                    activity = %record.activity_type,
                    "activity carries no running-equivalent load"
                );
            }
        }
        totals
    }
}

/// Mean RPE over completed sessions with valid feedback
///
/// RPE values outside 1..=10 are dropped with a warning. The mean is kept
/// unrounded since the advisor compares it against its thresholds.
#[must_use]
pub fn average_rpe(feedback: &[SessionFeedback]) -> Option<f64> {
    let values: Vec<f64> = feedback
        .iter()
        .filter(|entry| entry.completed)
        .filter_map(|entry| {
            let value = entry.rpe?;
            if (rpe::MIN..=rpe::MAX).contains(&value) {
                Some(f64::from(value))
            } else {
                warn!(day = %entry.day_of_week, rpe = value, "dropping out-of-range RPE");
                None
            }
        })
        .collect();

    if values.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)] // Safe: feedback lists are far below 2^52 entries
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Some(mean)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn summarize(report: &ComplianceReport) -> String {
    let mut summary = format!(
        "Week {}: {}/{} sessions done ({}% compliance)",
        report.week_number, report.sessions_done, report.sessions_planned, report.compliance_percent
    );
    if report.cross_training_sessions > 0 {
        summary.push_str(&format!(
            ", {} cross-training session(s) worth {:.0} running minutes",
            report.cross_training_sessions, report.cross_training_equivalent_minutes
        ));
    }
    if let Some(rpe) = report.avg_rpe {
        summary.push_str(&format!(", average RPE {rpe:.1}"));
    }
    summary
}
