// ABOUTME: Planned sessions, planned weeks, and Monday-anchored week ranges
// ABOUTME: Validates the one-session-per-day rule before any aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::zones::ZoneName;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Intensity label attached to a planned session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionIntensity {
    /// Easy effort
    #[serde(rename = "Facile")]
    Facile,
    /// Moderate effort
    #[serde(rename = "Modéré", alias = "Modere")]
    Modere,
    /// Hard effort
    #[serde(rename = "Difficile")]
    Difficile,
}

impl SessionIntensity {
    /// Label shown in the plan
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Facile => "Facile",
            Self::Modere => "Modéré",
            Self::Difficile => "Difficile",
        }
    }
}

impl fmt::Display for SessionIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of planned running session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Easy endurance run
    Easy,
    /// Long run
    LongRun,
    /// Tempo or threshold run
    Tempo,
    /// Interval workout
    Intervals,
    /// Recovery jog
    Recovery,
    /// Race or time trial
    Race,
}

/// Periodization phase of a week, referenced but never computed here
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhase {
    /// Base building
    Base,
    /// Development
    Development,
    /// Race-specific block
    Specific,
    /// Taper
    Taper,
}

/// One prescribed session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedSession {
    /// Day the session is scheduled on
    pub day_of_week: Weekday,
    /// Session kind
    #[serde(rename = "type")]
    pub session_type: SessionType,
    /// Session title, used as its identity within the week
    pub title: String,
    /// Prescribed duration in minutes
    pub duration_minutes: u32,
    /// Intensity label
    pub intensity: SessionIntensity,
    /// Pace zone the session targets, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_zone: Option<ZoneName>,
}

/// A week of prescribed sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedWeek {
    /// 1-based week number within the plan
    pub week_number: u32,
    /// Periodization phase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<TrainingPhase>,
    /// Fingerprint of the `ZoneSet` the week was generated against
    pub zone_fingerprint: String,
    /// Sessions, at most one per day
    pub sessions: Vec<PlannedSession>,
}

impl PlannedWeek {
    /// Number of prescribed sessions
    #[must_use]
    pub fn sessions_planned(&self) -> u32 {
        u32::try_from(self.sessions.len()).unwrap_or(u32::MAX)
    }

    /// Total prescribed minutes
    #[must_use]
    pub fn total_minutes(&self) -> u32 {
        self.sessions.iter().map(|s| s.duration_minutes).sum()
    }

    /// Check that no two sessions share a day
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvariantViolation` naming the first duplicated day
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::with_capacity(self.sessions.len());
        for session in &self.sessions {
            if !seen.insert(session.day_of_week) {
                return Err(AppError::invariant_violation(format!(
                    "week {} has two sessions on {}",
                    self.week_number, session.day_of_week
                )));
            }
        }
        Ok(())
    }
}

/// Inclusive Monday-to-Sunday date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct WeekRange {
    start: NaiveDate,
}

impl WeekRange {
    /// Range starting on the given Monday
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when `monday` is not a Monday
    pub fn new(monday: NaiveDate) -> AppResult<Self> {
        if monday.weekday() != Weekday::Mon {
            return Err(AppError::invalid_input(format!(
                "week ranges start on Monday, {monday} is a {}",
                monday.weekday()
            )));
        }
        Ok(Self { start: monday })
    }

    /// Range of the week that contains `date`
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let offset = i64::from(date.weekday().num_days_from_monday());
        Self {
            start: date - Duration::days(offset),
        }
    }

    /// Range of the `week_number`-th week of a plan starting in the week of `plan_start`
    #[must_use]
    pub fn nth_week(plan_start: NaiveDate, week_number: u32) -> Self {
        let first = Self::containing(plan_start);
        let weeks = i64::from(week_number.saturating_sub(1));
        Self {
            start: first.start + Duration::weeks(weeks),
        }
    }

    /// Monday
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Sunday
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    /// Monday of the following week, the exclusive end of the range
    #[must_use]
    pub fn end_exclusive(&self) -> NaiveDate {
        self.start + Duration::weeks(1)
    }

    /// Whether a timestamp falls in the range (UTC calendar date)
    #[must_use]
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let date = timestamp.date_naive();
        date >= self.start && date <= self.end()
    }
}

impl TryFrom<NaiveDate> for WeekRange {
    type Error = AppError;

    fn try_from(monday: NaiveDate) -> AppResult<Self> {
        Self::new(monday)
    }
}

impl From<WeekRange> for NaiveDate {
    fn from(range: WeekRange) -> Self {
        range.start
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end())
    }
}
