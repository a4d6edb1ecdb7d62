// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging, planned weeks, activity records and a two-week plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `allure`

use std::env;
use std::sync::Once;

use allure::models::{
    ActivityRecord, ActivityType, PerformanceEstimate, PlannedSession, PlannedWeek,
    SessionFeedback, SessionIntensity, SessionType, WeekRange,
};
use allure::plan::TrainingPlan;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc, Weekday};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

pub const ATHLETE: &str = "athlete-42";

/// Monday 2025-03-03, first day of every test plan
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

pub fn first_week_range() -> WeekRange {
    WeekRange::new(monday()).unwrap()
}

/// 07:00 UTC, `days` after the plan's first Monday
pub fn morning(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 3, 7, 0, 0).unwrap() + Duration::days(days)
}

pub fn session(
    day_of_week: Weekday,
    session_type: SessionType,
    duration_minutes: u32,
    intensity: SessionIntensity,
) -> PlannedSession {
    PlannedSession {
        day_of_week,
        session_type,
        title: format!("{session_type:?} run"),
        duration_minutes,
        intensity,
        target_zone: None,
    }
}

/// Monday 45 min easy, Wednesday 60 min intervals, Saturday 90 min long run
pub fn standard_sessions() -> Vec<PlannedSession> {
    vec![
        session(Weekday::Mon, SessionType::Easy, 45, SessionIntensity::Facile),
        session(
            Weekday::Wed,
            SessionType::Intervals,
            60,
            SessionIntensity::Difficile,
        ),
        session(
            Weekday::Sat,
            SessionType::LongRun,
            90,
            SessionIntensity::Facile,
        ),
    ]
}

pub fn planned_week(week_number: u32, zone_fingerprint: &str) -> PlannedWeek {
    PlannedWeek {
        week_number,
        phase: None,
        zone_fingerprint: zone_fingerprint.to_owned(),
        sessions: standard_sessions(),
    }
}

pub fn run(days: i64, distance_km: f64, minutes: f64) -> ActivityRecord {
    ActivityRecord::new(ActivityType::Run, distance_km, minutes, morning(days))
}

pub fn ride(days: i64, minutes: f64) -> ActivityRecord {
    ActivityRecord::new(ActivityType::Ride, minutes / 2.0, minutes, morning(days))
}

pub fn feedback(day_of_week: Weekday, rpe: u8) -> SessionFeedback {
    SessionFeedback {
        day_of_week,
        completed: true,
        rpe: Some(rpe),
    }
}

/// Plan at 15 km/h VMA with weeks 1 and 2 generated from its own zone set
pub fn two_week_plan() -> TrainingPlan {
    let estimate = PerformanceEstimate::new(15.0, "test").unwrap();
    let mut plan = TrainingPlan::new(ATHLETE, monday(), estimate).unwrap();
    for week_number in 1..=2 {
        let context = plan.generation_context(week_number).unwrap();
        plan.add_week(context.stamp(None, standard_sessions()))
            .unwrap();
    }
    plan
}
