// ABOUTME: Integration tests for the training plan aggregate
// ABOUTME: Zone set ownership, week generation context, week insertion rules and persistence checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use allure::errors::ErrorCode;
use allure::models::{
    PerformanceEstimate, RaceQuestionnaire, SessionIntensity, SessionType, TrainingPhase,
};
use allure::plan::TrainingPlan;
use chrono::{Duration, NaiveDate, Weekday};
use common::{monday, planned_week, session, standard_sessions, two_week_plan, ATHLETE};

#[test]
fn test_plan_from_questionnaire() {
    common::init_test_logging();
    let questionnaire = RaceQuestionnaire {
        time_10k: Some("45:00".to_owned()),
        ..RaceQuestionnaire::default()
    };
    let plan = TrainingPlan::from_questionnaire(ATHLETE, monday(), &questionnaire).unwrap();

    // 10 km in 45:00 is 13.33 km/h, at 90% of VMA
    assert!((plan.estimate().vma_kmh() - 14.81).abs() < 0.01);
    assert!((plan.zone_set().source_vma_kmh() - plan.estimate().vma_kmh()).abs() < 1e-9);
    assert_eq!(plan.athlete_id(), ATHLETE);
    assert_eq!(plan.start_date(), monday());
    assert!(plan.weeks().is_empty());
}

#[test]
fn test_plan_without_usable_answers_is_rejected() {
    let questionnaire = RaceQuestionnaire {
        time_5k: Some("fast".to_owned()),
        ..RaceQuestionnaire::default()
    };
    let error = TrainingPlan::from_questionnaire(ATHLETE, monday(), &questionnaire).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_generation_context_carries_the_plan_zones() {
    let plan = TrainingPlan::new(
        ATHLETE,
        monday(),
        PerformanceEstimate::new(15.0, "test").unwrap(),
    )
    .unwrap();

    let context = plan.generation_context(3).unwrap();
    assert_eq!(context.week_number, 3);
    assert_eq!(context.range.start(), monday() + Duration::weeks(2));
    assert_eq!(context.zones, *plan.zone_set());

    let week = context.stamp(Some(TrainingPhase::Base), standard_sessions());
    assert_eq!(week.week_number, 3);
    assert_eq!(week.zone_fingerprint, plan.zone_set().fingerprint());

    let error = plan.generation_context(0).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_plan_starting_midweek_uses_calendar_weeks() {
    let thursday = NaiveDate::from_ymd_opt(2025, 3, 6).unwrap();
    let plan = TrainingPlan::new(
        ATHLETE,
        thursday,
        PerformanceEstimate::new(15.0, "test").unwrap(),
    )
    .unwrap();
    assert_eq!(plan.week_range(1).start(), monday());
    assert_eq!(plan.week_range(2).start(), monday() + Duration::weeks(1));
}

#[test]
fn test_weeks_stay_sorted() {
    let mut plan = TrainingPlan::new(
        ATHLETE,
        monday(),
        PerformanceEstimate::new(15.0, "test").unwrap(),
    )
    .unwrap();
    for number in [3, 1, 2] {
        let context = plan.generation_context(number).unwrap();
        plan.add_week(context.stamp(None, standard_sessions())).unwrap();
    }

    let numbers: Vec<u32> = plan.weeks().iter().map(|w| w.week_number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert_eq!(plan.next_week_after(1).unwrap().week_number, 2);
    assert!(plan.next_week_after(3).is_none());
    assert!(plan.week(4).is_none());
}

#[test]
fn test_foreign_zone_set_is_refused() {
    let mut plan = two_week_plan();
    let mut week = planned_week(3, "not-this-plan");
    let error = plan.add_week(week.clone()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvariantViolation);

    week.zone_fingerprint = plan.zone_set().fingerprint().to_owned();
    plan.add_week(week).unwrap();
    assert_eq!(plan.weeks().len(), 3);
}

#[test]
fn test_invalid_weeks_are_refused() {
    let mut plan = two_week_plan();
    let fingerprint = plan.zone_set().fingerprint().to_owned();

    let duplicate = plan.add_week(planned_week(2, &fingerprint)).unwrap_err();
    assert_eq!(duplicate.code, ErrorCode::InvariantViolation);

    let mut same_day = planned_week(3, &fingerprint);
    same_day.sessions.push(session(
        Weekday::Sat,
        SessionType::Recovery,
        20,
        SessionIntensity::Facile,
    ));
    let error = plan.add_week(same_day).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvariantViolation);

    let week_zero = plan.add_week(planned_week(0, &fingerprint)).unwrap_err();
    assert_eq!(week_zero.code, ErrorCode::InvalidInput);

    assert_eq!(plan.weeks().len(), 2);
}

#[test]
fn test_replace_week_returns_the_previous_version() {
    let mut plan = two_week_plan();
    let fingerprint = plan.zone_set().fingerprint().to_owned();

    let mut shorter = planned_week(2, &fingerprint);
    for session in &mut shorter.sessions {
        session.duration_minutes = 30;
    }
    let previous = plan.replace_week(shorter).unwrap();
    assert_eq!(previous.total_minutes(), 195);
    assert_eq!(plan.week(2).unwrap().total_minutes(), 90);

    let missing = plan.replace_week(planned_week(5, &fingerprint)).unwrap_err();
    assert_eq!(missing.code, ErrorCode::InvalidInput);

    let foreign = plan.replace_week(planned_week(1, "other")).unwrap_err();
    assert_eq!(foreign.code, ErrorCode::InvariantViolation);
    assert_eq!(plan.week(1).unwrap().zone_fingerprint, fingerprint);
}

#[test]
fn test_plan_survives_json_and_verifies() {
    let plan = two_week_plan();
    let json = serde_json::to_string(&plan).unwrap();
    let restored: TrainingPlan = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, plan);
    restored.verify().unwrap();
}

#[test]
fn test_restored_plan_with_forged_week_fails_verification() {
    let plan = two_week_plan();
    let mut value = serde_json::to_value(&plan).unwrap();
    value["weeks"][1]["zone_fingerprint"] = serde_json::json!("forged");

    let restored: TrainingPlan = serde_json::from_value(value).unwrap();
    let error = restored.verify().unwrap_err();
    assert_eq!(error.code, ErrorCode::InvariantViolation);
}
