// ABOUTME: Integration tests for the adaptation advisor and applier
// ABOUTME: Verdict table, cross-training override, clamping, messages and week rewriting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use allure::intelligence::adaptation::rules;
use allure::intelligence::config::AdaptationConfig;
use allure::intelligence::{AdaptationAdvisor, AdaptationApplier};
use allure::models::{
    ComplianceReport, SessionIntensity, SuggestionCategory, SuggestionPriority, Verdict,
};
use chrono::Weekday;
use common::planned_week;

fn report(compliance_percent: u8, avg_rpe: Option<f64>, cross_minutes: f64) -> ComplianceReport {
    ComplianceReport {
        week_number: 1,
        sessions_planned: 3,
        sessions_done: 2,
        compliance_percent,
        avg_rpe,
        cross_training_equivalent_minutes: cross_minutes,
        cross_training_sessions: 0,
        running_distance_km: 20.0,
        running_minutes: 120.0,
        summary_text: String::new(),
    }
}

fn advisor() -> AdaptationAdvisor {
    AdaptationAdvisor::new(AdaptationConfig::default())
}

fn applier() -> AdaptationApplier {
    AdaptationApplier::new(AdaptationConfig::default())
}

#[test]
fn test_verdict_table() {
    let next_week = planned_week(2, "zones");
    let cases = [
        (30, Some(5.0), Verdict::Recovery, -35),
        (95, Some(9.0), Verdict::Recovery, -35),
        (60, Some(5.0), Verdict::Reduce, -20),
        (80, Some(8.0), Verdict::Adjust, -10),
        (80, Some(6.0), Verdict::Adjust, 0),
        (80, None, Verdict::Adjust, 0),
        (95, Some(5.0), Verdict::Maintain, 0),
        (95, Some(2.0), Verdict::Maintain, 10),
        (95, Some(8.0), Verdict::Adjust, -10),
        (95, Some(8.95), Verdict::Adjust, -10),
        (100, None, Verdict::Maintain, 0),
    ];

    for (compliance, rpe, verdict, change) in cases {
        let suggestion = advisor().advise(&report(compliance, rpe, 0.0), &next_week);
        assert_eq!(
            (suggestion.verdict, suggestion.volume_change_percent),
            (verdict, change),
            "compliance {compliance}, rpe {rpe:?}"
        );
    }
}

#[test]
fn test_cross_training_eases_reduce_to_adjust() {
    common::init_test_logging();
    let next_week = planned_week(2, "zones");
    let suggestion = advisor().advise(&report(56, Some(8.0), 60.0), &next_week);

    assert_eq!(suggestion.verdict, Verdict::Adjust);
    assert_eq!(suggestion.volume_change_percent, -10);
    assert_eq!(
        suggestion.overall_message,
        "ADJUST: reduce volume by 10%. Week 2 goes from 195 to 175 minutes."
    );
    let categories: Vec<_> = suggestion.items.iter().map(|i| i.category).collect();
    assert_eq!(
        categories,
        vec![SuggestionCategory::Volume, SuggestionCategory::CrossTraining]
    );
}

#[test]
fn test_eased_adjust_keeps_volume_when_effort_was_comfortable() {
    let next_week = planned_week(2, "zones");
    let suggestion = advisor().advise(&report(56, Some(6.0), 60.0), &next_week);

    assert_eq!(suggestion.verdict, Verdict::Adjust);
    assert_eq!(suggestion.volume_change_percent, 0);
    assert_eq!(
        suggestion.overall_message,
        "ADJUST: keep volume unchanged. Week 2 goes from 195 to 195 minutes."
    );
}

#[test]
fn test_cross_training_eases_recovery_to_reduce() {
    let next_week = planned_week(2, "zones");
    let suggestion = advisor().advise(&report(40, None, 90.0), &next_week);
    assert_eq!(suggestion.verdict, Verdict::Reduce);
    assert_eq!(suggestion.volume_change_percent, -20);

    let below_threshold = advisor().advise(&report(40, None, 59.0), &next_week);
    assert_eq!(below_threshold.verdict, Verdict::Recovery);
}

#[test]
fn test_items_are_ranked_by_priority() {
    let next_week = planned_week(2, "zones");
    let suggestion = advisor().advise(&report(30, None, 0.0), &next_week);

    let priorities: Vec<_> = suggestion.items.iter().map(|i| i.priority).collect();
    assert_eq!(
        priorities,
        vec![SuggestionPriority::High, SuggestionPriority::Low]
    );
    assert_eq!(suggestion.items[0].category, SuggestionCategory::Recovery);
    assert_eq!(suggestion.items[1].category, SuggestionCategory::Feedback);
    assert_eq!(
        suggestion.overall_message,
        "RECOVERY: reduce volume by 35%. Week 2 goes from 195 to 130 minutes."
    );
}

#[test]
fn test_volume_change_is_clamped() {
    let config = AdaptationConfig {
        max_volume_change_percent: 5,
        ..AdaptationConfig::default()
    };
    let advisor = AdaptationAdvisor::new(config);
    let suggestion = advisor.advise(&report(100, Some(2.0), 0.0), &planned_week(2, "zones"));
    assert_eq!(suggestion.verdict, Verdict::Maintain);
    assert_eq!(suggestion.volume_change_percent, 5);
}

#[test]
fn test_advice_is_deterministic() {
    let next_week = planned_week(2, "zones");
    let report = report(72, Some(7.5), 30.0);
    assert_eq!(
        advisor().advise(&report, &next_week),
        advisor().advise(&report, &next_week)
    );
}

#[test]
fn test_rules_inserted_first_keep_their_band() {
    let next_week = planned_week(2, "zones");
    for rule in [
        rules::reduce(),
        rules::adjust_inconsistent(),
        rules::maintain_comfortable(),
        rules::progress_easy_week(),
        rules::maintain(),
    ] {
        let mut advisor = advisor();
        advisor.insert_rule(0, rule);
        assert_eq!(advisor.rules()[0].name, rule.name);

        let collapsed = advisor.advise(&report(10, Some(5.0), 0.0), &next_week);
        assert_eq!(collapsed.verdict, Verdict::Recovery, "{} first", rule.name);
        assert_eq!(collapsed.volume_change_percent, -35);

        let exhausted = advisor.advise(&report(95, Some(9.5), 0.0), &next_week);
        assert_eq!(exhausted.verdict, Verdict::Recovery, "{} first", rule.name);
    }
}

#[test]
fn test_custom_rule_runs_before_the_default_table() {
    let mut advisor = advisor();
    advisor.insert_rule(0, rules::ease_hard_week());
    let suggestion = advisor.advise(&report(95, Some(8.0), 0.0), &planned_week(2, "zones"));
    assert_eq!(suggestion.verdict, Verdict::Adjust);
    assert_eq!(suggestion.volume_change_percent, -10);
    assert_eq!(
        suggestion.overall_message,
        "ADJUST: reduce volume by 10%. Week 2 goes from 195 to 175 minutes."
    );
}

#[test]
fn test_reduce_rewrites_every_session() {
    let week = planned_week(2, "zones");
    let suggestion = advisor().advise(&report(60, Some(5.0), 0.0), &week);
    assert_eq!(suggestion.volume_change_percent, -20);

    let adapted = applier().apply(&week, &suggestion);
    let durations: Vec<u32> = adapted.sessions.iter().map(|s| s.duration_minutes).collect();
    assert_eq!(durations, vec![35, 50, 70]);
    for (before, after) in week.sessions.iter().zip(&adapted.sessions) {
        assert_eq!(after.day_of_week, before.day_of_week);
        assert_eq!(after.title, before.title);
        assert_eq!(after.intensity, before.intensity);
    }
    assert_eq!(week.total_minutes(), 195);
}

#[test]
fn test_recovery_eases_the_first_hard_session() {
    let week = planned_week(2, "zones");
    let suggestion = advisor().advise(&report(33, None, 0.0), &week);
    let adapted = applier().apply(&week, &suggestion);

    let durations: Vec<u32> = adapted.sessions.iter().map(|s| s.duration_minutes).collect();
    assert_eq!(durations, vec![30, 40, 60]);
    assert_eq!(adapted.sessions[1].day_of_week, Weekday::Wed);
    assert_eq!(adapted.sessions[1].intensity, SessionIntensity::Modere);
    assert_eq!(adapted.zone_fingerprint, week.zone_fingerprint);
    assert_eq!(adapted.week_number, week.week_number);
    // the input week is untouched
    assert_eq!(week.sessions[1].intensity, SessionIntensity::Difficile);
    assert_eq!(week.total_minutes(), 195);
}

#[test]
fn test_progression_keeps_intensities() {
    let week = planned_week(2, "zones");
    let suggestion = advisor().advise(&report(100, Some(3.0), 0.0), &week);
    let adapted = applier().apply(&week, &suggestion);

    let durations: Vec<u32> = adapted.sessions.iter().map(|s| s.duration_minutes).collect();
    assert_eq!(durations, vec![50, 65, 100]);
    assert_eq!(adapted.sessions[1].intensity, SessionIntensity::Difficile);
    assert_eq!(
        suggestion.overall_message,
        "MAINTAIN: increase volume by 10%. Week 2 goes from 195 to 215 minutes."
    );
}

#[test]
fn test_short_sessions_keep_the_floor() {
    let applier = applier();
    assert_eq!(applier.adjusted_duration(20, -50), 15);
    assert_eq!(applier.adjusted_duration(15, -35), 15);
    assert_eq!(applier.adjusted_duration(90, 0), 90);
}
