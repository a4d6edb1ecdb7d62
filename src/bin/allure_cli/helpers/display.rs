// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for allure-cli
// ABOUTME: Provides consistent display functions for estimates, zones, reports and weeks

use allure::intelligence::{format_duration, format_pace};
use allure::models::{
    AdaptationSuggestion, ComplianceReport, PerformanceEstimate, PlannedWeek, RaceDistance,
    ZoneSet,
};

/// Display the VMA estimate and where it came from
pub fn display_estimate(estimate: &PerformanceEstimate) {
    println!("\nVMA ESTIMATE");
    println!("{}", "=".repeat(60));
    println!("   VMA: {:.1} km/h", estimate.vma_kmh());
    println!("   Source: {}", estimate.source_label());
}

/// Display every zone with its speed and pace
pub fn display_zone_table(zones: &ZoneSet) {
    println!("\nPACE ZONES");
    println!("{}", "=".repeat(60));
    println!("   {:<28} {:>10} {:>14}", "Zone", "km/h", "Pace");
    for zone in zones.iter() {
        println!(
            "   {:<28} {:>10.1} {:>14}",
            zone.name().display_name(),
            zone.speed_kmh(),
            format_pace(zone.pace_seconds_per_km())
        );
    }
    println!("   Fingerprint: {}", zones.fingerprint());
}

/// Display predicted finishing times
pub fn display_predictions(estimate: &PerformanceEstimate) {
    println!("\nRACE PREDICTIONS");
    println!("{}", "=".repeat(60));
    for distance in RaceDistance::ALL {
        let seconds = estimate.predicted_time_seconds(distance).round();
        let seconds = if seconds.is_finite() && seconds > 0.0 {
            seconds as u32
        } else {
            0
        };
        println!("   {:<16} {:>10}", distance.label(), format_duration(seconds));
    }
}

/// Display a compliance report
pub fn display_report(report: &ComplianceReport) {
    println!("\nWEEK {} COMPLIANCE", report.week_number);
    println!("{}", "=".repeat(60));
    println!(
        "   Sessions: {}/{}",
        report.sessions_done, report.sessions_planned
    );
    println!("   Compliance: {}%", report.compliance_percent);
    println!(
        "   Running: {:.1} km in {:.0} min",
        report.running_distance_km, report.running_minutes
    );
    if report.cross_training_sessions > 0 {
        println!(
            "   Cross-training: {} session(s), {:.0} running-equivalent min",
            report.cross_training_sessions, report.cross_training_equivalent_minutes
        );
    }
    match report.avg_rpe {
        Some(rpe) => println!("   Average RPE: {rpe:.1}"),
        None => println!("   Average RPE: no feedback"),
    }
}

/// Display the verdict and ranked advice
pub fn display_suggestion(suggestion: &AdaptationSuggestion) {
    println!("\nADVICE");
    println!("{}", "=".repeat(60));
    println!("   {}", suggestion.overall_message);
    for item in &suggestion.items {
        println!("   [{:?}] {}: {}", item.priority, item.title, item.detail);
    }
}

/// Display a planned week session by session
pub fn display_week(week: &PlannedWeek) {
    println!("\nWEEK {} ({} min)", week.week_number, week.total_minutes());
    println!("{}", "=".repeat(60));
    for session in &week.sessions {
        println!(
            "   {} {:<32} {:>4} min  {}",
            session.day_of_week,
            session.title,
            session.duration_minutes,
            session.intensity
        );
    }
}
