// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Race factors, zone intensity factors, and adaptation thresholds for the planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains. Values that are heuristic
//! business parameters (cross-training coefficients, adaptation thresholds)
//! only provide defaults here; the intelligence configuration exposes them as
//! tunable data.

/// Service identification for structured logging
pub mod service_names {
    /// Service name used in log records
    pub const ALLURE: &str = "allure";
    /// Command-line tool name
    pub const ALLURE_CLI: &str = "allure-cli";
}

/// Unit conversion constants
pub mod units {
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: u32 = 60;
    /// Seconds in one hour as an integer
    pub const SECONDS_PER_HOUR_U32: u32 = 3600;
}

/// Supported race distances in kilometers
pub mod race_distances {
    /// 5 km
    pub const FIVE_K_KM: f64 = 5.0;
    /// 10 km
    pub const TEN_K_KM: f64 = 10.0;
    /// Half marathon
    pub const HALF_MARATHON_KM: f64 = 21.1;
    /// Marathon
    pub const MARATHON_KM: f64 = 42.195;
}

/// Fraction of VMA sustainable over each race distance
///
/// Shorter races are more reliable indicators of aerobic capacity, so they
/// sit closer to 1.0.
pub mod race_factors {
    /// Up to 5 km
    pub const FIVE_K: f64 = 0.95;
    /// Up to 10 km
    pub const TEN_K: f64 = 0.90;
    /// Up to the half marathon
    pub const HALF_MARATHON: f64 = 0.85;
    /// Anything longer
    pub const MARATHON: f64 = 0.80;
}

/// Weights used when combining the two most trusted race estimates
pub mod estimation {
    /// Weight of the most trusted estimate
    pub const PRIMARY_WEIGHT: f64 = 0.6;
    /// Weight of the second most trusted estimate
    pub const SECONDARY_WEIGHT: f64 = 0.4;
    /// Source label used when the athlete declared a VMA instead of race times
    pub const DECLARED_VMA_LABEL: &str = "declared VMA";
}

/// Intensity factors applied to VMA for each training zone
pub mod zone_factors {
    /// Recovery jog
    pub const RECOVERY: f64 = 0.60;
    /// Fundamental endurance
    pub const EF: f64 = 0.67;
    /// Active endurance
    pub const EA: f64 = 0.77;
    /// Threshold
    pub const SEUIL: f64 = 0.87;
    /// Maximal aerobic speed
    pub const VMA: f64 = 1.00;
    /// 5 km race pace
    pub const RACE_5K: f64 = 0.95;
    /// 10 km race pace
    pub const RACE_10K: f64 = 0.90;
    /// Half marathon race pace
    pub const RACE_SEMI: f64 = 0.85;
    /// Marathon race pace
    pub const RACE_MARATHON: f64 = 0.80;
}

/// Rate of perceived exertion bounds
pub mod rpe {
    /// Lowest valid RPE
    pub const MIN: u8 = 1;
    /// Highest valid RPE
    pub const MAX: u8 = 10;
}

/// Compliance and RPE thresholds of the adaptation decision table
pub mod adaptation {
    /// Minimum compliance for a MAINTAIN verdict
    pub const MAINTAIN_MIN_COMPLIANCE: u8 = 90;
    /// Minimum compliance for an ADJUST verdict
    pub const ADJUST_MIN_COMPLIANCE: u8 = 70;
    /// Minimum compliance for a REDUCE verdict
    pub const REDUCE_MIN_COMPLIANCE: u8 = 50;
    /// Lowest RPE of the comfortable band
    pub const COMFORTABLE_RPE_MIN: f64 = 4.0;
    /// Highest RPE of the comfortable band
    pub const COMFORTABLE_RPE_MAX: f64 = 7.0;
    /// RPE at or above which recovery is forced
    pub const RECOVERY_RPE: f64 = 9.0;
    /// RPE at or below which a fully completed week counts as easy
    pub const EASY_WEEK_RPE_MAX: f64 = 3.0;

    /// Volume change when adjusting a fatigued athlete
    pub const ADJUST_FATIGUE_VOLUME_PERCENT: i32 = -10;
    /// Volume change for a REDUCE verdict
    pub const REDUCE_VOLUME_PERCENT: i32 = -20;
    /// Volume change for a RECOVERY verdict
    pub const RECOVERY_VOLUME_PERCENT: i32 = -35;
    /// Volume change after an easy, fully completed week
    pub const PROGRESSION_VOLUME_PERCENT: i32 = 10;

    /// Cross-training minutes that temper a REDUCE or RECOVERY verdict
    pub const CROSS_TRAINING_OVERRIDE_MINUTES: f64 = 60.0;
    /// Lowest allowed volume change
    pub const MIN_VOLUME_CHANGE_PERCENT: i32 = -50;
    /// Highest allowed volume change
    pub const MAX_VOLUME_CHANGE_PERCENT: i32 = 10;

    /// Session durations are rounded to this many minutes
    pub const ROUNDING_STEP_MINUTES: u32 = 5;
    /// No session is shortened below this duration
    pub const MIN_SESSION_MINUTES: u32 = 15;
}

/// Default running-equivalent coefficients for cross-training
pub mod cross_training {
    /// Road, gravel, and mountain cycling
    pub const CYCLING_COEFFICIENT: f64 = 0.5;
    /// Indoor cycling
    pub const VIRTUAL_CYCLING_COEFFICIENT: f64 = 0.5;
    /// Swimming
    pub const SWIM_COEFFICIENT: f64 = 0.6;
    /// Rowing
    pub const ROWING_COEFFICIENT: f64 = 0.6;
    /// Elliptical trainer
    pub const ELLIPTICAL_COEFFICIENT: f64 = 0.7;
    /// Cross-country skiing
    pub const CROSS_COUNTRY_SKIING_COEFFICIENT: f64 = 0.7;
    /// Hiking
    pub const HIKE_COEFFICIENT: f64 = 0.4;
    /// Walking
    pub const WALK_COEFFICIENT: f64 = 0.3;

    /// Running-equivalent minutes that stand in for one missed session
    pub const MINUTES_PER_SESSION_CREDIT: f64 = 45.0;
    /// Fraction of a session credited per covered missed session
    pub const CREDIT_PER_SESSION: f64 = 0.5;
}
