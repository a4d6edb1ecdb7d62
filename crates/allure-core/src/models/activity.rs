// ABOUTME: Activity records reported by external fitness trackers
// ABOUTME: Classifies activity types into running sessions and cross-training
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Activity type as reported by a tracker
///
/// Provider names vary ("Run", "running", "TrailRun"), so parsing is lenient
/// and unknown names are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    /// Road running
    Run,
    /// Trail running
    TrailRun,
    /// Treadmill running
    VirtualRun,
    /// Cycling
    Ride,
    /// Indoor cycling
    VirtualRide,
    /// Mountain biking
    MountainBike,
    /// Gravel cycling
    GravelRide,
    /// Swimming
    Swim,
    /// Walking
    Walk,
    /// Hiking
    Hike,
    /// Rowing
    Rowing,
    /// Elliptical trainer
    Elliptical,
    /// Cross-country skiing
    CrossCountrySkiing,
    /// Weight training
    StrengthTraining,
    /// Yoga
    Yoga,
    /// Anything else, keeping the provider's name
    Other(String),
}

impl ActivityType {
    /// Parse a provider activity name
    #[must_use]
    pub fn from_provider_string(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "run" | "running" => Self::Run,
            "trailrun" | "trailrunning" => Self::TrailRun,
            "virtualrun" | "treadmill" => Self::VirtualRun,
            "ride" | "cycling" | "bike" => Self::Ride,
            "virtualride" | "indoorcycling" => Self::VirtualRide,
            "mountainbike" | "mountainbikeride" => Self::MountainBike,
            "gravelride" => Self::GravelRide,
            "swim" | "swimming" => Self::Swim,
            "walk" | "walking" => Self::Walk,
            "hike" | "hiking" => Self::Hike,
            "rowing" | "row" => Self::Rowing,
            "elliptical" => Self::Elliptical,
            "crosscountryskiing" | "nordicski" => Self::CrossCountrySkiing,
            "strengthtraining" | "weighttraining" => Self::StrengthTraining,
            "yoga" => Self::Yoga,
            _ => Self::Other(name.to_owned()),
        }
    }

    /// Canonical snake_case name
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Run => "run",
            Self::TrailRun => "trail_run",
            Self::VirtualRun => "virtual_run",
            Self::Ride => "ride",
            Self::VirtualRide => "virtual_ride",
            Self::MountainBike => "mountain_bike",
            Self::GravelRide => "gravel_ride",
            Self::Swim => "swim",
            Self::Walk => "walk",
            Self::Hike => "hike",
            Self::Rowing => "rowing",
            Self::Elliptical => "elliptical",
            Self::CrossCountrySkiing => "cross_country_skiing",
            Self::StrengthTraining => "strength_training",
            Self::Yoga => "yoga",
            Self::Other(name) => name,
        }
    }

    /// Direct equivalents of a planned running session
    #[must_use]
    pub const fn is_running(&self) -> bool {
        matches!(self, Self::Run | Self::TrailRun | Self::VirtualRun)
    }

    /// Activities that carry aerobic load
    #[must_use]
    pub const fn is_endurance(&self) -> bool {
        !matches!(
            self,
            Self::StrengthTraining | Self::Yoga | Self::Other(_)
        )
    }
}

impl From<String> for ActivityType {
    fn from(value: String) -> Self {
        Self::from_provider_string(&value)
    }
}

impl From<ActivityType> for String {
    fn from(value: ActivityType) -> Self {
        match value {
            ActivityType::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One completed activity from the fitness tracker (read-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Activity type
    pub activity_type: ActivityType,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Moving time in minutes
    pub moving_time_minutes: f64,
    /// Start timestamp
    pub start_date: DateTime<Utc>,
}

impl ActivityRecord {
    /// Create an activity record
    #[must_use]
    pub const fn new(
        activity_type: ActivityType,
        distance_km: f64,
        moving_time_minutes: f64,
        start_date: DateTime<Utc>,
    ) -> Self {
        Self {
            activity_type,
            distance_km,
            moving_time_minutes,
            start_date,
        }
    }
}

/// Athlete feedback recorded against one planned session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFeedback {
    /// Day of the planned session
    pub day_of_week: Weekday,
    /// Whether the athlete marked the session as done
    pub completed: bool,
    /// Self-reported rate of perceived exertion (1-10)
    #[serde(default)]
    pub rpe: Option<u8>,
}
