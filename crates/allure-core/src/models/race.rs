// ABOUTME: Race results, questionnaire input, and the derived performance estimate
// ABOUTME: Supported distances carry their trust priority and race factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{race_distances, race_factors, units::SECONDS_PER_HOUR};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Race distances accepted from the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceDistance {
    /// 5 km
    FiveK,
    /// 10 km
    TenK,
    /// Half marathon (21.1 km)
    HalfMarathon,
    /// Marathon (42.195 km)
    Marathon,
}

impl RaceDistance {
    /// All supported distances, most trusted first
    pub const ALL: [Self; 4] = [Self::FiveK, Self::TenK, Self::HalfMarathon, Self::Marathon];

    /// Distance in kilometers
    #[must_use]
    pub const fn km(self) -> f64 {
        match self {
            Self::FiveK => race_distances::FIVE_K_KM,
            Self::TenK => race_distances::TEN_K_KM,
            Self::HalfMarathon => race_distances::HALF_MARATHON_KM,
            Self::Marathon => race_distances::MARATHON_KM,
        }
    }

    /// Trust priority, lower is more trusted
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::FiveK => 1,
            Self::TenK => 2,
            Self::HalfMarathon => 3,
            Self::Marathon => 4,
        }
    }

    /// Fraction of VMA an athlete sustains over this distance
    #[must_use]
    pub fn race_factor(self) -> f64 {
        let km = self.km();
        if km <= race_distances::FIVE_K_KM {
            race_factors::FIVE_K
        } else if km <= race_distances::TEN_K_KM {
            race_factors::TEN_K
        } else if km <= race_distances::HALF_MARATHON_KM {
            race_factors::HALF_MARATHON
        } else {
            race_factors::MARATHON
        }
    }

    /// Short label used in estimate provenance
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FiveK => "5km",
            Self::TenK => "10km",
            Self::HalfMarathon => "half marathon",
            Self::Marathon => "marathon",
        }
    }
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A self-reported race performance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResult {
    distance: RaceDistance,
    duration_seconds: u32,
    raw_text: String,
}

impl RaceResult {
    /// Create a race result from an already parsed duration
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when the duration is zero
    pub fn new(
        distance: RaceDistance,
        duration_seconds: u32,
        raw_text: impl Into<String>,
    ) -> AppResult<Self> {
        if duration_seconds == 0 {
            return Err(AppError::invalid_input(format!(
                "{distance} race duration must be greater than zero"
            )));
        }
        Ok(Self {
            distance,
            duration_seconds,
            raw_text: raw_text.into(),
        })
    }

    /// Race distance
    #[must_use]
    pub const fn distance(&self) -> RaceDistance {
        self.distance
    }

    /// Race distance in kilometers
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance.km()
    }

    /// Finishing time in seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Text the athlete typed
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Average race speed in km/h
    #[must_use]
    pub fn avg_speed_kmh(&self) -> f64 {
        self.distance_km() / (f64::from(self.duration_seconds) / SECONDS_PER_HOUR)
    }
}

/// Race section of the onboarding questionnaire
///
/// Every distance is optional; presence is explicit per field so the
/// estimator never has to probe loosely shaped input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceQuestionnaire {
    /// 5 km finishing time text
    #[serde(default)]
    pub time_5k: Option<String>,
    /// 10 km finishing time text
    #[serde(default)]
    pub time_10k: Option<String>,
    /// Half marathon finishing time text
    #[serde(default)]
    pub time_half_marathon: Option<String>,
    /// Marathon finishing time text
    #[serde(default)]
    pub time_marathon: Option<String>,
    /// VMA the athlete already knows from a field test (km/h)
    #[serde(default)]
    pub declared_vma_kmh: Option<f64>,
}

impl RaceQuestionnaire {
    /// Time text for one distance, if answered
    #[must_use]
    pub fn time_for(&self, distance: RaceDistance) -> Option<&str> {
        let field = match distance {
            RaceDistance::FiveK => &self.time_5k,
            RaceDistance::TenK => &self.time_10k,
            RaceDistance::HalfMarathon => &self.time_half_marathon,
            RaceDistance::Marathon => &self.time_marathon,
        };
        field
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Answered distances with their time text, most trusted first
    pub fn answered(&self) -> impl Iterator<Item = (RaceDistance, &str)> {
        RaceDistance::ALL
            .into_iter()
            .filter_map(|distance| self.time_for(distance).map(|text| (distance, text)))
    }
}

/// Speed-capacity estimate derived once per plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEstimate {
    vma_kmh: f64,
    source_label: String,
}

impl PerformanceEstimate {
    /// Create an estimate
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when `vma_kmh` is not a positive finite number
    pub fn new(vma_kmh: f64, source_label: impl Into<String>) -> AppResult<Self> {
        if !vma_kmh.is_finite() || vma_kmh <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "VMA must be a positive speed, got {vma_kmh}"
            )));
        }
        Ok(Self {
            vma_kmh,
            source_label: source_label.into(),
        })
    }

    /// Maximal aerobic speed in km/h
    #[must_use]
    pub const fn vma_kmh(&self) -> f64 {
        self.vma_kmh
    }

    /// Human-readable provenance
    #[must_use]
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// Finishing time the estimate predicts for a race, in seconds
    #[must_use]
    pub fn predicted_time_seconds(&self, distance: RaceDistance) -> f64 {
        distance.km() / (self.vma_kmh * distance.race_factor()) * SECONDS_PER_HOUR
    }
}
