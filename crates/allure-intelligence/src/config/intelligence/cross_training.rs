// ABOUTME: Cross-training equivalence configuration
// ABOUTME: Per-activity running-equivalent coefficients and the partial-credit formula parameters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use crate::constants::cross_training::{
    CREDIT_PER_SESSION, CROSS_COUNTRY_SKIING_COEFFICIENT, CYCLING_COEFFICIENT,
    ELLIPTICAL_COEFFICIENT, HIKE_COEFFICIENT, MINUTES_PER_SESSION_CREDIT, ROWING_COEFFICIENT,
    SWIM_COEFFICIENT, VIRTUAL_CYCLING_COEFFICIENT, WALK_COEFFICIENT,
};
use crate::models::ActivityType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cross-training equivalence parameters
///
/// `coefficients` maps an activity type to the fraction of a running minute
/// one minute of that activity is worth. Types absent from the table carry no
/// running-equivalent load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossTrainingConfig {
    /// Running-equivalent coefficient per activity type
    pub coefficients: BTreeMap<ActivityType, f64>,
    /// Equivalent minutes standing in for one missed running session
    pub minutes_per_session_credit: f64,
    /// Fraction of a session credited for each covered missed session
    pub credit_per_session: f64,
}

impl Default for CrossTrainingConfig {
    fn default() -> Self {
        let coefficients = [
            (ActivityType::Ride, CYCLING_COEFFICIENT),
            (ActivityType::MountainBike, CYCLING_COEFFICIENT),
            (ActivityType::GravelRide, CYCLING_COEFFICIENT),
            (ActivityType::VirtualRide, VIRTUAL_CYCLING_COEFFICIENT),
            (ActivityType::Swim, SWIM_COEFFICIENT),
            (ActivityType::Rowing, ROWING_COEFFICIENT),
            (ActivityType::Elliptical, ELLIPTICAL_COEFFICIENT),
            (
                ActivityType::CrossCountrySkiing,
                CROSS_COUNTRY_SKIING_COEFFICIENT,
            ),
            (ActivityType::Hike, HIKE_COEFFICIENT),
            (ActivityType::Walk, WALK_COEFFICIENT),
        ]
        .into_iter()
        .collect();

        Self {
            coefficients,
            minutes_per_session_credit: MINUTES_PER_SESSION_CREDIT,
            credit_per_session: CREDIT_PER_SESSION,
        }
    }
}

impl CrossTrainingConfig {
    /// Coefficient for an activity type, if it counts as cross-training
    ///
    /// Running types never count as cross-training.
    #[must_use]
    pub fn coefficient(&self, activity_type: &ActivityType) -> Option<f64> {
        if activity_type.is_running() || !activity_type.is_endurance() {
            return None;
        }
        self.coefficients.get(activity_type).copied()
    }

    /// Environment variable overriding one activity's coefficient
    #[must_use]
    pub fn coefficient_env_var(activity_type: &ActivityType) -> String {
        format!(
            "ALLURE_CROSS_TRAINING_{}_COEFFICIENT",
            activity_type.as_str().to_uppercase()
        )
    }

    /// Validate coefficient and credit ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` for a coefficient outside [0, 1],
    /// non-positive minutes per credit, or a credit outside [0, 1).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((activity_type, value)) = self
            .coefficients
            .iter()
            .find(|(_, value)| !(0.0..=1.0).contains(*value))
        {
            return Err(ConfigError::InvalidRange(format!(
                "cross-training coefficient for {activity_type} must be within [0, 1], got {value}"
            )));
        }
        if !self.minutes_per_session_credit.is_finite() || self.minutes_per_session_credit <= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "minutes_per_session_credit must be positive".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&self.credit_per_session) {
            return Err(ConfigError::InvalidRange(
                "credit_per_session must be within [0, 1)".to_owned(),
            ));
        }
        Ok(())
    }
}
