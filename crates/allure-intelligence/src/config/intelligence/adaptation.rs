// ABOUTME: Adaptation bounds configuration
// ABOUTME: Cross-training override threshold, volume change clamp and session rounding rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use crate::constants::adaptation::{
    CROSS_TRAINING_OVERRIDE_MINUTES, MAX_VOLUME_CHANGE_PERCENT, MIN_SESSION_MINUTES,
    MIN_VOLUME_CHANGE_PERCENT, ROUNDING_STEP_MINUTES,
};
use serde::{Deserialize, Serialize};

/// Adaptation bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptationConfig {
    /// Equivalent minutes that step a REDUCE or RECOVERY verdict down one level
    pub cross_training_override_minutes: u32,
    /// Lowest volume change the advisor may suggest
    pub min_volume_change_percent: i32,
    /// Highest volume change the advisor may suggest
    pub max_volume_change_percent: i32,
    /// Adapted durations are rounded to a multiple of this
    pub rounding_step_minutes: u32,
    /// Floor for any adapted session
    pub min_session_minutes: u32,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // Safe: compile-time constant 60.0
        let override_minutes = CROSS_TRAINING_OVERRIDE_MINUTES as u32;
        Self {
            cross_training_override_minutes: override_minutes,
            min_volume_change_percent: MIN_VOLUME_CHANGE_PERCENT,
            max_volume_change_percent: MAX_VOLUME_CHANGE_PERCENT,
            rounding_step_minutes: ROUNDING_STEP_MINUTES,
            min_session_minutes: MIN_SESSION_MINUTES,
        }
    }
}

impl AdaptationConfig {
    /// Validate bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the volume clamp is inverted or excludes zero,
    /// or when rounding or floor values are zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.min_volume_change_percent > self.max_volume_change_percent {
            return Err(ConfigError::InvalidWeights(
                "min_volume_change_percent must be <= max_volume_change_percent",
            ));
        }
        if self.min_volume_change_percent > 0 || self.max_volume_change_percent < 0 {
            return Err(ConfigError::InvalidWeights(
                "volume change bounds must include 0",
            ));
        }
        if self.min_volume_change_percent < -100 {
            return Err(ConfigError::InvalidWeights(
                "min_volume_change_percent cannot remove more than the whole week",
            ));
        }
        if self.rounding_step_minutes == 0 || self.min_session_minutes == 0 {
            return Err(ConfigError::InvalidWeights(
                "rounding_step_minutes and min_session_minutes must be positive",
            ));
        }
        Ok(())
    }
}
