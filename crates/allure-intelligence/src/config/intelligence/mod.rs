// ABOUTME: Intelligence configuration for cross-training equivalence and adaptation bounds
// ABOUTME: Environment overrides, unified validation and a process-wide validated instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Cross-training coefficients and credit formulas are heuristic business
//! parameters, so they live here as data rather than as literals in the
//! analyzer.
//!
//! # Module Structure
//!
//! - `cross_training` - Running-equivalent coefficients and partial credit
//! - `adaptation` - Override threshold, volume clamp and session rounding
//! - `error` - Validation errors

/// Adaptation bounds
pub mod adaptation;
/// Cross-training equivalence
pub mod cross_training;
/// Validation errors
pub mod error;

pub use adaptation::AdaptationConfig;
pub use cross_training::CrossTrainingConfig;
pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Cross-training equivalence used by the compliance analyzer
    pub cross_training: CrossTrainingConfig,
    /// Bounds used by the advisor and the applier
    pub adaptation: AdaptationConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    ///
    /// Loaded from the environment on first use; invalid environments fall
    /// back to defaults with a warning.
    #[must_use]
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::from_env().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first range or consistency violation found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cross_training.validate()?;
        self.adaptation.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Cross-training coefficients, one variable per known activity type
        for (activity_type, coefficient) in &mut self.cross_training.coefficients {
            Self::apply_env_var(
                &CrossTrainingConfig::coefficient_env_var(activity_type),
                coefficient,
            )?;
        }
        Self::apply_env_var(
            "ALLURE_CROSS_TRAINING_MINUTES_PER_SESSION",
            &mut self.cross_training.minutes_per_session_credit,
        )?;
        Self::apply_env_var(
            "ALLURE_CROSS_TRAINING_CREDIT_PER_SESSION",
            &mut self.cross_training.credit_per_session,
        )?;

        // Adaptation bounds
        Self::apply_env_var(
            "ALLURE_ADAPTATION_CROSS_TRAINING_OVERRIDE_MINUTES",
            &mut self.adaptation.cross_training_override_minutes,
        )?;
        Self::apply_env_var(
            "ALLURE_ADAPTATION_MIN_VOLUME_CHANGE_PERCENT",
            &mut self.adaptation.min_volume_change_percent,
        )?;
        Self::apply_env_var(
            "ALLURE_ADAPTATION_MAX_VOLUME_CHANGE_PERCENT",
            &mut self.adaptation.max_volume_change_percent,
        )?;
        Self::apply_env_var(
            "ALLURE_ADAPTATION_ROUNDING_STEP_MINUTES",
            &mut self.adaptation.rounding_step_minutes,
        )?;
        Self::apply_env_var(
            "ALLURE_ADAPTATION_MIN_SESSION_MINUTES",
            &mut self.adaptation.min_session_minutes,
        )?;

        Ok(self)
    }
}
