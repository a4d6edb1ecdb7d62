// ABOUTME: Training calibration and adherence adaptation engine
// ABOUTME: Race-time estimation, pace zones, weekly compliance and bounded plan adaptation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Allure Intelligence
//!
//! Two coupled subsystems live here:
//!
//! - **Performance calibration**: [`TimeParser`] turns questionnaire text into
//!   seconds, [`PerformanceEstimator`] combines race results into a VMA estimate and
//!   [`PaceZoneCalculator`] expands that estimate into one immutable [`ZoneSet`].
//! - **Adherence adaptation**: [`WeekComplianceAnalyzer`] scores a completed week,
//!   [`AdaptationAdvisor`] turns the score into a bounded verdict and
//!   [`AdaptationApplier`] rewrites the next planned week.
//!
//! Everything except [`WeekComplianceAnalyzer::compare`] is pure and synchronous.
//!
//! [`ZoneSet`]: allure_core::models::ZoneSet

// Re-export allure-core modules so intelligence files can keep `use crate::models::*` etc.
pub use allure_core::constants;
pub use allure_core::errors;
pub use allure_core::models;

/// Verdict and volume adjustment for the next planned week
pub mod adaptation;
/// Duration parsing and VMA estimation
pub mod algorithms;
/// Weekly compliance scoring against observed activity
pub mod compliance;
/// Tunable intelligence parameters
pub mod config;
/// Pace zone ladder derived from a VMA estimate
pub mod training_zones;

pub use adaptation::{AdaptationAdvisor, AdaptationApplier, AdaptationRule};
pub use algorithms::{format_duration, format_pace, PerformanceEstimator, TimeParser};
pub use compliance::WeekComplianceAnalyzer;
pub use config::IntelligenceConfig;
pub use training_zones::PaceZoneCalculator;
