// ABOUTME: Main library entry point for the Allure training calibration and adaptation engine
// ABOUTME: Wires pace zones, the plan aggregate and weekly adherence reviews to activity providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Allure
//!
//! Calibrates a runner's training from race times and adapts the plan week
//! by week from what was actually done.
//!
//! ## Features
//!
//! - **Calibration**: race-time parsing, VMA estimation and pace zones
//! - **Plan aggregate**: one immutable zone set per plan, checked on every week
//! - **Adherence review**: compliance against provider activities, verdict and
//!   adapted next week, with a per-athlete cooldown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use allure::models::RaceQuestionnaire;
//! use allure::plan::TrainingPlan;
//! use chrono::NaiveDate;
//!
//! # fn main() -> allure::errors::AppResult<()> {
//! let questionnaire = RaceQuestionnaire {
//!     time_10k: Some("45:00".to_owned()),
//!     ..RaceQuestionnaire::default()
//! };
//! let start = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap_or_default();
//! let plan = TrainingPlan::from_questionnaire("athlete-1", start, &questionnaire)?;
//! println!("VMA {:.1} km/h", plan.estimate().vma_kmh());
//! # Ok(())
//! # }
//! ```

pub use allure_core::{constants, errors, models};
pub use allure_intelligence as intelligence;
pub use allure_providers as providers;

/// Environment configuration
pub mod config;

/// JSON document loading
pub mod inputs;

/// Structured logging setup and planner log events
pub mod logging;

/// Training plan aggregate
pub mod plan;

/// Per-athlete review cooldown
pub mod rate_limiting;

/// Weekly adherence review service
pub mod services;
