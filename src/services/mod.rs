// ABOUTME: Domain service layer combining providers, analysis and the plan aggregate
// ABOUTME: Provides the weekly adherence review used by the CLI and embedding services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services wire the pure analysis of `allure-intelligence` to an activity
//! provider and a [`TrainingPlan`](crate::plan::TrainingPlan), independent of
//! the entry point that calls them.

/// Weekly adherence review: compare, advise, apply
pub mod adherence;

pub use adherence::{AdherenceService, WeeklyReview};
