// ABOUTME: Core data models for race calibration, planned weeks, and adherence tracking
// ABOUTME: Re-exports race, zone, plan, activity, compliance, and adaptation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain values shared by the calibration and adaptation engine. Every type
//! here is immutable from the engine's point of view: computations return new
//! values instead of patching old ones.

/// Activity records supplied by fitness trackers
pub mod activity;
/// Adaptation verdicts and suggestions
pub mod adaptation;
/// Weekly compliance reports
pub mod compliance;
/// Planned sessions, weeks, and week ranges
pub mod plan;
/// Race results, questionnaire input, and performance estimates
pub mod race;
/// Pace zones and the per-plan zone set
pub mod zones;

pub use activity::{ActivityRecord, ActivityType, SessionFeedback};
pub use adaptation::{
    AdaptationSuggestion, SuggestionCategory, SuggestionItem, SuggestionPriority, Verdict,
};
pub use compliance::ComplianceReport;
pub use plan::{
    PlannedSession, PlannedWeek, SessionIntensity, SessionType, TrainingPhase, WeekRange,
};
pub use race::{PerformanceEstimate, RaceDistance, RaceQuestionnaire, RaceResult};
pub use zones::{PaceZone, ZoneName, ZoneSet, ZoneSetRecord};
