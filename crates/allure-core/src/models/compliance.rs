// ABOUTME: Weekly compliance report comparing prescribed and completed sessions
// ABOUTME: Computed on demand, never the system of record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// How closely a completed week followed its prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Week number within the plan
    pub week_number: u32,
    /// Sessions prescribed
    pub sessions_planned: u32,
    /// Running activities recorded in the week
    pub sessions_done: u32,
    /// Compliance score in [0, 100]
    pub compliance_percent: u8,
    /// Mean RPE of completed sessions with feedback
    pub avg_rpe: Option<f64>,
    /// Running-equivalent minutes from cross-training
    pub cross_training_equivalent_minutes: f64,
    /// Cross-training activities recorded in the week
    pub cross_training_sessions: u32,
    /// Running distance recorded in the week
    pub running_distance_km: f64,
    /// Running moving time recorded in the week
    pub running_minutes: f64,
    /// One-line summary
    pub summary_text: String,
}
