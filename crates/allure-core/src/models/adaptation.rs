// ABOUTME: Adaptation verdicts, ranked suggestion items, and the overall suggestion
// ABOUTME: Pure output of the advisor, never persisted by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical judgment of a completed week, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Keep the plan as is
    Maintain,
    /// Small correction
    Adjust,
    /// Cut volume
    Reduce,
    /// Recovery week
    Recovery,
}

impl Verdict {
    /// One level less severe; `Maintain` stays `Maintain`
    #[must_use]
    pub const fn less_severe(self) -> Self {
        match self {
            Self::Recovery => Self::Reduce,
            Self::Reduce => Self::Adjust,
            Self::Adjust | Self::Maintain => Self::Maintain,
        }
    }

    /// Upper-case label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Maintain => "MAINTAIN",
            Self::Adjust => "ADJUST",
            Self::Reduce => "REDUCE",
            Self::Recovery => "RECOVERY",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority of a suggestion item; `High` sorts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuggestionPriority {
    /// Safety-relevant correction
    High,
    /// Optimization
    Medium,
    /// Tip
    Low,
}

/// Area a suggestion item addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    /// Rest and recovery
    Recovery,
    /// Weekly volume
    Volume,
    /// Session intensity
    Intensity,
    /// Alternate aerobic work
    CrossTraining,
    /// Regularity
    Consistency,
    /// Athlete feedback
    Feedback,
    /// Load progression
    Progression,
}

/// One ranked recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    /// Area addressed
    pub category: SuggestionCategory,
    /// Ranking priority
    pub priority: SuggestionPriority,
    /// Short title
    pub title: String,
    /// Explanation
    pub detail: String,
}

/// Verdict plus bounded volume correction for upcoming weeks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptationSuggestion {
    /// Verdict
    pub verdict: Verdict,
    /// Volume change in percent, within [-50, +10]
    pub volume_change_percent: i32,
    /// Items ranked by priority
    pub items: Vec<SuggestionItem>,
    /// Message assembled from the verdict and volume change
    pub overall_message: String,
}
