// ABOUTME: Applies an adaptation suggestion to the next planned week
// ABOUTME: Scales durations, rounds to 5 minutes, floors at 15 and eases one hard session on recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{AdaptationConfig, IntelligenceConfig};
use crate::models::{AdaptationSuggestion, PlannedWeek, SessionIntensity, Verdict};
use tracing::debug;

/// Adaptation applier
#[derive(Debug, Clone)]
pub struct AdaptationApplier {
    config: AdaptationConfig,
}

impl Default for AdaptationApplier {
    fn default() -> Self {
        Self::new(IntelligenceConfig::global().adaptation.clone())
    }
}

impl AdaptationApplier {
    /// Create an applier
    #[must_use]
    pub const fn new(config: AdaptationConfig) -> Self {
        Self { config }
    }

    /// Return the adapted week; `week` itself is left untouched
    ///
    /// Days, titles, session types and the zone fingerprint are preserved.
    #[must_use]
    pub fn apply(&self, week: &PlannedWeek, suggestion: &AdaptationSuggestion) -> PlannedWeek {
        let mut adapted = week.clone();
        for session in &mut adapted.sessions {
            session.duration_minutes =
                self.adjusted_duration(session.duration_minutes, suggestion.volume_change_percent);
        }

        if suggestion.verdict == Verdict::Recovery {
            if let Some(session) = adapted
                .sessions
                .iter_mut()
                .find(|s| s.intensity == SessionIntensity::Difficile)
            {
                debug!(day = %session.day_of_week, title = %session.title, "easing hard session");
                session.intensity = SessionIntensity::Modere;
            }
        }

        adapted
    }

    /// Scale one duration, round to the configured step and apply the floor
    #[must_use]
    pub fn adjusted_duration(&self, minutes: u32, volume_change_percent: i32) -> u32 {
        let factor = 1.0 + f64::from(volume_change_percent) / 100.0;
        let step = f64::from(self.config.rounding_step_minutes.max(1));
        let rounded = ((f64::from(minutes) * factor).max(0.0) / step).round() * step;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // Safe: non-negative and bounded by 1.1 * u32 input after rounding
        let rounded = rounded.min(f64::from(u32::MAX)) as u32;
        rounded.max(self.config.min_session_minutes)
    }
}
