// ABOUTME: Adaptation of upcoming weeks from a completed week's compliance report
// ABOUTME: Ordered rule table for the verdict and a mechanical applier for the next week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Rule evaluation producing an `AdaptationSuggestion`
pub mod advisor;
/// Applies a suggestion to the next planned week
pub mod applier;
/// The default ordered rule table
pub mod rules;

pub use advisor::AdaptationAdvisor;
pub use applier::AdaptationApplier;
pub use rules::{AdaptationRule, RuleContext, RuleKind, RuleOutcome};
