// ABOUTME: Turns a compliance report into a verdict and a bounded volume change
// ABOUTME: Pure evaluation of the ordered rule table; identical inputs give identical output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::applier::AdaptationApplier;
use super::rules::{default_rules, AdaptationRule, RuleContext, RuleKind};
use crate::config::{AdaptationConfig, IntelligenceConfig};
use crate::models::{AdaptationSuggestion, ComplianceReport, PlannedWeek, Verdict};
use std::cmp::Ordering;
use tracing::{debug, info};

/// Adaptation advisor
#[derive(Debug, Clone)]
pub struct AdaptationAdvisor {
    config: AdaptationConfig,
    rules: Vec<AdaptationRule>,
}

impl Default for AdaptationAdvisor {
    fn default() -> Self {
        Self::new(IntelligenceConfig::global().adaptation.clone())
    }
}

impl AdaptationAdvisor {
    /// Advisor with the default rule table
    #[must_use]
    pub fn new(config: AdaptationConfig) -> Self {
        Self::with_rules(config, default_rules())
    }

    /// Advisor with a custom rule table
    #[must_use]
    pub const fn with_rules(config: AdaptationConfig, rules: Vec<AdaptationRule>) -> Self {
        Self { config, rules }
    }

    /// Rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[AdaptationRule] {
        &self.rules
    }

    /// Insert a rule at `index`, or at the end when `index` is past it
    pub fn insert_rule(&mut self, index: usize, rule: AdaptationRule) {
        let index = index.min(self.rules.len());
        self.rules.insert(index, rule);
    }

    /// Advise on the week following `report`
    ///
    /// The volume change is clamped to the configured bounds and items are
    /// ranked by priority, keeping rule order among equals.
    #[must_use]
    pub fn advise(&self, report: &ComplianceReport, next_week: &PlannedWeek) -> AdaptationSuggestion {
        let mut verdict: Option<Verdict> = None;
        let mut volume_change_percent = 0;
        let mut items = Vec::new();

        for rule in &self.rules {
            if rule.kind == RuleKind::Decision && verdict.is_some() {
                continue;
            }
            if rule.kind == RuleKind::Modifier && verdict.is_none() {
                continue;
            }
            let context = RuleContext {
                report,
                next_week,
                config: &self.config,
                verdict,
            };
            let Some(outcome) = rule.evaluate(&context) else {
                continue;
            };
            debug!(rule = rule.name, "adaptation rule fired");
            if let Some(decided) = outcome.verdict {
                verdict = Some(decided);
            }
            if let Some(change) = outcome.volume_change_percent {
                volume_change_percent = change;
            }
            items.push(outcome.item);
        }

        let verdict = verdict.unwrap_or(Verdict::Maintain);
        let volume_change_percent = volume_change_percent.clamp(
            self.config.min_volume_change_percent,
            self.config.max_volume_change_percent,
        );
        items.sort_by_key(|item| item.priority);

        let overall_message = self.overall_message(verdict, volume_change_percent, next_week);
        info!(
            week = report.week_number,
            compliance = report.compliance_percent,
            %verdict,
            volume_change_percent,
            "adaptation advised"
        );

        AdaptationSuggestion {
            verdict,
            volume_change_percent,
            items,
            overall_message,
        }
    }

    fn overall_message(&self, verdict: Verdict, change: i32, next_week: &PlannedWeek) -> String {
        let applier = AdaptationApplier::new(self.config.clone());
        let before = next_week.total_minutes();
        let after: u32 = next_week
            .sessions
            .iter()
            .map(|s| applier.adjusted_duration(s.duration_minutes, change))
            .sum();

        let action = match change.cmp(&0) {
            Ordering::Less => format!("reduce volume by {}%", change.unsigned_abs()),
            Ordering::Greater => format!("increase volume by {change}%"),
            Ordering::Equal => "keep volume unchanged".to_owned(),
        };
        format!(
            "{verdict}: {action}. Week {} goes from {before} to {after} minutes.",
            next_week.week_number
        )
    }
}
