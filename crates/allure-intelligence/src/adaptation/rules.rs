// ABOUTME: Ordered (predicate -> effect) rules behind the adaptation verdict
// ABOUTME: Decision rules pick the verdict, modifiers temper it, tips add low-priority advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Adaptation Rules
//!
//! The advisor walks the table in order:
//!
//! - [`RuleKind::Decision`] rules are tried until one fires; it sets the
//!   verdict and the volume change.
//! - [`RuleKind::Modifier`] rules see the decided verdict and may replace it.
//! - [`RuleKind::Tip`] rules only add an item.
//!
//! Every firing rule contributes exactly one suggestion item. Each rule is a
//! plain value built by a function of this module, so it can be tested alone
//! or spliced into a custom table.
//!
//! Decision predicates state their whole band: compliance range plus RPE
//! range, with the recovery triggers excluded everywhere else. Decision bands
//! only overlap where `maintain_comfortable` and `maintain` agree on the
//! verdict, so inserting a rule ahead of another never changes what the
//! displaced rule would have decided.

use crate::config::AdaptationConfig;
use crate::constants::adaptation::{
    ADJUST_FATIGUE_VOLUME_PERCENT, ADJUST_MIN_COMPLIANCE, COMFORTABLE_RPE_MAX,
    COMFORTABLE_RPE_MIN, EASY_WEEK_RPE_MAX, MAINTAIN_MIN_COMPLIANCE, PROGRESSION_VOLUME_PERCENT,
    RECOVERY_RPE, RECOVERY_VOLUME_PERCENT, REDUCE_MIN_COMPLIANCE, REDUCE_VOLUME_PERCENT,
};
use crate::models::{
    ComplianceReport, PlannedWeek, SuggestionCategory, SuggestionItem, SuggestionPriority,
    Verdict,
};

/// When a rule is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Tried until one fires
    Decision,
    /// Evaluated after a decision, may change it
    Modifier,
    /// Always evaluated, only adds an item
    Tip,
}

/// Inputs visible to a rule
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Report of the completed week
    pub report: &'a ComplianceReport,
    /// Week the suggestion will be applied to
    pub next_week: &'a PlannedWeek,
    /// Adaptation bounds
    pub config: &'a AdaptationConfig,
    /// Verdict decided so far
    pub verdict: Option<Verdict>,
}

impl RuleContext<'_> {
    const fn compliance(&self) -> u8 {
        self.report.compliance_percent
    }

    fn compliance_in(&self, min: u8, max_exclusive: u8) -> bool {
        (min..max_exclusive).contains(&self.compliance())
    }

    fn compliance_at_least(&self, min: u8) -> bool {
        self.compliance() >= min
    }

    fn rpe_at_least(&self, threshold: f64) -> bool {
        self.report.avg_rpe.is_some_and(|rpe| rpe >= threshold)
    }

    fn rpe_above(&self, threshold: f64) -> bool {
        self.report.avg_rpe.is_some_and(|rpe| rpe > threshold)
    }

    fn rpe_at_most(&self, threshold: f64) -> bool {
        self.report.avg_rpe.is_some_and(|rpe| rpe <= threshold)
    }

    /// Volume change of an ADJUST verdict for this week's effort
    fn adjust_volume(&self) -> i32 {
        if self.rpe_above(COMFORTABLE_RPE_MAX) {
            ADJUST_FATIGUE_VOLUME_PERCENT
        } else {
            0
        }
    }

    fn rpe_label(&self) -> String {
        self.report
            .avg_rpe
            .map_or_else(|| "n/a".to_owned(), |rpe| format!("{rpe:.1}"))
    }
}

/// What a firing rule produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// New verdict, if the rule decides or modifies one
    pub verdict: Option<Verdict>,
    /// New volume change, if the rule sets one
    pub volume_change_percent: Option<i32>,
    /// The item this rule contributes
    pub item: SuggestionItem,
}

impl RuleOutcome {
    fn decide(verdict: Verdict, volume_change_percent: i32, item: SuggestionItem) -> Self {
        Self {
            verdict: Some(verdict),
            volume_change_percent: Some(volume_change_percent),
            item,
        }
    }

    const fn tip(item: SuggestionItem) -> Self {
        Self {
            verdict: None,
            volume_change_percent: None,
            item,
        }
    }
}

/// One entry of the ordered rule table
#[derive(Debug, Clone, Copy)]
pub struct AdaptationRule {
    /// Stable rule name, used in logs
    pub name: &'static str,
    /// Evaluation phase
    pub kind: RuleKind,
    /// Whether the rule fires
    pub predicate: fn(&RuleContext<'_>) -> bool,
    /// What the rule produces when it fires
    pub effect: fn(&RuleContext<'_>) -> RuleOutcome,
}

impl AdaptationRule {
    /// Evaluate the rule, `None` when it does not fire
    #[must_use]
    pub fn evaluate(&self, context: &RuleContext<'_>) -> Option<RuleOutcome> {
        (self.predicate)(context).then(|| (self.effect)(context))
    }
}

fn item(
    category: SuggestionCategory,
    priority: SuggestionPriority,
    title: &str,
    detail: String,
) -> SuggestionItem {
    SuggestionItem {
        category,
        priority,
        title: title.to_owned(),
        detail,
    }
}

/// The default table, in evaluation order
#[must_use]
pub fn default_rules() -> Vec<AdaptationRule> {
    vec![
        recovery(),
        reduce(),
        adjust_fatigued(),
        adjust_inconsistent(),
        maintain_comfortable(),
        progress_easy_week(),
        ease_hard_week(),
        maintain(),
        cross_training_override(),
        missing_feedback(),
    ]
}

/// Compliance under 50% or RPE of 9 and more: recovery week
#[must_use]
pub fn recovery() -> AdaptationRule {
    AdaptationRule {
        name: "recovery",
        kind: RuleKind::Decision,
        predicate: |ctx| ctx.compliance() < REDUCE_MIN_COMPLIANCE || ctx.rpe_at_least(RECOVERY_RPE),
        effect: |ctx| {
            let reason = if ctx.rpe_at_least(RECOVERY_RPE) {
                format!("Average RPE {} signals accumulated fatigue.", ctx.rpe_label())
            } else {
                format!(
                    "Only {}% of the planned sessions were completed.",
                    ctx.compliance()
                )
            };
            RuleOutcome::decide(
                Verdict::Recovery,
                RECOVERY_VOLUME_PERCENT,
                item(
                    SuggestionCategory::Recovery,
                    SuggestionPriority::High,
                    "Take a recovery week",
                    format!("{reason} Volume drops and the hardest session is eased."),
                ),
            )
        },
    }
}

/// Compliance in [50, 70) with RPE under 9: reduce volume
#[must_use]
pub fn reduce() -> AdaptationRule {
    AdaptationRule {
        name: "reduce",
        kind: RuleKind::Decision,
        predicate: |ctx| {
            ctx.compliance_in(REDUCE_MIN_COMPLIANCE, ADJUST_MIN_COMPLIANCE)
                && !ctx.rpe_at_least(RECOVERY_RPE)
        },
        effect: |ctx| {
            RuleOutcome::decide(
                Verdict::Reduce,
                REDUCE_VOLUME_PERCENT,
                item(
                    SuggestionCategory::Volume,
                    SuggestionPriority::High,
                    "Reduce weekly volume",
                    format!(
                        "{}% compliance: the plan asks more than the current schedule allows.",
                        ctx.compliance()
                    ),
                ),
            )
        },
    }
}

/// Compliance in [70, 90) with RPE in (7, 9): adjust and cut volume
#[must_use]
pub fn adjust_fatigued() -> AdaptationRule {
    AdaptationRule {
        name: "adjust_fatigued",
        kind: RuleKind::Decision,
        predicate: |ctx| {
            ctx.compliance_in(ADJUST_MIN_COMPLIANCE, MAINTAIN_MIN_COMPLIANCE)
                && ctx.rpe_above(COMFORTABLE_RPE_MAX)
                && !ctx.rpe_at_least(RECOVERY_RPE)
        },
        effect: |ctx| {
            RuleOutcome::decide(
                Verdict::Adjust,
                ADJUST_FATIGUE_VOLUME_PERCENT,
                item(
                    SuggestionCategory::Intensity,
                    SuggestionPriority::High,
                    "Ease off the effort",
                    format!(
                        "Sessions felt hard (average RPE {}) and {}% were completed.",
                        ctx.rpe_label(),
                        ctx.compliance()
                    ),
                ),
            )
        },
    }
}

/// Compliance in [70, 90) with RPE of 7 or less, or none: adjust without volume change
#[must_use]
pub fn adjust_inconsistent() -> AdaptationRule {
    AdaptationRule {
        name: "adjust_inconsistent",
        kind: RuleKind::Decision,
        predicate: |ctx| {
            ctx.compliance_in(ADJUST_MIN_COMPLIANCE, MAINTAIN_MIN_COMPLIANCE)
                && !ctx.rpe_above(COMFORTABLE_RPE_MAX)
        },
        effect: |ctx| {
            RuleOutcome::decide(
                Verdict::Adjust,
                0,
                item(
                    SuggestionCategory::Consistency,
                    SuggestionPriority::Medium,
                    "Protect your training days",
                    format!(
                        "{}% compliance. Volume stays the same; aim to complete every session.",
                        ctx.compliance()
                    ),
                ),
            )
        },
    }
}

/// Compliance of 90% and more with RPE in [4, 7]: maintain
#[must_use]
pub fn maintain_comfortable() -> AdaptationRule {
    AdaptationRule {
        name: "maintain_comfortable",
        kind: RuleKind::Decision,
        predicate: |ctx| {
            ctx.compliance_at_least(MAINTAIN_MIN_COMPLIANCE)
                && ctx
                    .report
                    .avg_rpe
                    .is_some_and(|rpe| (COMFORTABLE_RPE_MIN..=COMFORTABLE_RPE_MAX).contains(&rpe))
        },
        effect: |ctx| {
            RuleOutcome::decide(
                Verdict::Maintain,
                0,
                item(
                    SuggestionCategory::Volume,
                    SuggestionPriority::Low,
                    "Keep the plan",
                    format!(
                        "Sessions completed at a comfortable effort (average RPE {}).",
                        ctx.rpe_label()
                    ),
                ),
            )
        },
    }
}

/// Compliance of 90% and more with RPE of 3 or less: progress volume
#[must_use]
pub fn progress_easy_week() -> AdaptationRule {
    AdaptationRule {
        name: "progress_easy_week",
        kind: RuleKind::Decision,
        predicate: |ctx| {
            ctx.compliance_at_least(MAINTAIN_MIN_COMPLIANCE) && ctx.rpe_at_most(EASY_WEEK_RPE_MAX)
        },
        effect: |ctx| {
            RuleOutcome::decide(
                Verdict::Maintain,
                PROGRESSION_VOLUME_PERCENT,
                item(
                    SuggestionCategory::Progression,
                    SuggestionPriority::Low,
                    "Step up the volume",
                    format!(
                        "Every session done and it felt easy (average RPE {}).",
                        ctx.rpe_label()
                    ),
                ),
            )
        },
    }
}

/// Compliance of 90% and more with RPE in (7, 9): small adjustment
#[must_use]
pub fn ease_hard_week() -> AdaptationRule {
    AdaptationRule {
        name: "ease_hard_week",
        kind: RuleKind::Decision,
        predicate: |ctx| {
            ctx.compliance_at_least(MAINTAIN_MIN_COMPLIANCE)
                && ctx.rpe_above(COMFORTABLE_RPE_MAX)
                && !ctx.rpe_at_least(RECOVERY_RPE)
        },
        effect: |ctx| {
            RuleOutcome::decide(
                Verdict::Adjust,
                ADJUST_FATIGUE_VOLUME_PERCENT,
                item(
                    SuggestionCategory::Intensity,
                    SuggestionPriority::Medium,
                    "Watch the effort",
                    format!(
                        "All sessions done but the effort was high (average RPE {}).",
                        ctx.rpe_label()
                    ),
                ),
            )
        },
    }
}

/// Compliance of 90% and more with RPE in (3, 7], or none: maintain
#[must_use]
pub fn maintain() -> AdaptationRule {
    AdaptationRule {
        name: "maintain",
        kind: RuleKind::Decision,
        predicate: |ctx| {
            ctx.compliance_at_least(MAINTAIN_MIN_COMPLIANCE)
                && !ctx.rpe_at_most(EASY_WEEK_RPE_MAX)
                && !ctx.rpe_above(COMFORTABLE_RPE_MAX)
        },
        effect: |ctx| {
            RuleOutcome::decide(
                Verdict::Maintain,
                0,
                item(
                    SuggestionCategory::Consistency,
                    SuggestionPriority::Low,
                    "Keep the plan",
                    format!("{}% compliance, nothing to correct.", ctx.compliance()),
                ),
            )
        },
    }
}

/// Enough cross-training steps a REDUCE or RECOVERY verdict one level down
///
/// The eased verdict takes the volume change its own row would give:
/// RECOVERY becomes REDUCE at -20%, REDUCE becomes ADJUST at -10% when RPE
/// is above 7 and 0% otherwise.
#[must_use]
pub fn cross_training_override() -> AdaptationRule {
    AdaptationRule {
        name: "cross_training_override",
        kind: RuleKind::Modifier,
        predicate: |ctx| {
            matches!(ctx.verdict, Some(Verdict::Reduce | Verdict::Recovery))
                && ctx.report.cross_training_equivalent_minutes
                    >= f64::from(ctx.config.cross_training_override_minutes)
        },
        effect: |ctx| {
            let from = ctx.verdict.unwrap_or(Verdict::Reduce);
            let to = from.less_severe();
            let volume = match to {
                Verdict::Reduce => REDUCE_VOLUME_PERCENT,
                Verdict::Adjust => ctx.adjust_volume(),
                Verdict::Maintain | Verdict::Recovery => 0,
            };
            RuleOutcome::decide(
                to,
                volume,
                item(
                    SuggestionCategory::CrossTraining,
                    SuggestionPriority::Medium,
                    "Cross-training counted",
                    format!(
                        "{:.0} running-equivalent minutes of cross-training kept the aerobic load up, \
                         so the verdict eases from {from} to {to}.",
                        ctx.report.cross_training_equivalent_minutes
                    ),
                ),
            )
        },
    }
}

/// No RPE reported for the week
#[must_use]
pub fn missing_feedback() -> AdaptationRule {
    AdaptationRule {
        name: "missing_feedback",
        kind: RuleKind::Tip,
        predicate: |ctx| ctx.report.avg_rpe.is_none(),
        effect: |_| {
            RuleOutcome::tip(item(
                SuggestionCategory::Feedback,
                SuggestionPriority::Low,
                "Log how sessions felt",
                "No RPE was reported this week; effort feedback sharpens the next adjustment."
                    .to_owned(),
            ))
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn report(compliance_percent: u8, avg_rpe: Option<f64>, cross: f64) -> ComplianceReport {
        ComplianceReport {
            week_number: 1,
            sessions_planned: 4,
            sessions_done: 3,
            compliance_percent,
            avg_rpe,
            cross_training_equivalent_minutes: cross,
            cross_training_sessions: 0,
            running_distance_km: 0.0,
            running_minutes: 0.0,
            summary_text: String::new(),
        }
    }

    fn week() -> PlannedWeek {
        PlannedWeek {
            week_number: 2,
            phase: None,
            zone_fingerprint: "f".to_owned(),
            sessions: Vec::new(),
        }
    }

    fn fires(rule: &AdaptationRule, report: &ComplianceReport, verdict: Option<Verdict>) -> bool {
        let config = AdaptationConfig::default();
        let next_week = week();
        let ctx = RuleContext {
            report,
            next_week: &next_week,
            config: &config,
            verdict,
        };
        rule.evaluate(&ctx).is_some()
    }

    #[test]
    fn test_recovery_fires_on_low_compliance_or_high_rpe() {
        let rule = recovery();
        assert!(fires(&rule, &report(49, Some(5.0), 0.0), None));
        assert!(fires(&rule, &report(95, Some(9.0), 0.0), None));
        assert!(!fires(&rule, &report(50, Some(8.9), 0.0), None));
    }

    #[test]
    fn test_adjust_fatigued_needs_rpe_above_seven() {
        let rule = adjust_fatigued();
        assert!(fires(&rule, &report(80, Some(7.5), 0.0), None));
        assert!(!fires(&rule, &report(80, Some(7.0), 0.0), None));
        assert!(!fires(&rule, &report(80, None, 0.0), None));
    }

    #[test]
    fn test_override_only_tempers_severe_verdicts() {
        let rule = cross_training_override();
        let heavy_cross = report(40, None, 60.0);
        assert!(fires(&rule, &heavy_cross, Some(Verdict::Recovery)));
        assert!(fires(&rule, &heavy_cross, Some(Verdict::Reduce)));
        assert!(!fires(&rule, &heavy_cross, Some(Verdict::Adjust)));
        assert!(!fires(&rule, &report(40, None, 59.9), Some(Verdict::Recovery)));
    }

    fn outcome(rule: &AdaptationRule, report: &ComplianceReport, verdict: Verdict) -> RuleOutcome {
        let config = AdaptationConfig::default();
        let next_week = week();
        let ctx = RuleContext {
            report,
            next_week: &next_week,
            config: &config,
            verdict: Some(verdict),
        };
        rule.evaluate(&ctx).unwrap()
    }

    #[test]
    fn test_reduce_stays_inside_its_band() {
        let rule = reduce();
        assert!(fires(&rule, &report(50, Some(5.0), 0.0), None));
        assert!(fires(&rule, &report(69, None, 0.0), None));
        assert!(!fires(&rule, &report(20, Some(5.0), 0.0), None));
        assert!(!fires(&rule, &report(60, Some(9.5), 0.0), None));
        assert!(!fires(&rule, &report(70, Some(5.0), 0.0), None));
    }

    #[test]
    fn test_adjust_rules_stay_inside_their_band() {
        let fatigued = adjust_fatigued();
        assert!(!fires(&fatigued, &report(40, Some(8.0), 0.0), None));
        assert!(!fires(&fatigued, &report(80, Some(9.0), 0.0), None));
        assert!(!fires(&fatigued, &report(95, Some(8.0), 0.0), None));

        let inconsistent = adjust_inconsistent();
        assert!(fires(&inconsistent, &report(70, Some(7.0), 0.0), None));
        assert!(fires(&inconsistent, &report(89, None, 0.0), None));
        assert!(!fires(&inconsistent, &report(10, None, 0.0), None));
        assert!(!fires(&inconsistent, &report(80, Some(7.5), 0.0), None));
        assert!(!fires(&inconsistent, &report(90, Some(5.0), 0.0), None));
    }

    #[test]
    fn test_high_compliance_rules_need_ninety_percent() {
        let below = [(10, Some(5.0)), (30, Some(2.0)), (80, Some(8.0)), (89, None)];
        for rule in [
            maintain_comfortable(),
            progress_easy_week(),
            ease_hard_week(),
            maintain(),
        ] {
            for (compliance, rpe) in below {
                assert!(
                    !fires(&rule, &report(compliance, rpe, 0.0), None),
                    "{} fired at {compliance}%",
                    rule.name
                );
            }
        }
    }

    #[test]
    fn test_high_compliance_rules_split_by_rpe() {
        assert!(fires(&maintain_comfortable(), &report(95, Some(4.0), 0.0), None));
        assert!(!fires(&maintain_comfortable(), &report(95, Some(3.5), 0.0), None));
        assert!(fires(&progress_easy_week(), &report(95, Some(3.0), 0.0), None));
        assert!(!fires(&progress_easy_week(), &report(95, None, 0.0), None));
        assert!(fires(&ease_hard_week(), &report(95, Some(8.9), 0.0), None));
        assert!(!fires(&ease_hard_week(), &report(95, Some(9.0), 0.0), None));

        let rule = maintain();
        assert!(fires(&rule, &report(100, None, 0.0), None));
        assert!(fires(&rule, &report(95, Some(3.5), 0.0), None));
        assert!(!fires(&rule, &report(95, Some(2.0), 0.0), None));
        assert!(!fires(&rule, &report(95, Some(8.0), 0.0), None));
        assert!(!fires(&rule, &report(95, Some(9.5), 0.0), None));
    }

    #[test]
    fn test_every_rating_falls_in_one_verdict() {
        let decisions = [
            recovery(),
            reduce(),
            adjust_fatigued(),
            adjust_inconsistent(),
            maintain_comfortable(),
            progress_easy_week(),
            ease_hard_week(),
            maintain(),
        ];
        for compliance in [0, 49, 50, 69, 70, 89, 90, 100] {
            for rpe in [None, Some(1.0), Some(3.5), Some(5.0), Some(7.5), Some(9.0), Some(10.0)] {
                let week_report = report(compliance, rpe, 0.0);
                let verdicts: Vec<Verdict> = decisions
                    .iter()
                    .filter(|rule| fires(rule, &week_report, None))
                    .map(|rule| outcome(rule, &week_report, Verdict::Maintain).verdict.unwrap())
                    .collect();
                assert!(!verdicts.is_empty(), "no rule for {compliance}% / {rpe:?}");
                assert!(
                    verdicts.iter().all(|v| *v == verdicts[0]),
                    "{compliance}% / {rpe:?} gave {verdicts:?}"
                );
            }
        }
    }

    #[test]
    fn test_override_volume_follows_the_eased_row() {
        let rule = cross_training_override();
        let calm = outcome(&rule, &report(60, Some(6.0), 75.0), Verdict::Reduce);
        assert_eq!(calm.verdict, Some(Verdict::Adjust));
        assert_eq!(calm.volume_change_percent, Some(0));

        let tired = outcome(&rule, &report(60, Some(8.0), 75.0), Verdict::Reduce);
        assert_eq!(tired.volume_change_percent, Some(ADJUST_FATIGUE_VOLUME_PERCENT));

        let severe = outcome(&rule, &report(30, Some(6.0), 75.0), Verdict::Recovery);
        assert_eq!(severe.verdict, Some(Verdict::Reduce));
        assert_eq!(severe.volume_change_percent, Some(REDUCE_VOLUME_PERCENT));
    }

    #[test]
    fn test_missing_feedback_is_a_low_tip() {
        let config = AdaptationConfig::default();
        let next_week = week();
        let report = report(95, None, 0.0);
        let ctx = RuleContext {
            report: &report,
            next_week: &next_week,
            config: &config,
            verdict: Some(Verdict::Maintain),
        };
        let outcome = missing_feedback().evaluate(&ctx).unwrap();
        assert_eq!(outcome.verdict, None);
        assert_eq!(outcome.item.priority, SuggestionPriority::Low);
        assert_eq!(outcome.item.category, SuggestionCategory::Feedback);
    }
}
