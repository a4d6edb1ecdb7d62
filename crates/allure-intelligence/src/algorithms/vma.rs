// ABOUTME: Combines self-reported race results into one VMA (maximal aerobic speed) estimate
// ABOUTME: Distance-specific race factors, trust ordering and 60/40 weighting of the best two
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! VMA estimation from race results.
//!
//! Each result is converted with `vma = avg_speed / race_factor(distance)`.
//! Shorter races are trusted more: with two or more results, only the two
//! most-trusted are kept and blended `0.6 * top1 + 0.4 * top2`.
//!
//! No result at all is a normal state and yields `None`.

use super::time_parser::TimeParser;
use crate::constants::estimation::{DECLARED_VMA_LABEL, PRIMARY_WEIGHT, SECONDARY_WEIGHT};
use crate::errors::{AppResult, ErrorCode};
use crate::models::{PerformanceEstimate, RaceQuestionnaire, RaceResult};
use tracing::{debug, info, warn};

/// Race-result based VMA estimator
pub struct PerformanceEstimator;

impl PerformanceEstimator {
    /// VMA implied by a single race result
    #[must_use]
    pub fn vma_from_result(result: &RaceResult) -> f64 {
        result.avg_speed_kmh() / result.distance().race_factor()
    }

    /// Estimate VMA from race results
    ///
    /// Returns `Ok(None)` when `results` is empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the combined VMA is not a positive finite number,
    /// which only happens with degenerate results.
    pub fn estimate(results: &[RaceResult]) -> AppResult<Option<PerformanceEstimate>> {
        let mut ranked: Vec<&RaceResult> = results.iter().collect();
        ranked.sort_by_key(|result| result.distance().priority());

        let estimate = match ranked.as_slice() {
            [] => {
                debug!("no race results, no VMA estimate");
                return Ok(None);
            }
            [only] => PerformanceEstimate::new(
                Self::vma_from_result(only),
                only.distance().label(),
            )?,
            [first, second, ignored @ ..] => {
                if !ignored.is_empty() {
                    debug!(
                        ignored = ignored.len(),
                        "keeping only the two most reliable race results"
                    );
                }
                let vma = Self::vma_from_result(first).mul_add(
                    PRIMARY_WEIGHT,
                    Self::vma_from_result(second) * SECONDARY_WEIGHT,
                );
                PerformanceEstimate::new(
                    vma,
                    format!(
                        "average of {} and {}",
                        first.distance().label(),
                        second.distance().label()
                    ),
                )?
            }
        };

        info!(
            vma_kmh = estimate.vma_kmh(),
            source = estimate.source_label(),
            "VMA estimated"
        );
        Ok(Some(estimate))
    }

    /// Parse every answered distance of a questionnaire into race results
    ///
    /// Unparseable or zero-length answers are dropped with a warning; the
    /// remaining answers are still returned.
    #[must_use]
    pub fn race_results(questionnaire: &RaceQuestionnaire) -> Vec<RaceResult> {
        questionnaire
            .answered()
            .filter_map(|(distance, text)| {
                let parsed = TimeParser::parse(text)
                    .and_then(|seconds| RaceResult::new(distance, seconds, text));
                match parsed {
                    Ok(result) => Some(result),
                    Err(e) => {
                        warn!(
                            distance = distance.label(),
                            raw = text,
                            code = ?e.code,
                            "dropping unusable race time"
                        );
                        None
                    }
                }
            })
            .collect()
    }

    /// Estimate VMA from a questionnaire
    ///
    /// Race results win over a declared VMA; the declared value is only used
    /// when no race time is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the race results are degenerate. An invalid
    /// declared VMA is ignored with a warning.
    pub fn estimate_from_questionnaire(
        questionnaire: &RaceQuestionnaire,
    ) -> AppResult<Option<PerformanceEstimate>> {
        let results = Self::race_results(questionnaire);
        if let Some(estimate) = Self::estimate(&results)? {
            return Ok(Some(estimate));
        }

        let Some(declared) = questionnaire.declared_vma_kmh else {
            return Ok(None);
        };
        match PerformanceEstimate::new(declared, DECLARED_VMA_LABEL) {
            Ok(estimate) => {
                info!(vma_kmh = declared, "using declared VMA");
                Ok(Some(estimate))
            }
            Err(e) if e.code == ErrorCode::InvalidInput => {
                warn!(declared, "ignoring invalid declared VMA");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::RaceDistance;

    #[test]
    fn test_vma_from_result_applies_race_factor() {
        let result = RaceResult::new(RaceDistance::HalfMarathon, 6_300, "1:45:00").unwrap();
        let expected = (21.1 / 1.75) / 0.85;
        assert!((PerformanceEstimator::vma_from_result(&result) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_order_of_input_does_not_matter() {
        let five = RaceResult::new(RaceDistance::FiveK, 1_500, "25:00").unwrap();
        let marathon = RaceResult::new(RaceDistance::Marathon, 14_400, "4h").unwrap();
        let a = PerformanceEstimator::estimate(&[five.clone(), marathon.clone()])
            .unwrap()
            .unwrap();
        let b = PerformanceEstimator::estimate(&[marathon, five])
            .unwrap()
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.source_label(), "average of 5km and marathon");
    }
}
