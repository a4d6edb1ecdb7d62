// ABOUTME: Zone command for allure-cli
// ABOUTME: Estimates VMA from race times and prints the pace zones and race predictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use allure::intelligence::{PaceZoneCalculator, PerformanceEstimator};
use allure::models::{RaceDistance, RaceQuestionnaire};
use anyhow::{anyhow, Result};
use serde_json::json;

use crate::helpers::display::{display_estimate, display_predictions, display_zone_table};

/// Race times and declared VMA from the command line
pub struct ZonesArgs {
    pub five_k: Option<String>,
    pub ten_k: Option<String>,
    pub half_marathon: Option<String>,
    pub marathon: Option<String>,
    pub vma: Option<f64>,
}

/// Estimate, compute zones and print them
pub fn run(args: &ZonesArgs, as_json: bool) -> Result<()> {
    let questionnaire = RaceQuestionnaire {
        time_5k: args.five_k.clone(),
        time_10k: args.ten_k.clone(),
        time_half_marathon: args.half_marathon.clone(),
        time_marathon: args.marathon.clone(),
        declared_vma_kmh: args.vma,
    };

    let estimate = PerformanceEstimator::estimate_from_questionnaire(&questionnaire)?
        .ok_or_else(|| anyhow!("No usable race time and no declared VMA"))?;
    let zones = PaceZoneCalculator::compute_for(&estimate)?;

    if as_json {
        let predictions: Vec<_> = RaceDistance::ALL
            .iter()
            .map(|distance| {
                json!({
                    "distance": distance.label(),
                    "seconds": estimate.predicted_time_seconds(*distance).round(),
                })
            })
            .collect();
        let output = json!({
            "estimate": estimate,
            "zones": zones,
            "predictions": predictions,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    display_estimate(&estimate);
    display_zone_table(&zones);
    display_predictions(&estimate);
    Ok(())
}
