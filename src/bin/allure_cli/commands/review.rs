// ABOUTME: Weekly review command for allure-cli
// ABOUTME: Scores a planned week against activities and prints the adapted following week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;
use std::sync::Arc;

use allure::config::PlannerConfig;
use allure::inputs::{read_json_file, read_optional_json_file};
use allure::intelligence::{AdaptationAdvisor, AdaptationApplier, WeekComplianceAnalyzer};
use allure::models::{ActivityRecord, PlannedWeek, SessionFeedback, WeekRange};
use allure::providers::{ActivityProvider, SyntheticProvider};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde_json::json;
use tracing::info;

use crate::helpers::display::{display_report, display_suggestion, display_week};

/// Input files and identifiers for one review
pub struct ReviewArgs {
    pub week: PathBuf,
    pub next_week: PathBuf,
    pub activities: Option<PathBuf>,
    pub feedback: Option<PathBuf>,
    pub athlete: String,
    pub week_start: NaiveDate,
}

/// Compare, advise and apply, then print the outcome
pub async fn run(args: &ReviewArgs, as_json: bool) -> Result<()> {
    let config = PlannerConfig::from_env()?;

    let week: PlannedWeek = read_json_file(&args.week)?;
    let next_week: PlannedWeek = read_json_file(&args.next_week)?;
    let feedback: Vec<SessionFeedback> = read_optional_json_file(args.feedback.as_deref())?;
    let range = WeekRange::new(args.week_start)?;

    let provider = build_provider(&config, args)?;
    info!(provider = provider.name(), athlete = %args.athlete, %range, "reviewing week");

    let analyzer = WeekComplianceAnalyzer::default().with_fetch_timeout(config.fetch_timeout);
    let report = analyzer
        .compare(&week, provider.as_ref(), &args.athlete, range, &feedback)
        .await?;
    let suggestion = AdaptationAdvisor::default().advise(&report, &next_week);
    let revised = AdaptationApplier::default().apply(&next_week, &suggestion);

    if as_json {
        let output = json!({
            "report": report,
            "suggestion": suggestion,
            "revised_next_week": revised,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    display_report(&report);
    display_suggestion(&suggestion);
    display_week(&revised);
    Ok(())
}

fn build_provider(config: &PlannerConfig, args: &ReviewArgs) -> Result<Arc<dyn ActivityProvider>> {
    if let Some(path) = &args.activities {
        let records: Vec<ActivityRecord> = read_json_file(path)?;
        return Ok(Arc::new(SyntheticProvider::with_activities(
            &args.athlete,
            records,
        )));
    }

    config
        .provider
        .http_provider()
        .map(|provider| Arc::new(provider) as Arc<dyn ActivityProvider>)
        .ok_or_else(|| anyhow!("No --activities file given and ALLURE_PROVIDER_BASE_URL is not set"))
}
