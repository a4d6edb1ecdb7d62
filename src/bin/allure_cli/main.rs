// ABOUTME: Allure CLI - command-line access to calibration and weekly adherence review
// ABOUTME: Parses race times, prints pace zones and reviews a week against recorded activities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Parse race times
//! allure-cli parse-time 45:30 "1h30" 3:05:00
//!
//! # Estimate VMA and print pace zones
//! allure-cli zones --ten-k 45:00 --half-marathon 1:42:00
//!
//! # Same as JSON
//! allure-cli zones --ten-k 45:00 --json
//!
//! # Review a week from exported activities
//! allure-cli review --week week3.json --next-week week4.json \
//!     --activities activities.json --feedback feedback.json --week-start 2025-03-17
//!
//! # Review a week from the configured tracker (ALLURE_PROVIDER_BASE_URL)
//! allure-cli review --week week3.json --next-week week4.json --athlete 12345 \
//!     --week-start 2025-03-17
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use allure::logging::LoggingConfig;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "allure-cli",
    about = "Allure training calibration CLI",
    long_about = "Estimate VMA and pace zones from race times, and review a training week against recorded activities."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Parse race times into seconds
    ParseTime {
        /// Time texts ("45:30", "1h30", "90min", "3:05:00")
        #[arg(required = true)]
        times: Vec<String>,
    },

    /// Estimate VMA and print the pace zones
    Zones {
        /// 5 km race time
        #[arg(long = "five-k")]
        five_k: Option<String>,

        /// 10 km race time
        #[arg(long = "ten-k")]
        ten_k: Option<String>,

        /// Half marathon race time
        #[arg(long)]
        half_marathon: Option<String>,

        /// Marathon race time
        #[arg(long)]
        marathon: Option<String>,

        /// Declared VMA in km/h, used only without a usable race time
        #[arg(long)]
        vma: Option<f64>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Review a planned week and adapt the following one
    Review {
        /// Planned week JSON file
        #[arg(long)]
        week: PathBuf,

        /// Following planned week JSON file
        #[arg(long)]
        next_week: PathBuf,

        /// Activity export JSON file; the configured tracker is queried without it
        #[arg(long)]
        activities: Option<PathBuf>,

        /// Session feedback JSON file
        #[arg(long)]
        feedback: Option<PathBuf>,

        /// Athlete id at the tracker
        #[arg(long, default_value = "local")]
        athlete: String,

        /// Monday of the reviewed week (YYYY-MM-DD)
        #[arg(long)]
        week_start: NaiveDate,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;
    debug!("Allure CLI");

    match cli.command {
        Command::ParseTime { times } => commands::parse_time::run(&times),
        Command::Zones {
            five_k,
            ten_k,
            half_marathon,
            marathon,
            vma,
            json,
        } => commands::zones::run(
            &commands::zones::ZonesArgs {
                five_k,
                ten_k,
                half_marathon,
                marathon,
                vma,
            },
            json,
        ),
        Command::Review {
            week,
            next_week,
            activities,
            feedback,
            athlete,
            week_start,
            json,
        } => {
            commands::review::run(
                &commands::review::ReviewArgs {
                    week,
                    next_week,
                    activities,
                    feedback,
                    athlete,
                    week_start,
                },
                json,
            )
            .await
        }
    }
}
