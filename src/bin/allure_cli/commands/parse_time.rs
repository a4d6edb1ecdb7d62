// ABOUTME: Time parsing command for allure-cli
// ABOUTME: Prints each race time text as seconds and as a normalized duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use allure::intelligence::{format_duration, TimeParser};
use anyhow::{bail, Result};

/// Parse every text, reporting failures after printing the successes
pub fn run(times: &[String]) -> Result<()> {
    let mut failed = 0_usize;
    for text in times {
        match TimeParser::parse(text) {
            Ok(seconds) => println!("{text:>12} -> {seconds} s ({})", format_duration(seconds)),
            Err(e) => {
                failed += 1;
                eprintln!("{text:>12} -> {e}");
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} time(s) could not be parsed", times.len());
    }
    Ok(())
}
