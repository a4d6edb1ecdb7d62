// ABOUTME: Parses free-form race duration text ("4h30", "52 min", "1:45:00") into seconds
// ABOUTME: Also formats seconds back into clock notation for display and round-trips
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Duration text parsing.
//!
//! Accepted forms, first match wins:
//!
//! 1. Hour form `H[h][:MM]`: `4h`, `4h30`, `4h:08`
//! 2. Minutes form `N min` / `Nmin`
//! 3. Clock form `H:MM:SS` or `MM:SS`
//!
//! Anything else is an `InvalidFormat` error carrying the offending text.

use crate::constants::units::{SECONDS_PER_HOUR_U32, SECONDS_PER_MINUTE};
use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static HOUR_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 4h, 4h30, 4h:08, 3 h 45
    Regex::new(r"(?i)^(\d+)\s*h\s*:?\s*(\d{1,2})?$").ok()
});

static MINUTES_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 52 min, 52min
    Regex::new(r"(?i)^(\d+)\s*min$").ok()
});

static CLOCK_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 1:45:00, 25:00
    Regex::new(r"^(\d+):(\d{1,2})(?::(\d{1,2}))?$").ok()
});

/// Free-form race duration parser
pub struct TimeParser;

impl TimeParser {
    /// Parse duration text into whole seconds
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` with the original text if no accepted form matches
    /// or the value overflows.
    pub fn parse(text: &str) -> AppResult<u32> {
        let trimmed = text.trim();
        Self::parse_hours(trimmed)
            .or_else(|| Self::parse_minutes(trimmed))
            .or_else(|| Self::parse_clock(trimmed))
            .ok_or_else(|| AppError::invalid_format(text))?
            .ok_or_else(|| AppError::invalid_format(text))
    }

    // Outer Option: did the form match. Inner Option: did the arithmetic fit.
    fn parse_hours(text: &str) -> Option<Option<u32>> {
        let caps = HOUR_PATTERN.as_ref()?.captures(text)?;
        let hours = number(caps.get(1).map(|m| m.as_str()));
        let minutes = caps.get(2).map_or(Some(0), |m| m.as_str().parse().ok());
        Some(combine(hours, minutes, Some(0)))
    }

    fn parse_minutes(text: &str) -> Option<Option<u32>> {
        let caps = MINUTES_PATTERN.as_ref()?.captures(text)?;
        let minutes = number(caps.get(1).map(|m| m.as_str()));
        Some(combine(Some(0), minutes, Some(0)))
    }

    fn parse_clock(text: &str) -> Option<Option<u32>> {
        let caps = CLOCK_PATTERN.as_ref()?.captures(text)?;
        let first = number(caps.get(1).map(|m| m.as_str()));
        let second = number(caps.get(2).map(|m| m.as_str()));
        Some(match caps.get(3) {
            Some(seconds) => combine(first, second, seconds.as_str().parse().ok()),
            None => combine(Some(0), first, second),
        })
    }
}

fn number(text: Option<&str>) -> Option<u32> {
    text?.parse().ok()
}

fn combine(hours: Option<u32>, minutes: Option<u32>, seconds: Option<u32>) -> Option<u32> {
    hours?
        .checked_mul(SECONDS_PER_HOUR_U32)?
        .checked_add(minutes?.checked_mul(SECONDS_PER_MINUTE)?)?
        .checked_add(seconds?)
}

/// Format seconds as `H:MM:SS`, or `MM:SS` below one hour
///
/// The output is always accepted by [`TimeParser::parse`] and parses back to
/// the same number of seconds.
#[must_use]
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / SECONDS_PER_HOUR_U32;
    let minutes = (seconds % SECONDS_PER_HOUR_U32) / SECONDS_PER_MINUTE;
    let secs = seconds % SECONDS_PER_MINUTE;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Format a pace in seconds per kilometer as `m:ss/km`
#[must_use]
pub fn format_pace(seconds_per_km: f64) -> String {
    if !seconds_per_km.is_finite() || seconds_per_km <= 0.0 {
        return "--:--/km".to_owned();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Safe: positive finite pace, realistic values are far below u32::MAX
    let total = seconds_per_km.round() as u32;
    format!(
        "{}:{:02}/km",
        total / SECONDS_PER_MINUTE,
        total % SECONDS_PER_MINUTE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_hour_form_takes_precedence() {
        assert_eq!(TimeParser::parse("4h").ok(), Some(14_400));
        assert_eq!(TimeParser::parse("4h30").ok(), Some(16_200));
        assert_eq!(TimeParser::parse("4h:08").ok(), Some(14_880));
        assert_eq!(TimeParser::parse("3 H 05").ok(), Some(11_100));
    }

    #[test]
    fn test_minutes_form() {
        assert_eq!(TimeParser::parse("52 min").ok(), Some(3_120));
        assert_eq!(TimeParser::parse("52min").ok(), Some(3_120));
    }

    #[test]
    fn test_clock_forms() {
        assert_eq!(TimeParser::parse("1:45:00").ok(), Some(6_300));
        assert_eq!(TimeParser::parse("25:00").ok(), Some(1_500));
        assert_eq!(TimeParser::parse("  52:30 ").ok(), Some(3_150));
    }

    #[test]
    fn test_rejects_unknown_forms() {
        for text in ["", "fast", "25", "1:2:3:4", "12.5km", "45 sec"] {
            let err = TimeParser::parse(text).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidFormat, "{text}");
        }
    }

    #[test]
    fn test_overflow_is_invalid_format() {
        let err = TimeParser::parse("99999999h").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.message.contains("99999999h"));
    }

    #[test]
    fn test_format_pace() {
        assert_eq!(format_pace(300.0), "5:00/km");
        assert_eq!(format_pace(284.6), "4:45/km");
        assert_eq!(format_pace(0.0), "--:--/km");
    }
}
