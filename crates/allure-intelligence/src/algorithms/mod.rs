// ABOUTME: Calibration algorithms turning questionnaire answers into a speed capacity
// ABOUTME: Free-form duration parsing and weighted VMA estimation from race results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Free-form duration parsing
pub mod time_parser;
/// VMA estimation from race results
pub mod vma;

pub use time_parser::{format_duration, format_pace, TimeParser};
pub use vma::PerformanceEstimator;
