// ABOUTME: Core types and constants for the Allure training calibration engine
// ABOUTME: Foundation crate with error handling, domain models, and calibration constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Allure Core
//!
//! Foundation crate providing shared types and constants for the Allure
//! training planner. It is designed to change infrequently so that the
//! algorithm and provider crates can compile in parallel against it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **constants**: Race factors, zone factors, and adaptation thresholds
//! - **models**: Race results, pace zones, planned weeks, activities, reports, and suggestions

/// Unified error handling system with standard error codes
pub mod errors;

/// Calibration and adaptation constants organized by domain
pub mod constants;

/// Core data models (`RaceResult`, `ZoneSet`, `PlannedWeek`, `ActivityRecord`, etc.)
pub mod models;
