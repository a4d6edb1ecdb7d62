// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for allure-cli
// ABOUTME: Provides access to time parsing, zone and review commands

pub mod parse_time;
pub mod review;
pub mod zones;
