// ABOUTME: JSON document loading for command-line and batch entry points
// ABOUTME: Reads planned weeks, activity exports and session feedback from files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Read and deserialize one JSON file
///
/// # Errors
///
/// Returns an error naming the file when it cannot be read or does not
/// match the expected shape
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Like [`read_json_file`], with a default when no path is given
///
/// # Errors
///
/// Same as [`read_json_file`]
pub fn read_optional_json_file<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    path.map_or_else(|| Ok(T::default()), read_json_file)
}
