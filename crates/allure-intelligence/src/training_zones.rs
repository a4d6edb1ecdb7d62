// ABOUTME: Expands a VMA estimate into the full ladder of named pace zones
// ABOUTME: All nine zones are produced together from one VMA and sealed into a ZoneSet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::{PaceZone, PerformanceEstimate, ZoneName, ZoneSet};
use tracing::info;

/// Pace zone calculator
///
/// A plan computes its `ZoneSet` exactly once and keeps it. Single zones
/// are never computed on their own.
pub struct PaceZoneCalculator;

impl PaceZoneCalculator {
    /// Compute every zone from one VMA value
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `vma_kmh` is zero, negative or not finite.
    pub fn compute(vma_kmh: f64) -> AppResult<ZoneSet> {
        if !vma_kmh.is_finite() || vma_kmh <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "cannot compute pace zones from VMA {vma_kmh} km/h"
            )));
        }

        let zones = ZoneName::ALL
            .into_iter()
            .map(|name| PaceZone::from_speed(name, vma_kmh * name.factor()))
            .collect::<AppResult<Vec<_>>>()?;
        let set = ZoneSet::assemble(vma_kmh, zones)?;

        info!(
            vma_kmh,
            fingerprint = set.fingerprint(),
            "pace zones computed"
        );
        Ok(set)
    }

    /// Compute the zones for an estimate
    ///
    /// # Errors
    ///
    /// Same as [`Self::compute`]; a valid estimate never fails.
    pub fn compute_for(estimate: &PerformanceEstimate) -> AppResult<ZoneSet> {
        Self::compute(estimate.vma_kmh())
    }
}
