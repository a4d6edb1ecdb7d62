// ABOUTME: Training plan aggregate owning the performance estimate and its single zone set
// ABOUTME: Hands the zone set to week generation and rejects weeks built against another one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Plan
//!
//! A plan computes its [`ZoneSet`] once, at creation, and every week is
//! generated and stored against that exact value. Weeks carry the zone set
//! fingerprint they were generated with; a week stamped with any other
//! fingerprint is refused.

use crate::errors::{AppError, AppResult};
use crate::intelligence::{PaceZoneCalculator, PerformanceEstimator};
use crate::models::{
    PerformanceEstimate, PlannedSession, PlannedWeek, RaceQuestionnaire, TrainingPhase, WeekRange,
    ZoneSet,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::mem;
use tracing::{debug, info};
use uuid::Uuid;

/// Everything a week generator receives for one week
///
/// The zone set is handed over by value; the generator never recomputes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekGenerationContext {
    /// 1-based week number
    pub week_number: u32,
    /// Calendar range of the week
    pub range: WeekRange,
    /// The plan's zone set
    pub zones: ZoneSet,
}

impl WeekGenerationContext {
    /// Build a planned week stamped with this context's zone set
    #[must_use]
    pub fn stamp(
        &self,
        phase: Option<TrainingPhase>,
        sessions: Vec<PlannedSession>,
    ) -> PlannedWeek {
        PlannedWeek {
            week_number: self.week_number,
            phase,
            zone_fingerprint: self.zones.fingerprint().to_owned(),
            sessions,
        }
    }
}

/// A multi-week training plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPlan {
    id: Uuid,
    athlete_id: String,
    created_at: DateTime<Utc>,
    start_date: NaiveDate,
    estimate: PerformanceEstimate,
    zone_set: ZoneSet,
    /// Sorted by week number
    weeks: Vec<PlannedWeek>,
}

impl TrainingPlan {
    /// Create a plan and compute its zone set from `estimate`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the estimate cannot produce zones
    pub fn new(
        athlete_id: impl Into<String>,
        start_date: NaiveDate,
        estimate: PerformanceEstimate,
    ) -> AppResult<Self> {
        let zone_set = PaceZoneCalculator::compute_for(&estimate)?;
        let plan = Self {
            id: Uuid::new_v4(),
            athlete_id: athlete_id.into(),
            created_at: Utc::now(),
            start_date,
            estimate,
            zone_set,
            weeks: Vec::new(),
        };
        info!(
            plan.id = %plan.id,
            athlete.id = %plan.athlete_id,
            vma_kmh = plan.estimate.vma_kmh(),
            zones = %plan.zone_set.fingerprint(),
            "training plan created"
        );
        Ok(plan)
    }

    /// Create a plan from questionnaire answers
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the questionnaire holds no usable race
    /// time and no valid declared VMA
    pub fn from_questionnaire(
        athlete_id: impl Into<String>,
        start_date: NaiveDate,
        questionnaire: &RaceQuestionnaire,
    ) -> AppResult<Self> {
        let estimate = PerformanceEstimator::estimate_from_questionnaire(questionnaire)?
            .ok_or_else(|| {
                AppError::invalid_input(
                    "questionnaire has no usable race time and no declared VMA",
                )
            })?;
        Self::new(athlete_id, start_date, estimate)
    }

    /// Plan identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Athlete the plan belongs to
    #[must_use]
    pub fn athlete_id(&self) -> &str {
        &self.athlete_id
    }

    /// Creation time
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// First day of the plan
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Estimate the zones were derived from
    #[must_use]
    pub const fn estimate(&self) -> &PerformanceEstimate {
        &self.estimate
    }

    /// The plan's zone set
    #[must_use]
    pub const fn zone_set(&self) -> &ZoneSet {
        &self.zone_set
    }

    /// Calendar range of `week_number`
    #[must_use]
    pub fn week_range(&self, week_number: u32) -> WeekRange {
        WeekRange::nth_week(self.start_date, week_number)
    }

    /// Context for generating `week_number`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for week 0
    pub fn generation_context(&self, week_number: u32) -> AppResult<WeekGenerationContext> {
        if week_number == 0 {
            return Err(AppError::invalid_input("week numbers start at 1"));
        }
        Ok(WeekGenerationContext {
            week_number,
            range: self.week_range(week_number),
            zones: self.zone_set.clone(),
        })
    }

    /// Add a newly generated week
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for week 0
    /// - `InvariantViolation` if the week was generated against another zone set,
    ///   has two sessions on one day, or its number is already taken
    pub fn add_week(&mut self, week: PlannedWeek) -> AppResult<()> {
        self.check_week(&week)?;
        match self
            .weeks
            .binary_search_by_key(&week.week_number, |w| w.week_number)
        {
            Ok(_) => Err(AppError::invariant_violation(format!(
                "plan {} already has a week {}",
                self.id, week.week_number
            ))),
            Err(index) => {
                debug!(plan.id = %self.id, week = week.week_number, "week added");
                self.weeks.insert(index, week);
                Ok(())
            }
        }
    }

    /// Replace an existing week, typically with an adapted one; returns the old week
    ///
    /// # Errors
    ///
    /// Same checks as [`Self::add_week`], plus `InvalidInput` when the week does not exist
    pub fn replace_week(&mut self, week: PlannedWeek) -> AppResult<PlannedWeek> {
        self.check_week(&week)?;
        let index = self
            .weeks
            .binary_search_by_key(&week.week_number, |w| w.week_number)
            .map_err(|_| {
                AppError::invalid_input(format!(
                    "plan {} has no week {} to replace",
                    self.id, week.week_number
                ))
            })?;
        debug!(plan.id = %self.id, week = week.week_number, "week replaced");
        Ok(mem::replace(&mut self.weeks[index], week))
    }

    /// Week by number
    #[must_use]
    pub fn week(&self, week_number: u32) -> Option<&PlannedWeek> {
        self.weeks
            .binary_search_by_key(&week_number, |w| w.week_number)
            .ok()
            .map(|index| &self.weeks[index])
    }

    /// The week following `week_number`, if generated
    #[must_use]
    pub fn next_week_after(&self, week_number: u32) -> Option<&PlannedWeek> {
        week_number
            .checked_add(1)
            .and_then(|next| self.week(next))
    }

    /// Weeks in order
    #[must_use]
    pub fn weeks(&self) -> &[PlannedWeek] {
        &self.weeks
    }

    /// Re-check a plan restored from storage
    ///
    /// # Errors
    ///
    /// Returns `InvariantViolation` if the zone set or any week fails its checks
    pub fn verify(&self) -> AppResult<()> {
        self.zone_set.verify()?;
        for week in &self.weeks {
            self.check_week(week)?;
        }
        Ok(())
    }

    fn check_week(&self, week: &PlannedWeek) -> AppResult<()> {
        if week.week_number == 0 {
            return Err(AppError::invalid_input("week numbers start at 1"));
        }
        if week.zone_fingerprint != self.zone_set.fingerprint() {
            return Err(AppError::invariant_violation(format!(
                "week {} was generated against zone set {}, plan {} uses {}",
                week.week_number,
                week.zone_fingerprint,
                self.id,
                self.zone_set.fingerprint()
            )));
        }
        week.validate()
    }
}
