// ABOUTME: Pace zones and the immutable per-plan zone set
// ABOUTME: Enforces the pace identity, the zone ordering, and a stable fingerprint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pace Zones
//!
//! A `ZoneSet` is generated once per plan from a single VMA value and is then
//! shared, unchanged, by every week of that plan. The type cannot be patched
//! after construction: all fields are private, construction goes through
//! [`ZoneSet::assemble`], and deserialization re-runs the same checks.
//!
//! Each set carries a SHA-256 fingerprint of its values. Weeks are stamped
//! with the fingerprint of the set they were generated against, which lets the
//! plan aggregate reject a week built from a different set.

use crate::constants::{units::SECONDS_PER_HOUR, zone_factors};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Relative tolerance for the `pace == 3600 / speed` identity after a round trip
const PACE_IDENTITY_TOLERANCE: f64 = 1e-9;

/// Named training-intensity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZoneName {
    /// Recovery jog
    #[serde(rename = "recovery")]
    Recovery,
    /// Endurance fondamentale
    #[serde(rename = "ef")]
    Ef,
    /// Endurance active
    #[serde(rename = "ea")]
    Ea,
    /// Seuil (threshold)
    #[serde(rename = "seuil")]
    Seuil,
    /// Vitesse maximale aérobie
    #[serde(rename = "vma")]
    Vma,
    /// 5 km race pace
    #[serde(rename = "race5k")]
    Race5k,
    /// 10 km race pace
    #[serde(rename = "race10k")]
    Race10k,
    /// Half marathon race pace
    #[serde(rename = "raceSemi")]
    RaceSemi,
    /// Marathon race pace
    #[serde(rename = "raceMarathon")]
    RaceMarathon,
}

impl ZoneName {
    /// Every zone in a set, training zones from slowest to fastest then race zones
    pub const ALL: [Self; 9] = [
        Self::Recovery,
        Self::Ef,
        Self::Ea,
        Self::Seuil,
        Self::Vma,
        Self::Race5k,
        Self::Race10k,
        Self::RaceSemi,
        Self::RaceMarathon,
    ];

    /// Training zones whose paces must be strictly decreasing in this order
    pub const ORDERED_TRAINING_ZONES: [Self; 5] =
        [Self::Recovery, Self::Ef, Self::Ea, Self::Seuil, Self::Vma];

    /// Fraction of VMA for this zone
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Recovery => zone_factors::RECOVERY,
            Self::Ef => zone_factors::EF,
            Self::Ea => zone_factors::EA,
            Self::Seuil => zone_factors::SEUIL,
            Self::Vma => zone_factors::VMA,
            Self::Race5k => zone_factors::RACE_5K,
            Self::Race10k => zone_factors::RACE_10K,
            Self::RaceSemi => zone_factors::RACE_SEMI,
            Self::RaceMarathon => zone_factors::RACE_MARATHON,
        }
    }

    /// Stable key, identical to the serialized form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recovery => "recovery",
            Self::Ef => "ef",
            Self::Ea => "ea",
            Self::Seuil => "seuil",
            Self::Vma => "vma",
            Self::Race5k => "race5k",
            Self::Race10k => "race10k",
            Self::RaceSemi => "raceSemi",
            Self::RaceMarathon => "raceMarathon",
        }
    }

    /// Display name shown to athletes
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Recovery => "Récupération",
            Self::Ef => "Endurance fondamentale",
            Self::Ea => "Endurance active",
            Self::Seuil => "Seuil",
            Self::Vma => "VMA",
            Self::Race5k => "Allure 5 km",
            Self::Race10k => "Allure 10 km",
            Self::RaceSemi => "Allure semi-marathon",
            Self::RaceMarathon => "Allure marathon",
        }
    }
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One training zone: a speed and the pace derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceZone {
    name: ZoneName,
    speed_kmh: f64,
    pace_seconds_per_km: f64,
}

impl PaceZone {
    /// Build a zone from its speed; the pace is always derived, never supplied
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` when the speed is not a positive finite number
    pub fn from_speed(name: ZoneName, speed_kmh: f64) -> AppResult<Self> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "zone {name} needs a positive speed, got {speed_kmh}"
            )));
        }
        Ok(Self {
            name,
            speed_kmh,
            pace_seconds_per_km: SECONDS_PER_HOUR / speed_kmh,
        })
    }

    /// Zone name
    #[must_use]
    pub const fn name(&self) -> ZoneName {
        self.name
    }

    /// Target speed in km/h
    #[must_use]
    pub const fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Target pace in seconds per kilometer
    #[must_use]
    pub const fn pace_seconds_per_km(&self) -> f64 {
        self.pace_seconds_per_km
    }

    fn pace_identity_holds(&self) -> bool {
        let expected = SECONDS_PER_HOUR / self.speed_kmh;
        (self.pace_seconds_per_km - expected).abs() <= expected * PACE_IDENTITY_TOLERANCE
    }
}

/// Serialized shape of a `ZoneSet`
///
/// This is the stable value embedded into a plan's generation context. It is
/// converted back into a `ZoneSet` only through the validating `TryFrom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneSetRecord {
    /// VMA the set was generated from
    pub source_vma_kmh: f64,
    /// SHA-256 fingerprint of the zone values
    pub fingerprint: String,
    /// Recovery zone
    pub recovery: PaceZone,
    /// Fundamental endurance zone
    pub ef: PaceZone,
    /// Active endurance zone
    pub ea: PaceZone,
    /// Threshold zone
    pub seuil: PaceZone,
    /// VMA zone
    pub vma: PaceZone,
    /// 5 km race zone
    pub race5k: PaceZone,
    /// 10 km race zone
    pub race10k: PaceZone,
    /// Half marathon race zone
    pub race_semi: PaceZone,
    /// Marathon race zone
    pub race_marathon: PaceZone,
}

/// Immutable, complete set of pace zones for one plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "ZoneSetRecord", try_from = "ZoneSetRecord")]
pub struct ZoneSet {
    source_vma_kmh: f64,
    fingerprint: String,
    zones: [PaceZone; 9],
}

impl ZoneSet {
    /// Assemble a zone set from a complete collection of zones
    ///
    /// Every zone of [`ZoneName::ALL`] must be present exactly once, and the
    /// training zones must be strictly ordered by pace.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvariantViolation` for missing or duplicate zones,
    /// a broken pace identity, or a broken ordering
    pub fn assemble(
        source_vma_kmh: f64,
        zones: impl IntoIterator<Item = PaceZone>,
    ) -> AppResult<Self> {
        let mut slots: [Option<PaceZone>; 9] = [None; 9];
        for zone in zones {
            let slot = &mut slots[Self::index_of(zone.name)];
            if slot.is_some() {
                return Err(AppError::invariant_violation(format!(
                    "zone {} supplied twice",
                    zone.name
                )));
            }
            *slot = Some(zone);
        }

        let mut complete = Vec::with_capacity(slots.len());
        for (name, slot) in ZoneName::ALL.into_iter().zip(slots) {
            let zone = slot.ok_or_else(|| {
                AppError::invariant_violation(format!("zone set is missing zone {name}"))
            })?;
            complete.push(zone);
        }
        let zones: [PaceZone; 9] = complete
            .try_into()
            .map_err(|_| AppError::internal("zone slot count mismatch"))?;

        let fingerprint = Self::compute_fingerprint(source_vma_kmh, &zones);
        let set = Self {
            source_vma_kmh,
            fingerprint,
            zones,
        };
        set.check_invariants()?;
        Ok(set)
    }

    /// VMA the set was generated from
    #[must_use]
    pub const fn source_vma_kmh(&self) -> f64 {
        self.source_vma_kmh
    }

    /// Stable fingerprint of the zone values
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Look up one zone
    #[must_use]
    pub const fn zone(&self, name: ZoneName) -> &PaceZone {
        &self.zones[Self::index_of(name)]
    }

    /// All zones in [`ZoneName::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = &PaceZone> {
        self.zones.iter()
    }

    /// Re-check the pace identity, the ordering, and the fingerprint
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvariantViolation` describing the first broken rule
    pub fn verify(&self) -> AppResult<()> {
        self.check_invariants()?;
        let expected = Self::compute_fingerprint(self.source_vma_kmh, &self.zones);
        if expected != self.fingerprint {
            return Err(AppError::invariant_violation(
                "zone set fingerprint does not match its values",
            ));
        }
        Ok(())
    }

    fn check_invariants(&self) -> AppResult<()> {
        if let Some(zone) = self.zones.iter().find(|z| !z.pace_identity_holds()) {
            return Err(AppError::invariant_violation(format!(
                "zone {} pace does not match 3600 / speed",
                zone.name
            )));
        }

        for pair in ZoneName::ORDERED_TRAINING_ZONES.windows(2) {
            let slower = self.zone(pair[0]);
            let faster = self.zone(pair[1]);
            if slower.pace_seconds_per_km <= faster.pace_seconds_per_km {
                return Err(AppError::invariant_violation(format!(
                    "zone {} must be slower than zone {}",
                    slower.name, faster.name
                )));
            }
        }
        Ok(())
    }

    const fn index_of(name: ZoneName) -> usize {
        match name {
            ZoneName::Recovery => 0,
            ZoneName::Ef => 1,
            ZoneName::Ea => 2,
            ZoneName::Seuil => 3,
            ZoneName::Vma => 4,
            ZoneName::Race5k => 5,
            ZoneName::Race10k => 6,
            ZoneName::RaceSemi => 7,
            ZoneName::RaceMarathon => 8,
        }
    }

    // Values are hashed at fixed precision so a JSON round trip that moves a
    // float by one ULP keeps the same fingerprint.
    fn compute_fingerprint(source_vma_kmh: f64, zones: &[PaceZone; 9]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(format!("vma={source_vma_kmh:.9};"));
        for zone in zones {
            hasher.update(format!(
                "{}={:.9}/{:.9};",
                zone.name, zone.speed_kmh, zone.pace_seconds_per_km
            ));
        }
        hex::encode(hasher.finalize())
    }
}

impl PartialEq for ZoneSet {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
    }
}

impl From<ZoneSet> for ZoneSetRecord {
    fn from(set: ZoneSet) -> Self {
        let [recovery, ef, ea, seuil, vma, race5k, race10k, race_semi, race_marathon] = set.zones;
        Self {
            source_vma_kmh: set.source_vma_kmh,
            fingerprint: set.fingerprint,
            recovery,
            ef,
            ea,
            seuil,
            vma,
            race5k,
            race10k,
            race_semi,
            race_marathon,
        }
    }
}

impl TryFrom<ZoneSetRecord> for ZoneSet {
    type Error = AppError;

    fn try_from(record: ZoneSetRecord) -> Result<Self, Self::Error> {
        let set = Self {
            source_vma_kmh: record.source_vma_kmh,
            fingerprint: record.fingerprint,
            zones: [
                record.recovery,
                record.ef,
                record.ea,
                record.seuil,
                record.vma,
                record.race5k,
                record.race10k,
                record.race_semi,
                record.race_marathon,
            ],
        };
        for (name, zone) in ZoneName::ALL.iter().zip(&set.zones) {
            if zone.name != *name {
                return Err(AppError::invariant_violation(format!(
                    "zone stored under {name} is named {}",
                    zone.name
                )));
            }
        }
        set.verify()?;
        Ok(set)
    }
}
