//! CombatStance - attack zones and block allocation

use super::{BodyZone, ZoneMap, MAX_BLOCK_POINTS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Reason a stance was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StanceError {
    #[error("stance is missing")]
    Missing,
    #[error("a stance must declare 1 or 2 attack zones, got {0}")]
    AttackZoneCount(usize),
    #[error("attack zone '{0}' is declared more than once")]
    DuplicateAttackZone(BodyZone),
    #[error("unknown body zone '{0}'")]
    UnknownZone(String),
    #[error("block points on {zone} cannot be negative (got {points})")]
    NegativeBlock { zone: BodyZone, points: i64 },
    #[error("block points on {zone} exceed the per-zone maximum of {max} (got {points})")]
    BlockOverflow { zone: BodyZone, points: i64, max: u32 },
    #[error("block points must sum to exactly {expected} (got {total})")]
    BlockTotal { total: i64, expected: u32 },
}

/// Untrusted stance as submitted by a player or read from a file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawStance {
    #[serde(default)]
    pub attack_zones: Vec<String>,
    #[serde(default)]
    pub block_allocation: BTreeMap<String, i64>,
}

impl RawStance {
    pub fn new<S: Into<String>>(
        attack_zones: impl IntoIterator<Item = S>,
        block_allocation: impl IntoIterator<Item = (S, i64)>,
    ) -> Self {
        RawStance {
            attack_zones: attack_zones.into_iter().map(Into::into).collect(),
            block_allocation: block_allocation
                .into_iter()
                .map(|(zone, points)| (zone.into(), points))
                .collect(),
        }
    }
}

/// A validated stance
///
/// Only constructible through validation, so every stance held by a
/// combatant satisfies the attack-zone and block-budget rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStance", into = "RawStance")]
pub struct CombatStance {
    attack_zones: Vec<BodyZone>,
    block_allocation: ZoneMap<u32>,
}

impl CombatStance {
    /// Build a stance from typed parts, enforcing every rule
    pub fn new(attack_zones: Vec<BodyZone>, block_allocation: ZoneMap<u32>) -> Result<Self, StanceError> {
        check_attack_zones(&attack_zones)?;
        check_blocks(&block_allocation.map(i64::from))?;
        Ok(CombatStance {
            attack_zones,
            block_allocation,
        })
    }

    /// Build a stance the caller has already proven valid
    pub(super) fn from_parts(attack_zones: Vec<BodyZone>, block_allocation: ZoneMap<u32>) -> Self {
        debug_assert!(check_attack_zones(&attack_zones).is_ok());
        debug_assert!(check_blocks(&block_allocation.map(i64::from)).is_ok());
        CombatStance {
            attack_zones,
            block_allocation,
        }
    }

    /// Declared attack zones, primary first
    pub fn attack_zones(&self) -> &[BodyZone] {
        &self.attack_zones
    }

    /// The first declared attack zone
    pub fn primary_zone(&self) -> BodyZone {
        self.attack_zones[0]
    }

    pub fn block_allocation(&self) -> &ZoneMap<u32> {
        &self.block_allocation
    }

    /// Block points committed to a zone
    pub fn block_points(&self, zone: BodyZone) -> u32 {
        self.block_allocation[zone]
    }
}

impl Default for CombatStance {
    fn default() -> Self {
        default_stance()
    }
}

impl TryFrom<RawStance> for CombatStance {
    type Error = StanceError;

    fn try_from(raw: RawStance) -> Result<Self, Self::Error> {
        let (attack_zones, blocks) = parse_raw(&raw)?;
        Ok(CombatStance::from_parts(attack_zones, blocks))
    }
}

impl From<CombatStance> for RawStance {
    fn from(stance: CombatStance) -> Self {
        RawStance {
            attack_zones: stance.attack_zones.iter().map(|z| z.name().to_string()).collect(),
            block_allocation: stance
                .block_allocation
                .iter()
                .map(|(zone, points)| (zone.name().to_string(), i64::from(points)))
                .collect(),
        }
    }
}

/// Canonical starting stance: aim at the torso, block head, torso and waist
pub fn default_stance() -> CombatStance {
    CombatStance::from_parts(
        vec![BodyZone::Torso],
        ZoneMap {
            head: 1,
            torso: 1,
            waist: 1,
            legs: 0,
        },
    )
}

/// Check a raw stance, returning the first rule it breaks
pub fn validate_stance(stance: Option<&RawStance>) -> Result<(), StanceError> {
    let raw = stance.ok_or(StanceError::Missing)?;
    parse_raw(raw).map(|_| ())
}

fn parse_raw(raw: &RawStance) -> Result<(Vec<BodyZone>, ZoneMap<u32>), StanceError> {
    let count = raw.attack_zones.len();
    if !(1..=2).contains(&count) {
        return Err(StanceError::AttackZoneCount(count));
    }

    let attack_zones = raw
        .attack_zones
        .iter()
        .map(|name| name.parse::<BodyZone>())
        .collect::<Result<Vec<_>, _>>()?;
    check_attack_zones(&attack_zones)?;

    // Missing zones count as zero; keys differing only in case accumulate
    let mut blocks = ZoneMap::splat(0i64);
    for (name, points) in &raw.block_allocation {
        let zone = name.parse::<BodyZone>()?;
        if *points < 0 {
            return Err(StanceError::NegativeBlock { zone, points: *points });
        }
        blocks[zone] = blocks[zone].saturating_add(*points);
    }
    check_blocks(&blocks)?;

    Ok((attack_zones, blocks.map(|points| points as u32)))
}

fn check_attack_zones(zones: &[BodyZone]) -> Result<(), StanceError> {
    if !(1..=2).contains(&zones.len()) {
        return Err(StanceError::AttackZoneCount(zones.len()));
    }
    for (i, zone) in zones.iter().enumerate() {
        if zones[..i].contains(zone) {
            return Err(StanceError::DuplicateAttackZone(*zone));
        }
    }
    Ok(())
}

fn check_blocks(blocks: &ZoneMap<i64>) -> Result<(), StanceError> {
    let max = MAX_BLOCK_POINTS;
    for (zone, points) in blocks.iter() {
        if points < 0 {
            return Err(StanceError::NegativeBlock { zone, points });
        }
        if points > i64::from(max) {
            return Err(StanceError::BlockOverflow { zone, points, max });
        }
    }
    let total: i64 = blocks.iter().map(|(_, points)| points).sum();
    if total != i64::from(max) {
        return Err(StanceError::BlockTotal { total, expected: max });
    }
    Ok(())
}
