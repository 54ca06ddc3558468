//! Body zones - positional targeting, blocking and per-zone armour
//!
//! A physical attack lands on one of four zones. The attacker's stance decides
//! where it aims, the defender's stance decides how many block points cover
//! the zone that was struck, and zone armour mitigates what gets through.

mod armor;
mod generator;
mod stance;
mod targeting;

pub use armor::{compute_zone_armor, total_armor_from_zones, ZoneArmor};
pub use generator::{generate_boss_stance, generate_random_stance, BossArchetype};
pub use stance::{default_stance, validate_stance, CombatStance, RawStance, StanceError};
pub use targeting::{calc_block_reduction, resolve_hit_zone};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Total block points a stance must distribute
pub const MAX_BLOCK_POINTS: u32 = 3;

/// Damage fraction mitigated per block point on the struck zone
pub const BLOCK_REDUCTION_PER_POINT: f64 = 0.25;

/// Positional target of a physical attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyZone {
    Head,
    Torso,
    Waist,
    Legs,
}

impl BodyZone {
    pub const ALL: [BodyZone; 4] = [BodyZone::Head, BodyZone::Torso, BodyZone::Waist, BodyZone::Legs];

    pub fn name(&self) -> &'static str {
        match self {
            BodyZone::Head => "head",
            BodyZone::Torso => "torso",
            BodyZone::Waist => "waist",
            BodyZone::Legs => "legs",
        }
    }
}

impl fmt::Display for BodyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BodyZone {
    type Err = StanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        BodyZone::ALL
            .iter()
            .copied()
            .find(|zone| zone.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| StanceError::UnknownZone(s.to_string()))
    }
}

/// One value per body zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneMap<T> {
    pub head: T,
    pub torso: T,
    pub waist: T,
    pub legs: T,
}

impl<T: Copy> ZoneMap<T> {
    /// Same value in every zone
    pub fn splat(value: T) -> Self {
        ZoneMap {
            head: value,
            torso: value,
            waist: value,
            legs: value,
        }
    }

    /// Iterate zones in stable order
    pub fn iter(&self) -> impl Iterator<Item = (BodyZone, T)> + '_ {
        BodyZone::ALL.iter().map(move |zone| (*zone, self[*zone]))
    }

    /// Transform every zone value
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> ZoneMap<U> {
        ZoneMap {
            head: f(self.head),
            torso: f(self.torso),
            waist: f(self.waist),
            legs: f(self.legs),
        }
    }
}

impl<T> Index<BodyZone> for ZoneMap<T> {
    type Output = T;

    fn index(&self, zone: BodyZone) -> &T {
        match zone {
            BodyZone::Head => &self.head,
            BodyZone::Torso => &self.torso,
            BodyZone::Waist => &self.waist,
            BodyZone::Legs => &self.legs,
        }
    }
}

impl<T> IndexMut<BodyZone> for ZoneMap<T> {
    fn index_mut(&mut self, zone: BodyZone) -> &mut T {
        match zone {
            BodyZone::Head => &mut self.head,
            BodyZone::Torso => &mut self.torso,
            BodyZone::Waist => &mut self.waist,
            BodyZone::Legs => &mut self.legs,
        }
    }
}
