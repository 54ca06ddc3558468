//! Stance generators for random opponents and scripted bosses

use super::{BodyZone, CombatStance, ZoneMap, MAX_BLOCK_POINTS};
use crate::config::ArchetypeTable;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Hand-authored boss stance archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BossArchetype {
    /// Everything into the head, no head guard
    Aggressive,
    /// Two mid-body attack zones, balanced guard
    Defensive,
    /// Head and torso, all blocks on the torso
    Berserker,
    /// Torso strikes behind a heavy head guard
    Guardian,
    /// High-low split attack
    Duelist,
}

impl BossArchetype {
    pub fn all() -> &'static [BossArchetype] {
        &[
            BossArchetype::Aggressive,
            BossArchetype::Defensive,
            BossArchetype::Berserker,
            BossArchetype::Guardian,
            BossArchetype::Duelist,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            BossArchetype::Aggressive => "aggressive",
            BossArchetype::Defensive => "defensive",
            BossArchetype::Berserker => "berserker",
            BossArchetype::Guardian => "guardian",
            BossArchetype::Duelist => "duelist",
        }
    }

    /// Look up an archetype by id, ignoring case
    pub fn from_id(id: &str) -> Option<BossArchetype> {
        let id = id.trim();
        BossArchetype::all()
            .iter()
            .copied()
            .find(|archetype| archetype.id().eq_ignore_ascii_case(id))
    }

    pub fn stance(&self) -> CombatStance {
        let (zones, blocks) = match self {
            BossArchetype::Aggressive => (
                vec![BodyZone::Head],
                ZoneMap { head: 0, torso: 1, waist: 1, legs: 1 },
            ),
            BossArchetype::Defensive => (
                vec![BodyZone::Torso, BodyZone::Waist],
                ZoneMap { head: 1, torso: 1, waist: 1, legs: 0 },
            ),
            BossArchetype::Berserker => (
                vec![BodyZone::Head, BodyZone::Torso],
                ZoneMap { head: 0, torso: 3, waist: 0, legs: 0 },
            ),
            BossArchetype::Guardian => (
                vec![BodyZone::Torso],
                ZoneMap { head: 2, torso: 1, waist: 0, legs: 0 },
            ),
            BossArchetype::Duelist => (
                vec![BodyZone::Head, BodyZone::Legs],
                ZoneMap { head: 1, torso: 0, waist: 1, legs: 1 },
            ),
        };
        CombatStance::from_parts(zones, blocks)
    }
}

/// Random valid stance: 1 or 2 distinct attack zones and a random split of the block budget
pub fn generate_random_stance(rng: &mut impl Rng) -> CombatStance {
    let count = rng.gen_range(1..=2);
    let attack_zones: Vec<BodyZone> = BodyZone::ALL.choose_multiple(rng, count).copied().collect();

    let mut blocks = ZoneMap::splat(0u32);
    for _ in 0..MAX_BLOCK_POINTS {
        let zone = BodyZone::ALL[rng.gen_range(0..BodyZone::ALL.len())];
        blocks[zone] += 1;
    }

    CombatStance::from_parts(attack_zones, blocks)
}

/// Stance for a scripted boss from the built-in archetypes
///
/// Unknown or absent archetypes get a random stance.
pub fn generate_boss_stance(archetype_id: Option<&str>, rng: &mut impl Rng) -> CombatStance {
    ArchetypeTable::with_defaults().generate(archetype_id, rng)
}
