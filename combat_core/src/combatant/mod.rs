//! Combatants - the simulation entity and its builder
//!
//! A [`CombatantState`] is built once per fight from a [`CombatantInput`] and
//! then only changed by the turn loop: hit points, active statuses, and zone
//! armour after an armour break.

mod accumulator;
mod builder;
mod snapshot;

pub use accumulator::StatAccumulator;
pub use builder::{build_combatant_state, build_combatant_state_with, CombatantInput};
pub use snapshot::CombatantSnapshot;

use crate::config::HealthConstants;
use crate::damage::Ability;
use crate::source::Origin;
use crate::status::ActiveStatus;
use crate::types::{BaseStats, CombatClass, CombatantKind};
use crate::zone::{CombatStance, ZoneArmor};
use serde::{Deserialize, Serialize};

/// No combatant ever has fewer max hit points than this
pub const HP_FLOOR: u32 = 100;

/// `max(HP_FLOOR, floor(base + vitality * per_vitality))`
pub fn max_hp(vitality: u32, health: &HealthConstants) -> u32 {
    let hp = (health.base + f64::from(vitality) * health.per_vitality).floor();
    (hp.max(0.0) as u32).max(HP_FLOOR)
}

/// A fighter as seen by the turn loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantState {
    pub id: String,
    pub name: String,
    pub class: CombatClass,
    pub kind: CombatantKind,
    pub origin: Option<Origin>,
    pub level: u32,
    /// Attributes after origin and equipment bonuses
    pub stats: BaseStats,
    pub armor: f64,
    pub current_hp: u32,
    pub max_hp: u32,
    pub stance: CombatStance,
    pub zone_armor: ZoneArmor,
    #[serde(default)]
    pub statuses: Vec<ActiveStatus>,
    /// Restricted ability list, non-player combatants only
    #[serde(default)]
    pub abilities: Option<Vec<Ability>>,
}

impl CombatantState {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Subtract hit points, returns the amount actually lost
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    /// Restore hit points up to max, returns the amount actually restored
    pub fn heal(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max_hp.saturating_sub(self.current_hp));
        self.current_hp += restored;
        restored
    }

    /// Abilities this combatant may roll for
    ///
    /// A non-empty restricted list wins over the class defaults.
    pub fn available_abilities(&self) -> Vec<Ability> {
        match &self.abilities {
            Some(list) if !list.is_empty() => list.clone(),
            _ => self.class.default_abilities(),
        }
    }

    pub fn snapshot(&self) -> CombatantSnapshot {
        CombatantSnapshot::capture(self)
    }
}
