//! Combatant builder - raw caller input to a fight-ready CombatantState

use super::{max_hp, CombatantState, StatAccumulator};
use crate::config::HealthConstants;
use crate::damage::Ability;
use crate::source::{
    resolve_origin, BaseStatsSource, EquipmentBonusSource, EquippedItem, GearSource,
    OriginSource, StatSource,
};
use crate::types::{Attribute, Attributes, BaseStats, CombatClass, CombatantKind, StatBonuses};
use crate::zone::{compute_zone_armor, default_stance, CombatStance, RawStance, StanceError, ZoneArmor, ZoneMap};
use serde::{Deserialize, Deserializer, Serialize};

fn default_level() -> u32 {
    1
}

fn default_stats() -> BaseStats {
    BaseStats::splat(10)
}

/// Attributes missing from a partial stats table keep the default of 10
fn deserialize_stats<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BaseStats, D::Error> {
    let partial = Attributes::<Option<u32>>::deserialize(deserializer)?;
    let mut stats = default_stats();
    for attr in Attribute::all() {
        if let Some(value) = partial.get(*attr) {
            stats.set(*attr, value);
        }
    }
    Ok(stats)
}

/// Everything a caller supplies about one fighter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantInput {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub class: CombatClass,
    #[serde(default)]
    pub kind: CombatantKind,
    /// Origin id; unknown ids apply no modifiers
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default = "default_level")]
    pub level: u32,
    /// Raw attributes before origin modifiers
    #[serde(default = "default_stats", deserialize_with = "deserialize_stats")]
    pub stats: BaseStats,
    #[serde(default)]
    pub equipment_bonuses: StatBonuses,
    /// Flat armour not tied to any item
    #[serde(default)]
    pub armor: f64,
    #[serde(default)]
    pub equipment: Vec<EquippedItem>,
    /// Unvalidated stance; `None` means the default stance
    #[serde(default)]
    pub stance: Option<RawStance>,
    /// Explicit per-zone armour, replaces the derived value
    #[serde(default)]
    pub zone_armor: Option<ZoneArmor>,
    #[serde(default)]
    pub abilities: Option<Vec<Ability>>,
}

impl CombatantInput {
    /// Level 1 player with 10 in every attribute and no gear
    pub fn new(id: impl Into<String>, name: impl Into<String>, class: CombatClass) -> Self {
        CombatantInput {
            id: id.into(),
            name: name.into(),
            class,
            kind: CombatantKind::Player,
            origin: None,
            level: default_level(),
            stats: default_stats(),
            equipment_bonuses: StatBonuses::default(),
            armor: 0.0,
            equipment: Vec::new(),
            stance: None,
            zone_armor: None,
            abilities: None,
        }
    }

    pub fn with_kind(mut self, kind: CombatantKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_stats(mut self, stats: BaseStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_bonuses(mut self, bonuses: StatBonuses) -> Self {
        self.equipment_bonuses = bonuses;
        self
    }

    pub fn with_armor(mut self, armor: f64) -> Self {
        self.armor = armor;
        self
    }

    /// Equip items; their attributes, flat armour and zone armour are folded in at build time
    pub fn with_equipment(mut self, items: Vec<EquippedItem>) -> Self {
        self.equipment = items;
        self
    }

    pub fn with_stance(mut self, stance: impl Into<RawStance>) -> Self {
        self.stance = Some(stance.into());
        self
    }

    pub fn with_zone_armor(mut self, zone_armor: ZoneArmor) -> Self {
        self.zone_armor = Some(zone_armor);
        self
    }

    pub fn with_abilities(mut self, abilities: Vec<Ability>) -> Self {
        self.abilities = Some(abilities);
        self
    }

    fn sources(&self) -> Vec<Box<dyn StatSource>> {
        let mut sources: Vec<Box<dyn StatSource>> = vec![
            Box::new(BaseStatsSource::new(self.stats)),
            Box::new(OriginSource::new(resolve_origin(self.origin.as_deref()))),
            Box::new(EquipmentBonusSource::new(self.equipment_bonuses)),
        ];
        for item in &self.equipment {
            sources.push(Box::new(GearSource::new(item.clone())));
        }
        sources
    }
}

/// Build a combatant with the default health constants
pub fn build_combatant_state(input: &CombatantInput) -> Result<CombatantState, StanceError> {
    build_combatant_state_with(input, &HealthConstants::default())
}

/// Build a combatant
///
/// Pure: no randomness and no hidden state, so it can be called any number
/// of times for the same input. Fails only on an invalid stance.
pub fn build_combatant_state_with(
    input: &CombatantInput,
    health: &HealthConstants,
) -> Result<CombatantState, StanceError> {
    let stance = match &input.stance {
        Some(raw) => CombatStance::try_from(raw.clone())?,
        None => default_stance(),
    };

    let mut acc = StatAccumulator::new();
    acc.armor_flat = input.armor;
    acc.apply_sources(&mut input.sources());
    let stats = acc.attributes();
    let armor = acc.armor();

    let zone_armor = input.zone_armor.unwrap_or_else(|| {
        let split = ZoneMap::splat(input.armor.max(0.0) / 4.0);
        let gear = compute_zone_armor(&input.equipment);
        ZoneMap {
            head: split.head + gear.head,
            torso: split.torso + gear.torso,
            waist: split.waist + gear.waist,
            legs: split.legs + gear.legs,
        }
    });

    let max_hp = max_hp(stats.vitality, health);
    let abilities = match input.kind {
        CombatantKind::Npc => input.abilities.clone(),
        CombatantKind::Player => None,
    };

    Ok(CombatantState {
        id: input.id.clone(),
        name: if input.name.is_empty() {
            input.id.clone()
        } else {
            input.name.clone()
        },
        class: input.class,
        kind: input.kind,
        origin: resolve_origin(input.origin.as_deref()),
        level: input.level,
        stats,
        armor,
        current_hp: max_hp,
        max_hp,
        stance,
        zone_armor,
        statuses: Vec::new(),
        abilities,
    })
}
