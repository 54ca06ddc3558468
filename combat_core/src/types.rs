//! Core types shared across the combat engine

use crate::zone::BodyZone;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight character attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Agility,
    Vitality,
    Endurance,
    Intelligence,
    Wisdom,
    Luck,
    Charisma,
}

impl Attribute {
    /// Get all attributes in display order
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Agility,
            Attribute::Vitality,
            Attribute::Endurance,
            Attribute::Intelligence,
            Attribute::Wisdom,
            Attribute::Luck,
            Attribute::Charisma,
        ]
    }

    /// Lowercase identifier used in stat keys
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Agility => "agility",
            Attribute::Vitality => "vitality",
            Attribute::Endurance => "endurance",
            Attribute::Intelligence => "intelligence",
            Attribute::Wisdom => "wisdom",
            Attribute::Luck => "luck",
            Attribute::Charisma => "charisma",
        }
    }

    /// Match an item stat key against an attribute name, ignoring case
    pub fn from_key(key: &str) -> Option<Attribute> {
        let key = key.trim();
        Attribute::all()
            .iter()
            .copied()
            .find(|attr| attr.name().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attributes<T> {
    pub strength: T,
    pub agility: T,
    pub vitality: T,
    pub endurance: T,
    pub intelligence: T,
    pub wisdom: T,
    pub luck: T,
    pub charisma: T,
}

impl<T: Copy> Attributes<T> {
    /// Same value for every attribute
    pub fn splat(value: T) -> Self {
        Attributes {
            strength: value,
            agility: value,
            vitality: value,
            endurance: value,
            intelligence: value,
            wisdom: value,
            luck: value,
            charisma: value,
        }
    }

    pub fn get(&self, attr: Attribute) -> T {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Vitality => self.vitality,
            Attribute::Endurance => self.endurance,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Luck => self.luck,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn get_mut(&mut self, attr: Attribute) -> &mut T {
        match attr {
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Vitality => &mut self.vitality,
            Attribute::Endurance => &mut self.endurance,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Wisdom => &mut self.wisdom,
            Attribute::Luck => &mut self.luck,
            Attribute::Charisma => &mut self.charisma,
        }
    }

    pub fn set(&mut self, attr: Attribute, value: T) {
        *self.get_mut(attr) = value;
    }

    /// Set a single attribute, builder style
    pub fn with(mut self, attr: Attribute, value: T) -> Self {
        self.set(attr, value);
        self
    }
}

/// Raw attribute values of a character
pub type BaseStats = Attributes<u32>;

/// Flat attribute deltas (equipment bonuses), may be negative
pub type StatBonuses = Attributes<i32>;

/// Character class, which decides the basic attack and the default ability set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatClass {
    Warrior,
    Rogue,
    Mage,
    Cleric,
    /// Scripted boss, uses the boss ability table
    Boss,
}

impl CombatClass {
    pub fn name(&self) -> &'static str {
        match self {
            CombatClass::Warrior => "Warrior",
            CombatClass::Rogue => "Rogue",
            CombatClass::Mage => "Mage",
            CombatClass::Cleric => "Cleric",
            CombatClass::Boss => "Boss",
        }
    }
}

/// Whether a combatant is controlled by a player or scripted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatantKind {
    #[default]
    Player,
    Npc,
}

/// Equipment slot for gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    #[serde(alias = "head")]
    Helmet,
    #[serde(alias = "body_armour", alias = "body_armor")]
    Chest,
    #[serde(alias = "hands")]
    Gloves,
    Belt,
    Legs,
    #[serde(alias = "feet")]
    Boots,
    Ring,
    Amulet,
    Cloak,
}

impl EquipmentSlot {
    /// Get all equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Weapon,
            EquipmentSlot::Helmet,
            EquipmentSlot::Chest,
            EquipmentSlot::Gloves,
            EquipmentSlot::Belt,
            EquipmentSlot::Legs,
            EquipmentSlot::Boots,
            EquipmentSlot::Ring,
            EquipmentSlot::Amulet,
            EquipmentSlot::Cloak,
        ]
    }

    /// Body zone this slot protects, `None` for weapons and accessories
    pub fn body_zone(&self) -> Option<BodyZone> {
        match self {
            EquipmentSlot::Helmet => Some(BodyZone::Head),
            EquipmentSlot::Chest | EquipmentSlot::Gloves => Some(BodyZone::Torso),
            EquipmentSlot::Belt => Some(BodyZone::Waist),
            EquipmentSlot::Legs | EquipmentSlot::Boots => Some(BodyZone::Legs),
            EquipmentSlot::Weapon
            | EquipmentSlot::Ring
            | EquipmentSlot::Amulet
            | EquipmentSlot::Cloak => None,
        }
    }
}
