//! Combat constants configuration

use super::ConfigError;
use crate::zone::ZoneMap;
use serde::{Deserialize, Serialize};

/// Tunable combat balance constants
///
/// Every section defaults to the live balance values, so a TOML file only
/// needs the keys it overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    #[serde(default)]
    pub zones: ZoneConstants,
    #[serde(default)]
    pub health: HealthConstants,
    #[serde(default)]
    pub damage: DamageConstants,
    #[serde(default)]
    pub dodge: DodgeConstants,
    #[serde(default)]
    pub crit: CritConstants,
    #[serde(default)]
    pub armour: ArmourConstants,
    #[serde(default)]
    pub resist: ResistConstants,
    #[serde(default)]
    pub status: StatusConstants,
    #[serde(default)]
    pub turns: TurnConstants,
}

impl CombatConstants {
    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("zones.focus_chance", self.zones.focus_chance)?;
        for (zone, weight) in self.zones.hit_weights.iter() {
            check_non_negative(&format!("zones.hit_weights.{zone}"), weight)?;
        }
        for (zone, mult) in self.zones.damage_multipliers.iter() {
            check_non_negative(&format!("zones.damage_multipliers.{zone}"), mult)?;
        }
        check_non_negative("health.per_vitality", self.health.per_vitality)?;
        check_non_negative("damage.stat_scaling", self.damage.stat_scaling)?;
        check_probability("damage.variance", self.damage.variance)?;
        check_probability("dodge.base_chance", self.dodge.base_chance)?;
        check_probability("dodge.max_chance", self.dodge.max_chance)?;
        check_probability("crit.base_chance", self.crit.base_chance)?;
        check_probability("crit.max_chance", self.crit.max_chance)?;
        if self.crit.max_multiplier < self.crit.base_multiplier || self.crit.base_multiplier < 1.0 {
            return Err(ConfigError::ValidationError(
                "crit multipliers must satisfy 1.0 <= base_multiplier <= max_multiplier".to_string(),
            ));
        }
        if self.armour.damage_constant <= 0.0 {
            return Err(ConfigError::ValidationError(
                "armour.damage_constant must be positive".to_string(),
            ));
        }
        check_probability("armour.max_reduction", self.armour.max_reduction)?;
        if !(0.0..=100.0).contains(&self.resist.max_resist) {
            return Err(ConfigError::ValidationError(format!(
                "resist.max_resist must be within 0..=100 (got {})",
                self.resist.max_resist
            )));
        }
        check_probability("status.resist_chance", self.status.resist_chance)?;
        check_probability("status.armor_break_fraction", self.status.armor_break_fraction)?;
        for (name, tuning) in [
            ("bleed", &self.status.bleed),
            ("poison", &self.status.poison),
            ("burn", &self.status.burn),
            ("regeneration", &self.status.regeneration),
        ] {
            check_probability(&format!("status.{name}.percent"), tuning.percent)?;
        }
        check_probability("turns.player_ability_chance", self.turns.player_ability_chance)?;
        check_probability("turns.npc_ability_chance", self.turns.npc_ability_chance)?;
        if self.turns.max_turns == 0 {
            return Err(ConfigError::ValidationError(
                "turns.max_turns must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{name} must be within 0..=1 (got {value})"
        )))
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(format!(
            "{name} cannot be negative (got {value})"
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneConstants {
    /// Chance that a two-zone stance strikes its primary zone outright
    pub focus_chance: f64,
    /// Relative weight of each zone in the weighted hit draw
    pub hit_weights: ZoneMap<f64>,
    /// Physical damage multiplier per struck zone
    pub damage_multipliers: ZoneMap<f64>,
}

impl Default for ZoneConstants {
    fn default() -> Self {
        ZoneConstants {
            focus_chance: 0.15,
            hit_weights: ZoneMap {
                head: 0.15,
                torso: 0.40,
                waist: 0.25,
                legs: 0.20,
            },
            damage_multipliers: ZoneMap {
                head: 1.3,
                torso: 1.0,
                waist: 0.9,
                legs: 0.8,
            },
        }
    }
}

/// `max_hp = base + vitality * per_vitality`, never below the HP floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthConstants {
    pub base: f64,
    pub per_vitality: f64,
}

impl Default for HealthConstants {
    fn default() -> Self {
        HealthConstants {
            base: 50.0,
            per_vitality: 10.0,
        }
    }
}

/// `raw = base + stat * stat_scaling + level * level_scaling`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageConstants {
    pub base: f64,
    pub stat_scaling: f64,
    pub level_scaling: f64,
    /// Hit damage rolls uniformly within `1 ± variance`
    pub variance: f64,
    /// Smallest damage a landed hit can deal
    pub minimum: u32,
}

impl Default for DamageConstants {
    fn default() -> Self {
        DamageConstants {
            base: 5.0,
            stat_scaling: 1.5,
            level_scaling: 1.0,
            variance: 0.10,
            minimum: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DodgeConstants {
    pub base_chance: f64,
    pub per_agility: f64,
    pub max_chance: f64,
}

impl Default for DodgeConstants {
    fn default() -> Self {
        DodgeConstants {
            base_chance: 0.05,
            per_agility: 0.002,
            max_chance: 0.35,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CritConstants {
    pub base_chance: f64,
    pub per_luck: f64,
    pub max_chance: f64,
    /// Critical strike multiplier before luck (1.5 = 150%)
    pub base_multiplier: f64,
    pub multiplier_per_luck: f64,
    pub max_multiplier: f64,
}

impl Default for CritConstants {
    fn default() -> Self {
        CritConstants {
            base_chance: 0.05,
            per_luck: 0.002,
            max_chance: 0.40,
            base_multiplier: 1.5,
            multiplier_per_luck: 0.005,
            max_multiplier: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmourConstants {
    /// Formula constant: reduction = armour / (armour + constant * damage)
    pub damage_constant: f64,
    /// Upper bound on the armour reduction fraction
    pub max_reduction: f64,
}

impl Default for ArmourConstants {
    fn default() -> Self {
        ArmourConstants {
            damage_constant: 2.0,
            max_reduction: 0.75,
        }
    }
}

/// Magic resist in percent: `endurance * per_endurance + wisdom * per_wisdom`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResistConstants {
    pub per_endurance: f64,
    pub per_wisdom: f64,
    pub max_resist: f64,
}

impl Default for ResistConstants {
    fn default() -> Self {
        ResistConstants {
            per_endurance: 0.25,
            per_wisdom: 0.5,
            max_resist: 60.0,
        }
    }
}

/// Per-tick strength and duration of one status kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusTuning {
    /// Fraction of the holder's max HP per tick
    pub percent: f64,
    /// Ticks before the status expires
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConstants {
    /// Chance that a new harmful status is shrugged off
    pub resist_chance: f64,
    /// Fraction of zone armour removed by an armour break
    pub armor_break_fraction: f64,
    pub bleed: StatusTuning,
    pub poison: StatusTuning,
    pub burn: StatusTuning,
    pub regeneration: StatusTuning,
}

impl Default for StatusConstants {
    fn default() -> Self {
        StatusConstants {
            resist_chance: 0.15,
            armor_break_fraction: 0.25,
            bleed: StatusTuning { percent: 0.04, duration: 3 },
            poison: StatusTuning { percent: 0.03, duration: 4 },
            burn: StatusTuning { percent: 0.05, duration: 2 },
            regeneration: StatusTuning { percent: 0.05, duration: 3 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnConstants {
    /// Turn cap; reaching it without a victor is a draw
    pub max_turns: u32,
    /// Initiative = agility + uniform roll in `0..=initiative_spread`
    pub initiative_spread: u32,
    pub player_ability_chance: f64,
    pub npc_ability_chance: f64,
}

impl Default for TurnConstants {
    fn default() -> Self {
        TurnConstants {
            max_turns: 50,
            initiative_spread: 10,
            player_ability_chance: 0.25,
            npc_ability_chance: 0.35,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = CombatConstants::default();
        assert!((constants.zones.focus_chance - 0.15).abs() < f64::EPSILON);
        assert!((constants.zones.damage_multipliers.head - 1.3).abs() < f64::EPSILON);
        assert!((constants.zones.damage_multipliers.legs - 0.8).abs() < f64::EPSILON);
        assert!((constants.crit.base_multiplier - 1.5).abs() < f64::EPSILON);
        assert_eq!(constants.turns.max_turns, 50);
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_constants() {
        let toml = r#"
[zones]
focus_chance = 0.2

[zones.damage_multipliers]
head = 1.5
torso = 1.0
waist = 0.9
legs = 0.7

[armour]
damage_constant = 5.0

[status.bleed]
percent = 0.06
duration = 2

[turns]
max_turns = 30
"#;

        let constants: CombatConstants = toml::from_str(toml).unwrap();
        assert!((constants.zones.focus_chance - 0.2).abs() < f64::EPSILON);
        assert!((constants.zones.damage_multipliers.head - 1.5).abs() < f64::EPSILON);
        // Untouched keys keep their defaults
        assert!((constants.zones.hit_weights.torso - 0.40).abs() < f64::EPSILON);
        assert!((constants.armour.max_reduction - 0.75).abs() < f64::EPSILON);
        assert_eq!(constants.status.bleed.duration, 2);
        assert_eq!(constants.status.poison.duration, 4);
        assert_eq!(constants.turns.max_turns, 30);
        assert!((constants.crit.max_multiplier - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut constants = CombatConstants::default();
        constants.turns.max_turns = 0;
        assert!(constants.validate().is_err());

        let mut constants = CombatConstants::default();
        constants.zones.focus_chance = 1.5;
        assert!(constants.validate().is_err());

        let mut constants = CombatConstants::default();
        constants.zones.hit_weights.head = -1.0;
        assert!(constants.validate().is_err());

        let mut constants = CombatConstants::default();
        constants.crit.max_multiplier = 1.2;
        assert!(constants.validate().is_err());
    }
}
