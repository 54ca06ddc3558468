//! Class and boss abilities as closed enums
//!
//! Every ability a combatant can use is a variant here, so an unknown
//! ability id is rejected when input is deserialized instead of at fight time.

use crate::status::StatusKind;
use crate::types::CombatClass;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How an action is mitigated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Targeted at a body zone, reduced by blocks and zone armour
    Physical,
    /// No zone, reduced by magic resist
    Magic,
    /// Self-targeted, no damage
    Support,
}

/// Extra effect attached to an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionEffect {
    ApplyStatus(StatusKind),
    /// Permanently lowers the target's zone armour
    ArmorBreak,
}

/// Numbers behind an action
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionProfile {
    pub name: &'static str,
    pub kind: ActionKind,
    pub multiplier: f64,
    /// Added to the attacker's crit chance
    pub crit_bonus: f64,
    pub effect: Option<ActionEffect>,
}

impl ActionProfile {
    fn new(name: &'static str, kind: ActionKind, multiplier: f64) -> Self {
        ActionProfile {
            name,
            kind,
            multiplier,
            crit_bonus: 0.0,
            effect: None,
        }
    }

    fn with_crit_bonus(mut self, bonus: f64) -> Self {
        self.crit_bonus = bonus;
        self
    }

    fn with_effect(mut self, effect: ActionEffect) -> Self {
        self.effect = Some(effect);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarriorAbility {
    PowerStrike,
    Rend,
    Sunder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RogueAbility {
    Backstab,
    PoisonBlade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MageAbility {
    Fireball,
    FrostLance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClericAbility {
    Smite,
    Renew,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BossAbility {
    Crush,
    Gore,
    Sunder,
    VenomSpit,
    Hellfire,
    Bloodlust,
}

/// A special ability, tagged with the class it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "class", content = "ability", rename_all = "snake_case")]
pub enum Ability {
    Warrior(WarriorAbility),
    Rogue(RogueAbility),
    Mage(MageAbility),
    Cleric(ClericAbility),
    Boss(BossAbility),
}

impl Ability {
    pub fn profile(&self) -> ActionProfile {
        use ActionEffect::{ApplyStatus, ArmorBreak};
        use ActionKind::{Magic, Physical, Support};

        match self {
            Ability::Warrior(a) => match a {
                WarriorAbility::PowerStrike => ActionProfile::new("Power Strike", Physical, 1.5),
                WarriorAbility::Rend => ActionProfile::new("Rend", Physical, 1.0)
                    .with_effect(ApplyStatus(StatusKind::Bleed)),
                WarriorAbility::Sunder => {
                    ActionProfile::new("Sunder", Physical, 1.1).with_effect(ArmorBreak)
                }
            },
            Ability::Rogue(a) => match a {
                RogueAbility::Backstab => {
                    ActionProfile::new("Backstab", Physical, 1.3).with_crit_bonus(0.15)
                }
                RogueAbility::PoisonBlade => ActionProfile::new("Poison Blade", Physical, 0.9)
                    .with_effect(ApplyStatus(StatusKind::Poison)),
            },
            Ability::Mage(a) => match a {
                MageAbility::Fireball => ActionProfile::new("Fireball", Magic, 1.4)
                    .with_effect(ApplyStatus(StatusKind::Burn)),
                MageAbility::FrostLance => ActionProfile::new("Frost Lance", Magic, 1.6),
            },
            Ability::Cleric(a) => match a {
                ClericAbility::Smite => ActionProfile::new("Smite", Magic, 1.3),
                ClericAbility::Renew => ActionProfile::new("Renew", Support, 0.0)
                    .with_effect(ApplyStatus(StatusKind::Regeneration)),
            },
            Ability::Boss(a) => match a {
                BossAbility::Crush => ActionProfile::new("Crush", Physical, 1.8),
                BossAbility::Gore => ActionProfile::new("Gore", Physical, 1.1)
                    .with_effect(ApplyStatus(StatusKind::Bleed)),
                BossAbility::Sunder => {
                    ActionProfile::new("Sunder", Physical, 1.0).with_effect(ArmorBreak)
                }
                BossAbility::VenomSpit => ActionProfile::new("Venom Spit", Magic, 0.9)
                    .with_effect(ApplyStatus(StatusKind::Poison)),
                BossAbility::Hellfire => ActionProfile::new("Hellfire", Magic, 1.5)
                    .with_effect(ApplyStatus(StatusKind::Burn)),
                BossAbility::Bloodlust => ActionProfile::new("Bloodlust", Support, 0.0)
                    .with_effect(ApplyStatus(StatusKind::Regeneration)),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        self.profile().name
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl CombatClass {
    /// Abilities a class rolls from when no restricted list is given
    pub fn default_abilities(&self) -> Vec<Ability> {
        match self {
            CombatClass::Warrior => vec![
                Ability::Warrior(WarriorAbility::PowerStrike),
                Ability::Warrior(WarriorAbility::Rend),
                Ability::Warrior(WarriorAbility::Sunder),
            ],
            CombatClass::Rogue => vec![
                Ability::Rogue(RogueAbility::Backstab),
                Ability::Rogue(RogueAbility::PoisonBlade),
            ],
            CombatClass::Mage => vec![
                Ability::Mage(MageAbility::Fireball),
                Ability::Mage(MageAbility::FrostLance),
            ],
            CombatClass::Cleric => vec![
                Ability::Cleric(ClericAbility::Smite),
                Ability::Cleric(ClericAbility::Renew),
            ],
            CombatClass::Boss => vec![
                Ability::Boss(BossAbility::Crush),
                Ability::Boss(BossAbility::Gore),
                Ability::Boss(BossAbility::Sunder),
                Ability::Boss(BossAbility::Hellfire),
            ],
        }
    }

    /// Basic attack: casters channel magic, everyone else swings
    pub fn basic_attack(&self) -> ActionProfile {
        match self {
            CombatClass::Mage => ActionProfile::new("Arcane Bolt", ActionKind::Magic, 1.0),
            _ => ActionProfile::new("Attack", ActionKind::Physical, 1.0),
        }
    }
}

/// What a combatant does on its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    BasicAttack,
    Special(Ability),
}

impl Action {
    pub fn profile(&self, class: CombatClass) -> ActionProfile {
        match self {
            Action::BasicAttack => class.basic_attack(),
            Action::Special(ability) => ability.profile(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_attack_by_class() {
        assert_eq!(CombatClass::Mage.basic_attack().kind, ActionKind::Magic);
        assert_eq!(CombatClass::Warrior.basic_attack().kind, ActionKind::Physical);
        assert_eq!(Action::BasicAttack.profile(CombatClass::Boss).name, "Attack");
    }

    #[test]
    fn test_every_class_has_abilities() {
        for class in [
            CombatClass::Warrior,
            CombatClass::Rogue,
            CombatClass::Mage,
            CombatClass::Cleric,
            CombatClass::Boss,
        ] {
            assert!(!class.default_abilities().is_empty());
        }
    }

    #[test]
    fn test_support_abilities_apply_a_buff() {
        let renew = Ability::Cleric(ClericAbility::Renew).profile();
        assert_eq!(renew.kind, ActionKind::Support);
        match renew.effect {
            Some(ActionEffect::ApplyStatus(kind)) => assert!(!kind.is_harmful()),
            other => panic!("unexpected effect: {other:?}"),
        }
    }

    #[test]
    fn test_ability_serde_shape() {
        let ability: Ability =
            serde_json::from_str(r#"{"class":"boss","ability":"venom_spit"}"#).unwrap();
        assert_eq!(ability, Ability::Boss(BossAbility::VenomSpit));
        assert!(serde_json::from_str::<Ability>(r#"{"class":"boss","ability":"laser"}"#).is_err());
    }
}
