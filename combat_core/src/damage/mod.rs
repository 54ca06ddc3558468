//! Damage system - Actions, abilities and damage rolls

mod ability;
mod calculation;

pub use ability::{
    Ability, Action, ActionEffect, ActionKind, ActionProfile, BossAbility, ClericAbility,
    MageAbility, RogueAbility, WarriorAbility,
};
pub use calculation::{
    crit_chance, crit_multiplier, finalize_damage, offensive_stat, roll_base_damage, roll_crit,
};
