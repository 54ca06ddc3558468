//! Evasion - Agility-based dodge chance
//!
//! Formula: `dodge = base_chance + agility * per_agility`, capped at
//! `max_chance`.
//!
//! Examples (default constants):
//! - 0 agility: 5%
//! - 50 agility: 15%
//! - 150 agility or more: 35% (cap)

use crate::config::DodgeConstants;
use rand::Rng;

/// Chance for a defender to dodge an incoming action
pub fn dodge_chance(agility: u32, constants: &DodgeConstants) -> f64 {
    let chance = constants.base_chance + f64::from(agility) * constants.per_agility;
    chance.clamp(0.0, constants.max_chance)
}

/// Roll a dodge against the defender's agility
pub fn roll_dodge(agility: u32, constants: &DodgeConstants, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < dodge_chance(agility, constants)
}
