//! Armour - Physical damage reduction with diminishing returns
//!
//! Mitigation always reads the armour of the zone that was struck, never the
//! combatant's total armour.

use crate::config::ArmourConstants;

/// Fraction of a physical hit absorbed by armour
///
/// `Reduction = Armour / (Armour + CONSTANT * Damage)`, capped at
/// `max_reduction`.
///
/// This makes armour more effective against many small hits
/// and less effective against large hits.
pub fn armour_reduction_fraction(armour: f64, damage: f64, constants: &ArmourConstants) -> f64 {
    if damage <= 0.0 || armour <= 0.0 {
        return 0.0;
    }

    let reduction = armour / (armour + constants.damage_constant * damage);
    reduction.clamp(0.0, constants.max_reduction)
}

/// Damage left after armour reduction
pub fn calculate_armour_reduction(armour: f64, damage: f64, constants: &ArmourConstants) -> f64 {
    if damage <= 0.0 {
        return 0.0;
    }

    let reduced = damage * (1.0 - armour_reduction_fraction(armour, damage, constants));
    reduced.max(0.0)
}
