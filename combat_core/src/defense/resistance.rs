//! Resistance - Magic damage mitigation
//!
//! Resist is a percentage derived from endurance and wisdom:
//! `resist = endurance * per_endurance + wisdom * per_wisdom`, capped at
//! `max_resist`. Magic never interacts with zones or blocks.

use crate::config::ResistConstants;
use crate::types::BaseStats;

/// Magic resist percentage for a set of attributes
pub fn magic_resist(stats: &BaseStats, constants: &ResistConstants) -> f64 {
    let resist = f64::from(stats.endurance) * constants.per_endurance
        + f64::from(stats.wisdom) * constants.per_wisdom;
    resist.clamp(0.0, constants.max_resist)
}

/// Damage after resistance mitigation
///
/// # Arguments
/// * `damage` - The incoming magic damage
/// * `resistance` - The defender's resist in percent
pub fn calculate_resistance_mitigation(damage: f64, resistance: f64) -> f64 {
    if damage <= 0.0 {
        return 0.0;
    }

    let mitigation = resistance.clamp(0.0, 100.0) / 100.0;
    (damage * (1.0 - mitigation)).max(0.0)
}
