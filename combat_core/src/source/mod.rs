//! StatSource - Trait and implementations for stat providers

mod base_stats;
mod bonus;
mod gear;
mod origin;

pub use base_stats::BaseStatsSource;
pub use bonus::EquipmentBonusSource;
pub use gear::{EquippedItem, GearSource, ARMOR_KEY};
pub use origin::{
    apply_origin_bonuses, cheat_death_chance, has_cheat_death, resolve_origin, Origin,
    OriginSource, MAX_ORIGIN_MODIFIER,
};

pub(crate) use origin::scale_attribute;

use crate::combatant::StatAccumulator;

/// Trait for anything that contributes stats to a combatant
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// Suggested priorities:
    /// - Base stats: -100
    /// - Origin: -50
    /// - Equipment bonuses: 0
    /// - Gear items: 10
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}
