//! EquipmentBonusSource - Flat attribute deltas supplied by the caller

use crate::combatant::StatAccumulator;
use crate::source::StatSource;
use crate::types::{Attribute, StatBonuses};

/// Pre-summed equipment bonuses, added after origin scaling
pub struct EquipmentBonusSource {
    pub bonuses: StatBonuses,
}

impl EquipmentBonusSource {
    pub fn new(bonuses: StatBonuses) -> Self {
        EquipmentBonusSource { bonuses }
    }
}

impl StatSource for EquipmentBonusSource {
    fn id(&self) -> &str {
        "equipment_bonuses"
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for attr in Attribute::all() {
            *stats.flat.get_mut(*attr) += f64::from(self.bonuses.get(*attr));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_bonus_is_kept() {
        let source = EquipmentBonusSource::new(StatBonuses::default().with(Attribute::Agility, -4));
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);
        assert!((acc.flat.agility + 4.0).abs() < f64::EPSILON);
        assert_eq!(source.priority(), 0);
    }
}
