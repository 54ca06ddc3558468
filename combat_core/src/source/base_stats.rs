//! BaseStatsSource - The character's own attribute points

use crate::combatant::StatAccumulator;
use crate::source::StatSource;
use crate::types::{Attribute, BaseStats};

/// Raw attributes as allocated on the character sheet
pub struct BaseStatsSource {
    pub stats: BaseStats,
}

impl BaseStatsSource {
    pub fn new(stats: BaseStats) -> Self {
        BaseStatsSource { stats }
    }
}

impl StatSource for BaseStatsSource {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for attr in Attribute::all() {
            *stats.base.get_mut(*attr) += f64::from(self.stats.get(*attr));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_stats_fill_accumulator() {
        let source = BaseStatsSource::new(BaseStats::splat(12).with(Attribute::Luck, 30));
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);

        assert!((acc.base.strength - 12.0).abs() < f64::EPSILON);
        assert!((acc.base.luck - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base_stats_priority() {
        let source = BaseStatsSource::new(BaseStats::default());
        assert_eq!(source.priority(), -100);
    }
}
