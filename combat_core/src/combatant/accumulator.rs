//! StatAccumulator - Collects stat contributions before finalizing attributes

use crate::source::{scale_attribute, StatSource};
use crate::types::{Attribute, Attributes, BaseStats};

/// Accumulates stat contributions from every source
///
/// Final attribute = `floor(base * (1 + origin_percent)) + flat`, never below 0.
#[derive(Debug, Clone, Default)]
pub struct StatAccumulator {
    pub base: Attributes<f64>,
    pub origin_percent: Attributes<f64>,
    pub flat: Attributes<f64>,
    pub armor_flat: f64,
}

impl StatAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply sources in priority order (stable for equal priorities)
    pub fn apply_sources(&mut self, sources: &mut [Box<dyn StatSource>]) {
        sources.sort_by_key(|s| s.priority());
        for source in sources.iter() {
            source.apply(self);
        }
    }

    /// Compute final attributes
    pub fn attributes(&self) -> BaseStats {
        let mut stats = BaseStats::default();
        for attr in Attribute::all() {
            let scaled = scale_attribute(self.base.get(*attr), self.origin_percent.get(*attr));
            let value = scaled + self.flat.get(*attr).round();
            stats.set(*attr, value.max(0.0) as u32);
        }
        stats
    }

    pub fn armor(&self) -> f64 {
        self.armor_flat.max(0.0)
    }
}
