//! GearSource - Stats from equipped items

use crate::combatant::StatAccumulator;
use crate::source::StatSource;
use crate::types::{Attribute, EquipmentSlot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stat key holding an item's armour value
pub const ARMOR_KEY: &str = "armor";

/// An item worn in a slot, with free-form numeric stats
///
/// Stat keys are matched case-insensitively. Attribute names add flat
/// attribute points; `armor` feeds both flat armour and zone armour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub slot: EquipmentSlot,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
}

impl EquippedItem {
    pub fn new(slot: EquipmentSlot, name: impl Into<String>) -> Self {
        EquippedItem {
            slot,
            name: name.into(),
            stats: BTreeMap::new(),
        }
    }

    /// Add a stat to this item
    pub fn with_stat(mut self, key: impl Into<String>, value: f64) -> Self {
        self.stats.insert(key.into(), value);
        self
    }

    /// Sum of every stat whose key matches, ignoring case
    pub fn stat(&self, key: &str) -> Option<f64> {
        let mut found = None;
        for (k, value) in &self.stats {
            if k.trim().eq_ignore_ascii_case(key) {
                *found.get_or_insert(0.0) += value;
            }
        }
        found
    }

    pub fn armor(&self) -> Option<f64> {
        self.stat(ARMOR_KEY)
    }
}

/// Stats from an equipped item
pub struct GearSource {
    pub item: EquippedItem,
}

impl GearSource {
    pub fn new(item: EquippedItem) -> Self {
        GearSource { item }
    }
}

impl StatSource for GearSource {
    fn id(&self) -> &str {
        &self.item.name
    }

    fn priority(&self) -> i32 {
        10
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for (key, value) in &self.item.stats {
            if let Some(attr) = Attribute::from_key(key) {
                *stats.flat.get_mut(attr) += value;
            }
        }

        if let Some(armor) = self.item.armor() {
            stats.armor_flat += armor.max(0.0);
        }
    }
}
