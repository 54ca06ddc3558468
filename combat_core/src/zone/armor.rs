//! Zone armour aggregation from equipped gear

use super::{BodyZone, ZoneMap};
use crate::source::EquippedItem;

/// Armour value per body zone
pub type ZoneArmor = ZoneMap<f64>;

/// Aggregate per-zone armour from equipped items
///
/// Items in a slot with zone affinity add their armour to that zone. Weapons
/// and accessories split their armour evenly across all four zones. Items
/// without an armour stat contribute nothing.
pub fn compute_zone_armor(items: &[EquippedItem]) -> ZoneArmor {
    let mut armor = ZoneArmor::default();

    for item in items {
        let Some(value) = item.armor() else {
            continue;
        };
        let value = value.max(0.0);

        match item.slot.body_zone() {
            Some(zone) => armor[zone] += value,
            None => {
                let share = value / BodyZone::ALL.len() as f64;
                for zone in BodyZone::ALL {
                    armor[zone] += share;
                }
            }
        }
    }

    armor
}

/// Sum of all four zones, for display only
pub fn total_armor_from_zones(zone_armor: &ZoneArmor) -> f64 {
    zone_armor.iter().map(|(_, value)| value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EquipmentSlot;
    use proptest::prelude::*;

    fn item(slot: EquipmentSlot, armor: f64) -> EquippedItem {
        EquippedItem::new(slot, "test item").with_stat("armor", armor)
    }

    #[test]
    fn test_no_items() {
        let armor = compute_zone_armor(&[]);
        assert_eq!(armor, ZoneMap::splat(0.0));
    }

    #[test]
    fn test_weapon_splits_evenly() {
        let armor = compute_zone_armor(&[item(EquipmentSlot::Weapon, 40.0)]);
        for (_, value) in armor.iter() {
            assert!((value - 10.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_head_item_plus_accessory() {
        let armor = compute_zone_armor(&[
            item(EquipmentSlot::Helmet, 30.0),
            item(EquipmentSlot::Amulet, 20.0),
        ]);
        assert!((armor.head - 35.0).abs() < f64::EPSILON);
        assert!((armor.torso - 5.0).abs() < f64::EPSILON);
        assert!((armor.waist - 5.0).abs() < f64::EPSILON);
        assert!((armor.legs - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_slots_map_to_zones() {
        let armor = compute_zone_armor(&[
            item(EquipmentSlot::Chest, 12.0),
            item(EquipmentSlot::Gloves, 3.0),
            item(EquipmentSlot::Belt, 4.0),
            item(EquipmentSlot::Legs, 6.0),
            item(EquipmentSlot::Boots, 2.0),
        ]);
        assert!((armor.head - 0.0).abs() < f64::EPSILON);
        assert!((armor.torso - 15.0).abs() < f64::EPSILON);
        assert!((armor.waist - 4.0).abs() < f64::EPSILON);
        assert!((armor.legs - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_armor_key_is_case_insensitive() {
        let helmet = EquippedItem::new(EquipmentSlot::Helmet, "Iron Cap").with_stat("Armor", 7.0);
        let armor = compute_zone_armor(&[helmet]);
        assert!((armor.head - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_items_without_armor_contribute_nothing() {
        let ring = EquippedItem::new(EquipmentSlot::Ring, "Band").with_stat("luck", 3.0);
        assert_eq!(compute_zone_armor(&[ring]), ZoneMap::splat(0.0));
    }

    fn slot_strategy() -> impl Strategy<Value = EquipmentSlot> {
        prop::sample::select(EquipmentSlot::all().to_vec())
    }

    proptest! {
        #[test]
        fn prop_total_matches_item_sum(
            entries in prop::collection::vec((slot_strategy(), 0u32..500), 0..12)
        ) {
            let items: Vec<_> = entries
                .iter()
                .map(|(slot, armor)| item(*slot, f64::from(*armor)))
                .collect();
            let expected: f64 = entries.iter().map(|(_, armor)| f64::from(*armor)).sum();
            let total = total_armor_from_zones(&compute_zone_armor(&items));
            prop_assert!((total - expected).abs() < 1e-6);
        }
    }
}
