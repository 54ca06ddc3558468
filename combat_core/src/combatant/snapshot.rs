//! Pre-fight view of a combatant for display and replay

use super::CombatantState;
use crate::damage::Ability;
use crate::source::Origin;
use crate::types::{BaseStats, CombatClass, CombatantKind};
use crate::zone::{CombatStance, ZoneArmor};
use serde::{Deserialize, Serialize};

/// Immutable copy of a combatant taken before turn 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatantSnapshot {
    pub id: String,
    pub name: String,
    pub class: CombatClass,
    pub kind: CombatantKind,
    pub origin: Option<Origin>,
    pub level: u32,
    pub stats: BaseStats,
    pub armor: f64,
    pub max_hp: u32,
    pub stance: CombatStance,
    pub zone_armor: ZoneArmor,
    pub abilities: Vec<Ability>,
}

impl CombatantSnapshot {
    pub fn capture(state: &CombatantState) -> Self {
        CombatantSnapshot {
            id: state.id.clone(),
            name: state.name.clone(),
            class: state.class,
            kind: state.kind,
            origin: state.origin,
            level: state.level,
            stats: state.stats,
            armor: state.armor,
            max_hp: state.max_hp,
            stance: state.stance.clone(),
            zone_armor: state.zone_armor,
            abilities: state.available_abilities(),
        }
    }

    /// One-line description, e.g. `Grimjaw (Boss, undead) lv 12, 340 HP`
    pub fn describe(&self) -> String {
        let origin = self.origin.map(|o| format!(", {o}")).unwrap_or_default();
        format!(
            "{} ({}{}) lv {}, {} HP",
            self.name,
            self.class.name(),
            origin,
            self.level,
            self.max_hp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::{build_combatant_state, CombatantInput};

    #[test]
    fn test_snapshot_ignores_later_changes() {
        let mut state = build_combatant_state(
            &CombatantInput::new("u1", "Grimjaw", CombatClass::Boss).with_origin("undead"),
        )
        .unwrap();
        let snapshot = state.snapshot();
        state.take_damage(10);
        state.zone_armor.head = 0.0;

        assert_eq!(snapshot.max_hp, state.max_hp);
        assert_eq!(snapshot.origin, Some(Origin::Undead));
        assert!(snapshot.describe().starts_with("Grimjaw (Boss, undead) lv 1"));
    }
}
