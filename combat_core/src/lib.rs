//! combat_core - Turn-based PvP combat resolution engine
//!
//! This library provides:
//! - Combatant building: base stats, origin modifiers and equipment folded into a CombatantState
//! - Body zones: stances, hit-zone targeting, block reduction and per-zone armour
//! - Mitigation: dodge, criticals, zone armour and magic resist
//! - The turn loop: ability selection, status effects, cheat death, victory and draw
//!
//! All randomness comes from a caller-supplied `rand::Rng`, so a seeded
//! generator replays a fight exactly.

pub mod combat;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod defense;
pub mod prelude;
pub mod source;
pub mod status;
pub mod types;
pub mod zone;

// Re-export core types for convenience
pub use combat::{
    run_fight, simulate, BatchReport, CombatEngine, CombatError, CombatLogEntry, CombatResult,
    FightState,
};
pub use combatant::{
    build_combatant_state, build_combatant_state_with, CombatantInput, CombatantSnapshot,
    CombatantState, StatAccumulator,
};
pub use config::{CombatConstants, ConfigError};
pub use damage::{Ability, Action, ActionKind};
pub use source::{
    apply_origin_bonuses, cheat_death_chance, has_cheat_death, EquippedItem, Origin, StatSource,
};
pub use status::{ActiveStatus, StatusKind, StatusTick};
pub use types::{Attribute, Attributes, BaseStats, CombatClass, CombatantKind, EquipmentSlot, StatBonuses};
pub use zone::{
    calc_block_reduction, compute_zone_armor, default_stance, generate_boss_stance,
    generate_random_stance, resolve_hit_zone, total_armor_from_zones, validate_stance, BodyZone,
    CombatStance, RawStance, StanceError, ZoneArmor, ZoneMap,
};
