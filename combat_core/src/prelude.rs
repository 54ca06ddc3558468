//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::types::{Attribute, BaseStats, CombatClass, CombatantKind, EquipmentSlot, StatBonuses};

// Combatants
pub use crate::combatant::{build_combatant_state, CombatantInput, CombatantState};
pub use crate::source::{EquippedItem, Origin};

// Zones
pub use crate::zone::{BodyZone, CombatStance, RawStance, StanceError, ZoneMap};

// Actions
pub use crate::damage::{Ability, Action, BossAbility, ClericAbility, MageAbility, RogueAbility, WarriorAbility};

// Combat
pub use crate::combat::{simulate, CombatEngine, CombatError, CombatLogEntry, CombatResult};

// Config
pub use crate::config::CombatConstants;
