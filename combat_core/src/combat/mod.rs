//! Combat - the turn loop, action resolution and fight results

mod engine;
mod resolution;
mod result;
mod simulation;

pub use engine::{run_fight, CombatEngine, CombatError};
pub use resolution::{apply_damage, choose_action, resolve_action, take_turn, ActionOutcome};
pub use result::{CombatLogEntry, CombatResult, FightState};
pub use simulation::{simulate, BatchReport};
