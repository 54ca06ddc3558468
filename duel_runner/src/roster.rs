//! Roster files - the two fighters of a duel

use combat_core::config::{ArchetypeTable, ConfigError};
use combat_core::{CombatEngine, CombatError, CombatantInput, CombatantState};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("combat error: {0}")]
    Combat(#[from] CombatError),
    #[error("a roster needs exactly two combatants (got {0})")]
    RosterSize(usize),
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One fighter, optionally fighting in a named boss stance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(default)]
    pub archetype: Option<String>,
    #[serde(flatten)]
    pub input: CombatantInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub combatants: Vec<RosterEntry>,
}

impl Roster {
    pub fn load(path: &Path) -> Result<Self, RunnerError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::from)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, RunnerError> {
        let roster: Roster = combat_core::config::parse_toml(content)?;
        roster.check()
    }

    fn check(self) -> Result<Self, RunnerError> {
        if self.combatants.len() == 2 {
            Ok(self)
        } else {
            Err(RunnerError::RosterSize(self.combatants.len()))
        }
    }

    /// Build both fighters; archetypes override the submitted stance
    pub fn build(
        &self,
        engine: &CombatEngine,
        archetypes: &ArchetypeTable,
        rng: &mut impl Rng,
    ) -> Result<[CombatantState; 2], RunnerError> {
        let [first, second] = self.combatants.as_slice() else {
            return Err(RunnerError::RosterSize(self.combatants.len()));
        };
        let first = build_entry(first, engine, archetypes, rng)?;
        let second = build_entry(second, engine, archetypes, rng)?;
        Ok([first, second])
    }
}

fn build_entry(
    entry: &RosterEntry,
    engine: &CombatEngine,
    archetypes: &ArchetypeTable,
    rng: &mut impl Rng,
) -> Result<CombatantState, RunnerError> {
    let mut state = engine.build(&entry.input)?;
    if let Some(archetype) = entry.archetype.as_deref() {
        state.stance = archetypes.generate(Some(archetype), rng);
        tracing::debug!(combatant = %state.id, archetype, "archetype stance applied");
    }
    Ok(state)
}
