//! Boss archetype stance tables

use super::ConfigError;
use crate::zone::{generate_random_stance, BossArchetype, CombatStance, RawStance};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Container for archetype definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypesConfig {
    #[serde(rename = "archetypes")]
    pub archetypes: Vec<ArchetypeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchetypeEntry {
    pub id: String,
    #[serde(flatten)]
    pub stance: RawStance,
}

/// Named boss stances, keyed by lowercase id
#[derive(Debug, Clone, Default)]
pub struct ArchetypeTable {
    stances: BTreeMap<String, CombatStance>,
}

impl ArchetypeTable {
    /// Create an empty table
    pub fn new() -> Self {
        ArchetypeTable {
            stances: BTreeMap::new(),
        }
    }

    /// Table holding the built-in archetypes
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for archetype in BossArchetype::all() {
            table.register(archetype.id(), archetype.stance());
        }
        table
    }

    /// Register or replace an archetype
    pub fn register(&mut self, id: &str, stance: CombatStance) {
        self.stances.insert(id.trim().to_ascii_lowercase(), stance);
    }

    pub fn get(&self, id: &str) -> Option<&CombatStance> {
        self.stances.get(&id.trim().to_ascii_lowercase())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.stances.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stances.is_empty()
    }

    /// Stance for an archetype id, falling back to a random stance
    pub fn generate(&self, archetype_id: Option<&str>, rng: &mut impl Rng) -> CombatStance {
        if let Some(id) = archetype_id {
            if let Some(stance) = self.get(id) {
                return stance.clone();
            }
            tracing::warn!(archetype = id, "unknown boss archetype, using a random stance");
        }
        generate_random_stance(rng)
    }
}

fn build_table(config: ArchetypesConfig) -> Result<ArchetypeTable, ConfigError> {
    let mut table = ArchetypeTable::with_defaults();
    for entry in config.archetypes {
        let stance = CombatStance::try_from(entry.stance).map_err(|err| {
            ConfigError::ValidationError(format!("archetype '{}': {}", entry.id, err))
        })?;
        table.register(&entry.id, stance);
    }
    Ok(table)
}

/// Load archetype stances from a TOML file, on top of the built-in ones
pub fn load_archetypes(path: &Path) -> Result<ArchetypeTable, ConfigError> {
    let config: ArchetypesConfig = super::load_toml(path)?;
    build_table(config)
}

/// Load archetype stances from a TOML string, on top of the built-in ones
pub fn parse_archetypes(content: &str) -> Result<ArchetypeTable, ConfigError> {
    let config: ArchetypesConfig = super::parse_toml(content)?;
    build_table(config)
}
