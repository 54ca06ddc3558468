//! CombatResult - Outcome and log of a fight

use crate::combatant::CombatantSnapshot;
use crate::damage::Action;
use crate::status::{StatusKind, StatusTick};
use crate::zone::BodyZone;
use serde::{Deserialize, Serialize};

/// State of the fight state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FightState {
    InProgress,
    Victory { winner_id: String },
    Draw,
}

impl FightState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FightState::InProgress)
    }
}

/// One resolved action (or a lethal status tick)
///
/// Carries enough detail for a replay layer to render the fight without
/// re-running it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatLogEntry {
    pub turn: u32,
    pub actor_id: String,
    pub target_id: String,
    /// `None` when the actor died to a status tick before acting
    pub action: Option<Action>,
    pub action_name: Option<String>,
    pub damage: Option<u32>,
    /// Hit points the actor's regeneration restored before it acted
    pub heal: Option<u32>,
    /// Struck zone, physical hits only
    pub body_zone: Option<BodyZone>,
    /// Block fraction applied to the struck zone
    pub block_reduction: Option<f64>,
    pub blocked: bool,
    pub crit: bool,
    pub dodge: bool,
    pub cheated_death: bool,
    pub status_applied: Option<StatusKind>,
    pub status_resisted: Option<StatusKind>,
    pub armor_broken: bool,
    /// Ticks of the actor's statuses at the start of this action
    pub status_ticks: Vec<StatusTick>,
    pub message: String,
    pub actor_hp: u32,
    pub target_hp: u32,
}

impl CombatLogEntry {
    pub fn new(turn: u32, actor_id: &str, target_id: &str) -> Self {
        CombatLogEntry {
            turn,
            actor_id: actor_id.to_string(),
            target_id: target_id.to_string(),
            action: None,
            action_name: None,
            damage: None,
            heal: None,
            body_zone: None,
            block_reduction: None,
            blocked: false,
            crit: false,
            dodge: false,
            cheated_death: false,
            status_applied: None,
            status_resisted: None,
            armor_broken: false,
            status_ticks: Vec::new(),
            message: String::new(),
            actor_hp: 0,
            target_hp: 0,
        }
    }
}

/// Complete output of one fight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatResult {
    pub winner_id: Option<String>,
    pub loser_id: Option<String>,
    pub draw: bool,
    pub turns: u32,
    pub log: Vec<CombatLogEntry>,
    /// Both combatants as they were before turn 1
    pub snapshots: [CombatantSnapshot; 2],
}

impl CombatResult {
    pub fn verdict(&self) -> FightState {
        match &self.winner_id {
            Some(winner_id) => FightState::Victory {
                winner_id: winner_id.clone(),
            },
            None if self.draw => FightState::Draw,
            None => FightState::InProgress,
        }
    }

    /// Hit damage plus harmful status ticks credited to a combatant
    pub fn damage_dealt_by(&self, id: &str) -> u64 {
        self.log
            .iter()
            .map(|entry| {
                let direct = if entry.actor_id == id {
                    entry.damage.unwrap_or(0)
                } else {
                    0
                };
                let ticks: u32 = entry
                    .status_ticks
                    .iter()
                    .filter(|t| t.harmful && t.source_id == id)
                    .map(|t| t.amount)
                    .sum();
                u64::from(direct) + u64::from(ticks)
            })
            .sum()
    }

    /// Hit points a combatant restored to itself
    pub fn healing_done_by(&self, id: &str) -> u64 {
        self.log
            .iter()
            .filter(|entry| entry.actor_id == id)
            .filter_map(|entry| entry.heal)
            .map(u64::from)
            .sum()
    }

    /// Number of times either side cheated death
    pub fn cheat_death_count(&self) -> usize {
        self.log.iter().filter(|e| e.cheated_death).count()
    }

    pub fn snapshot(&self, id: &str) -> Option<&CombatantSnapshot> {
        self.snapshots.iter().find(|s| s.id == id)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let name_of = |id: &str| {
            self.snapshot(id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| id.to_string())
        };

        let mut parts = Vec::new();
        match (&self.winner_id, &self.loser_id) {
            (Some(winner), Some(loser)) => {
                parts.push(format!("{} defeats {}", name_of(winner), name_of(loser)))
            }
            _ => parts.push("Draw".to_string()),
        }
        parts.push(format!("{} turns", self.turns));

        for snapshot in &self.snapshots {
            parts.push(format!(
                "{} dealt {}",
                snapshot.name,
                self.damage_dealt_by(&snapshot.id)
            ));
        }

        let cheated = self.cheat_death_count();
        if cheated > 0 {
            parts.push(format!("death cheated {cheated}x"));
        }

        parts.join(", ")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
