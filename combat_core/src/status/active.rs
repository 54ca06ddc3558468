//! Active status instance

use super::StatusKind;
use crate::config::StatusConstants;
use serde::{Deserialize, Serialize};

/// A status currently affecting a combatant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStatus {
    pub kind: StatusKind,
    /// Ticks left before expiry
    pub remaining_turns: u32,
    /// Damage or healing per tick
    pub magnitude: u32,
    /// Combatant that applied this status
    pub source_id: String,
    /// Turn the status was applied in; it first ticks the turn after
    #[serde(default)]
    pub applied_turn: u32,
}

impl ActiveStatus {
    /// Create a status sized to the holder's max HP
    ///
    /// Magnitude is `floor(max_hp * percent)`, at least 1.
    pub fn new(kind: StatusKind, holder_max_hp: u32, source_id: impl Into<String>, constants: &StatusConstants) -> Self {
        let tuning = kind.tuning(constants);
        let magnitude = (f64::from(holder_max_hp) * tuning.percent).floor() as u32;
        ActiveStatus {
            kind,
            remaining_turns: tuning.duration,
            magnitude: magnitude.max(1),
            source_id: source_id.into(),
            applied_turn: 0,
        }
    }

    /// Stamp the turn this status was applied in
    pub fn applied_in(mut self, turn: u32) -> Self {
        self.applied_turn = turn;
        self
    }

    /// Whether the status ticks during `turn`
    pub fn ticks_in(&self, turn: u32) -> bool {
        self.is_active() && turn > self.applied_turn
    }

    pub fn is_active(&self) -> bool {
        self.remaining_turns > 0
    }

    /// Refresh with a new duration and magnitude
    ///
    /// The original application turn is kept, so a refreshed status keeps ticking.
    pub fn refresh(&mut self, duration: u32, magnitude: u32, source_id: &str) {
        self.remaining_turns = duration;
        self.magnitude = magnitude;
        self.source_id = source_id.to_string();
    }
}
