//! Batch simulation - many seeded fights between the same pair

use super::engine::{CombatEngine, CombatError};
use crate::combatant::CombatantState;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Aggregate over a batch of fights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub fights: u32,
    pub ids: [String; 2],
    pub wins: [u32; 2],
    pub draws: u32,
    pub avg_turns: f64,
    /// Average damage dealt per fight by each side
    pub avg_damage: [f64; 2],
    pub cheat_deaths: u32,
}

impl BatchReport {
    /// Share of fights won by a side (0 or 1)
    pub fn win_rate(&self, side: usize) -> f64 {
        if self.fights == 0 {
            0.0
        } else {
            f64::from(self.wins[side]) / f64::from(self.fights)
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "{} fights: {} won {} ({:.1}%), {} won {} ({:.1}%), {} draws, {:.1} turns avg, avg damage {:.0} / {:.0}, death cheated {}x",
            self.fights,
            self.ids[0],
            self.wins[0],
            self.win_rate(0) * 100.0,
            self.ids[1],
            self.wins[1],
            self.win_rate(1) * 100.0,
            self.draws,
            self.avg_turns,
            self.avg_damage[0],
            self.avg_damage[1],
            self.cheat_deaths,
        )
    }
}

/// Run `fights` independent fights and aggregate the outcomes
pub fn simulate(
    engine: &CombatEngine,
    a: &CombatantState,
    b: &CombatantState,
    fights: u32,
    rng: &mut impl Rng,
) -> Result<BatchReport, CombatError> {
    let mut report = BatchReport {
        fights,
        ids: [a.id.clone(), b.id.clone()],
        wins: [0, 0],
        draws: 0,
        avg_turns: 0.0,
        avg_damage: [0.0, 0.0],
        cheat_deaths: 0,
    };

    let mut total_turns = 0u64;
    let mut total_damage = [0u64; 2];

    for _ in 0..fights {
        let result = engine.fight(a, b, rng)?;
        total_turns += u64::from(result.turns);
        total_damage[0] += result.damage_dealt_by(&a.id);
        total_damage[1] += result.damage_dealt_by(&b.id);
        report.cheat_deaths += result.cheat_death_count() as u32;

        match result.winner_id.as_deref() {
            Some(id) if id == a.id => report.wins[0] += 1,
            Some(_) => report.wins[1] += 1,
            None => report.draws += 1,
        }
    }

    if fights > 0 {
        let n = f64::from(fights);
        report.avg_turns = total_turns as f64 / n;
        report.avg_damage = [total_damage[0] as f64 / n, total_damage[1] as f64 / n];
    }

    Ok(report)
}
