//! Status application and tick processing

use super::{ActiveStatus, StatusKind};
use serde::{Deserialize, Serialize};

/// One status tick, recorded as a sub-entry of a log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTick {
    pub kind: StatusKind,
    /// Damage for harmful statuses, healing otherwise
    pub amount: u32,
    pub harmful: bool,
    pub remaining_turns: u32,
    pub expired: bool,
    pub source_id: String,
}

/// Apply a new status, respecting stacking rules
///
/// Only the strongest instance of a kind is kept. Re-applying refreshes the
/// duration; a weaker application keeps the current magnitude.
pub fn apply_status(statuses: &mut Vec<ActiveStatus>, new_status: ActiveStatus) {
    if let Some(existing) = statuses.iter_mut().find(|s| s.kind == new_status.kind) {
        if new_status.magnitude >= existing.magnitude {
            existing.refresh(new_status.remaining_turns, new_status.magnitude, &new_status.source_id);
        } else {
            existing.remaining_turns = existing.remaining_turns.max(new_status.remaining_turns);
        }
    } else {
        statuses.push(new_status);
    }
}

/// Tick every status due in `turn` once
///
/// Returns one tick per status in application order and drops the statuses
/// that ran out. Statuses applied during `turn` itself wait for the next
/// turn. The caller applies the amounts to the holder.
pub fn tick_statuses(statuses: &mut Vec<ActiveStatus>, turn: u32) -> Vec<StatusTick> {
    let ticks = statuses
        .iter_mut()
        .filter(|status| status.ticks_in(turn))
        .map(|status| {
            status.remaining_turns = status.remaining_turns.saturating_sub(1);
            StatusTick {
                kind: status.kind,
                amount: status.magnitude,
                harmful: status.kind.is_harmful(),
                remaining_turns: status.remaining_turns,
                expired: !status.is_active(),
                source_id: status.source_id.clone(),
            }
        })
        .collect();

    statuses.retain(|s| s.is_active());
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(kind: StatusKind, turns: u32, magnitude: u32) -> ActiveStatus {
        ActiveStatus {
            kind,
            remaining_turns: turns,
            magnitude,
            source_id: "src".to_string(),
            applied_turn: 0,
        }
    }

    #[test]
    fn test_status_expires_after_duration() {
        let mut statuses = vec![status(StatusKind::Bleed, 3, 5)];
        let mut total = 0;
        for _ in 0..3 {
            total += tick_statuses(&mut statuses, 1).iter().map(|t| t.amount).sum::<u32>();
        }
        assert_eq!(total, 15);
        assert!(statuses.is_empty());
        assert!(tick_statuses(&mut statuses, 1).is_empty());
    }

    #[test]
    fn test_last_tick_is_marked_expired() {
        let mut statuses = vec![status(StatusKind::Burn, 1, 4)];
        let ticks = tick_statuses(&mut statuses, 1);
        assert_eq!(ticks.len(), 1);
        assert!(ticks[0].expired);
        assert!(ticks[0].harmful);
    }

    #[test]
    fn test_strongest_only_refresh() {
        let mut statuses = vec![status(StatusKind::Poison, 1, 8)];

        // Weaker application keeps magnitude but extends duration
        apply_status(&mut statuses, status(StatusKind::Poison, 4, 3));
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].magnitude, 8);
        assert_eq!(statuses[0].remaining_turns, 4);

        // Stronger application replaces
        apply_status(&mut statuses, status(StatusKind::Poison, 2, 12));
        assert_eq!(statuses[0].magnitude, 12);
        assert_eq!(statuses[0].remaining_turns, 2);
    }

    #[test]
    fn test_different_kinds_coexist() {
        let mut statuses = Vec::new();
        apply_status(&mut statuses, status(StatusKind::Bleed, 3, 5));
        apply_status(&mut statuses, status(StatusKind::Regeneration, 3, 5));
        let ticks = tick_statuses(&mut statuses, 1);
        assert_eq!(ticks.len(), 2);
        assert!(ticks[0].harmful);
        assert!(!ticks[1].harmful);
    }

    #[test]
    fn test_fresh_status_waits_a_turn() {
        let mut statuses = vec![status(StatusKind::Bleed, 2, 5)];
        apply_status(&mut statuses, status(StatusKind::Poison, 2, 4).applied_in(3));

        let ticks = tick_statuses(&mut statuses, 3);
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].kind, StatusKind::Bleed);
        assert_eq!(statuses[1].remaining_turns, 2);

        let ticks = tick_statuses(&mut statuses, 4);
        assert_eq!(ticks.len(), 2);
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].kind, StatusKind::Poison);
    }
}
