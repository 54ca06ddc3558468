//! CombatEngine - the turn loop

use super::resolution::take_turn;
use super::result::{CombatResult, FightState};
use crate::combatant::{build_combatant_state_with, CombatantInput, CombatantState};
use crate::config::{CombatConstants, TurnConstants};
use crate::zone::StanceError;
use rand::Rng;
use std::cmp::Ordering;
use thiserror::Error;

/// A fight that cannot start
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombatError {
    #[error("invalid stance: {0}")]
    InvalidStance(#[from] StanceError),
    #[error("both combatants have the id '{0}'")]
    DuplicateId(String),
    #[error("combatant '{0}' has no hit points left")]
    AlreadyDefeated(String),
}

/// Runs fights under one set of constants
#[derive(Debug, Clone, Default)]
pub struct CombatEngine {
    constants: CombatConstants,
}

impl CombatEngine {
    pub fn new(constants: CombatConstants) -> Self {
        CombatEngine { constants }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn constants(&self) -> &CombatConstants {
        &self.constants
    }

    /// Build a combatant with this engine's health constants
    pub fn build(&self, input: &CombatantInput) -> Result<CombatantState, CombatError> {
        Ok(build_combatant_state_with(input, &self.constants.health)?)
    }

    /// Build both sides from raw input, then fight
    pub fn fight_inputs(
        &self,
        a: &CombatantInput,
        b: &CombatantInput,
        rng: &mut impl Rng,
    ) -> Result<CombatResult, CombatError> {
        let a = self.build(a)?;
        let b = self.build(b)?;
        self.fight(&a, &b, rng)
    }

    /// Run a fight to completion
    ///
    /// Fails only on preconditions checked before turn 1. Once the loop
    /// starts it always ends in a victory or a draw within `max_turns`.
    pub fn fight(
        &self,
        a: &CombatantState,
        b: &CombatantState,
        rng: &mut impl Rng,
    ) -> Result<CombatResult, CombatError> {
        if a.id == b.id {
            return Err(CombatError::DuplicateId(a.id.clone()));
        }
        for combatant in [a, b] {
            if !combatant.is_alive() {
                return Err(CombatError::AlreadyDefeated(combatant.id.clone()));
            }
        }

        tracing::debug!(a = %a.id, b = %b.id, "fight started");

        let snapshots = [a.snapshot(), b.snapshot()];
        let mut fighters = [a.clone(), b.clone()];
        let mut log = Vec::new();
        let mut state = FightState::InProgress;
        let mut turns = 0;

        while !state.is_terminal() && turns < self.constants.turns.max_turns {
            turns += 1;

            for actor in turn_order(&fighters, &self.constants.turns, rng) {
                let target = 1 - actor;
                let outcome = take_turn(&fighters[actor], &fighters[target], turns, &self.constants, rng);
                fighters[actor] = outcome.actor;
                fighters[target] = outcome.target;
                log.push(outcome.entry);

                if let Some(winner) = survivor(&fighters) {
                    state = FightState::Victory {
                        winner_id: fighters[winner].id.clone(),
                    };
                    break;
                }
            }
        }

        if !state.is_terminal() {
            state = FightState::Draw;
        }

        let (winner_id, loser_id) = match &state {
            FightState::Victory { winner_id } => {
                let loser = fighters
                    .iter()
                    .find(|f| &f.id != winner_id)
                    .map(|f| f.id.clone());
                (Some(winner_id.clone()), loser)
            }
            _ => (None, None),
        };

        tracing::debug!(
            winner = ?winner_id,
            turns,
            entries = log.len(),
            "fight finished"
        );

        Ok(CombatResult {
            draw: state == FightState::Draw,
            winner_id,
            loser_id,
            turns,
            log,
            snapshots,
        })
    }
}

/// Fight with default constants
pub fn run_fight(
    a: &CombatantState,
    b: &CombatantState,
    rng: &mut impl Rng,
) -> Result<CombatResult, CombatError> {
    CombatEngine::with_defaults().fight(a, b, rng)
}

/// Index of the only combatant still standing, if exactly one is
fn survivor(fighters: &[CombatantState; 2]) -> Option<usize> {
    match (fighters[0].is_alive(), fighters[1].is_alive()) {
        (true, false) => Some(0),
        (false, true) => Some(1),
        _ => None,
    }
}

/// Roll initiative for both sides; higher acts first, ties go to the smaller id
fn turn_order(fighters: &[CombatantState; 2], turns: &TurnConstants, rng: &mut impl Rng) -> [usize; 2] {
    let mut roll = |f: &CombatantState| f.stats.agility.saturating_add(rng.gen_range(0..=turns.initiative_spread));
    let first = roll(&fighters[0]);
    let second = roll(&fighters[1]);

    let order = second.cmp(&first).then_with(|| fighters[0].id.cmp(&fighters[1].id));
    match order {
        Ordering::Greater => [1, 0],
        _ => [0, 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::{Ability, BossAbility};
    use crate::status::StatusKind;
    use crate::types::{Attribute, BaseStats, CombatClass, CombatantKind};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fighter(id: &str, class: CombatClass) -> CombatantState {
        build_combatant_state_with(&CombatantInput::new(id, id, class), &Default::default()).unwrap()
    }

    #[test]
    fn test_fight_terminates_with_consistent_verdict() {
        let engine = CombatEngine::with_defaults();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let a = fighter("a", CombatClass::Warrior);
        let b = fighter("b", CombatClass::Mage);

        for _ in 0..50 {
            let result = engine.fight(&a, &b, &mut rng).unwrap();
            assert!(result.turns <= engine.constants().turns.max_turns);
            if result.draw {
                assert!(result.winner_id.is_none() && result.loser_id.is_none());
            } else {
                assert!(result.winner_id.is_some() && result.loser_id.is_some());
                assert_ne!(result.winner_id, result.loser_id);
                let last = result.log.last().unwrap();
                assert!(last.actor_hp == 0 || last.target_hp == 0);
            }
        }
    }

    #[test]
    fn test_same_seed_same_fight() {
        let engine = CombatEngine::with_defaults();
        let a = fighter("a", CombatClass::Rogue);
        let b = fighter("b", CombatClass::Cleric);

        let first = engine.fight(&a, &b, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        let second = engine.fight(&a, &b, &mut ChaCha8Rng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_turn_cap_draw() {
        let mut constants = CombatConstants::default();
        constants.turns.max_turns = 3;
        let engine = CombatEngine::new(constants);
        let tank = |id: &str| {
            engine
                .build(
                    &CombatantInput::new(id, id, CombatClass::Warrior)
                        .with_stats(BaseStats::splat(10).with(Attribute::Vitality, 1000)),
                )
                .unwrap()
        };

        let result = engine.fight(&tank("a"), &tank("b"), &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        assert!(result.draw);
        assert_eq!(result.turns, 3);
        assert_eq!(result.verdict(), FightState::Draw);
        assert_eq!(result.log.len(), 6);
    }

    #[test]
    fn test_preconditions() {
        let engine = CombatEngine::with_defaults();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let a = fighter("a", CombatClass::Warrior);
        let mut dead = fighter("b", CombatClass::Warrior);
        dead.current_hp = 0;

        assert_eq!(
            engine.fight(&a, &a, &mut rng),
            Err(CombatError::DuplicateId("a".to_string()))
        );
        assert_eq!(
            engine.fight(&a, &dead, &mut rng),
            Err(CombatError::AlreadyDefeated("b".to_string()))
        );

        let bad = CombatantInput::new("c", "c", CombatClass::Warrior)
            .with_stance(crate::zone::RawStance::new(Vec::<String>::new(), Vec::new()));
        assert!(matches!(
            engine.fight_inputs(&bad, &CombatantInput::new("d", "d", CombatClass::Mage), &mut rng),
            Err(CombatError::InvalidStance(StanceError::AttackZoneCount(0)))
        ));
    }

    #[test]
    fn test_agility_tie_breaks_by_id() {
        let turns = TurnConstants {
            initiative_spread: 0,
            ..TurnConstants::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let fighters = [fighter("zed", CombatClass::Rogue), fighter("amy", CombatClass::Rogue)];
        assert_eq!(turn_order(&fighters, &turns, &mut rng), [1, 0]);

        let mut fast = fighters.clone();
        fast[0].stats.agility = 50;
        assert_eq!(turn_order(&fast, &turns, &mut rng), [0, 1]);
    }

    #[test]
    fn test_result_helpers() {
        let engine = CombatEngine::with_defaults();
        let a = fighter("a", CombatClass::Warrior);
        let b = fighter("b", CombatClass::Warrior);
        let result = engine.fight(&a, &b, &mut ChaCha8Rng::seed_from_u64(11)).unwrap();

        let direct: u64 = result
            .log
            .iter()
            .filter(|e| e.actor_id == "a")
            .map(|e| u64::from(e.damage.unwrap_or(0)))
            .sum();
        assert!(result.damage_dealt_by("a") >= direct);
        assert!(result.snapshot("b").is_some());
        assert!(result.summary().contains("turns"));

        let json = result.to_json().unwrap();
        let back: CombatResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.turns, result.turns);
        assert_eq!(back.log.len(), result.log.len());
    }

    #[test]
    fn test_status_first_ticks_the_turn_after_it_lands() {
        let mut constants = CombatConstants::default();
        constants.turns.max_turns = 3;
        constants.turns.initiative_spread = 0;
        constants.turns.npc_ability_chance = 1.0;
        constants.turns.player_ability_chance = 0.0;
        constants.status.resist_chance = 0.0;
        constants.dodge.base_chance = 0.0;
        constants.dodge.per_agility = 0.0;
        let engine = CombatEngine::new(constants);

        let tough = BaseStats::splat(10).with(Attribute::Vitality, 1000);
        let gorer = engine
            .build(
                &CombatantInput::new("a", "Boar", CombatClass::Boss)
                    .with_kind(CombatantKind::Npc)
                    .with_stats(tough.with(Attribute::Agility, 50))
                    .with_abilities(vec![Ability::Boss(BossAbility::Gore)]),
            )
            .unwrap();
        let victim = engine
            .build(&CombatantInput::new("b", "Hunter", CombatClass::Warrior).with_stats(tough))
            .unwrap();

        let result = engine.fight(&gorer, &victim, &mut ChaCha8Rng::seed_from_u64(21)).unwrap();
        let log = &result.log;
        assert_eq!((log[0].turn, log[0].actor_id.as_str()), (1, "a"));
        assert_eq!(log[0].status_applied, Some(StatusKind::Bleed));
        assert_eq!((log[1].turn, log[1].actor_id.as_str()), (1, "b"));
        assert!(log[1].status_ticks.is_empty());
        assert_eq!((log[3].turn, log[3].actor_id.as_str()), (2, "b"));
        assert_eq!(log[3].status_ticks.len(), 1);
        assert_eq!(log[3].status_ticks[0].kind, StatusKind::Bleed);
        // Re-applied in turn 2, still ticks in turn 3
        assert_eq!(log[5].status_ticks.len(), 1);
    }
}
