//! Action resolution - one combatant acting on another
//!
//! Every function here is a transition `(state, action, rng) -> (new state, log entry)`:
//! inputs are borrowed, outputs are fresh copies.

use super::result::CombatLogEntry;
use crate::combatant::CombatantState;
use crate::config::{CombatConstants, TurnConstants};
use crate::damage::{
    finalize_damage, roll_base_damage, roll_crit, Action, ActionEffect, ActionKind, ActionProfile,
};
use crate::defense::{calculate_armour_reduction, calculate_resistance_mitigation, magic_resist, roll_dodge};
use crate::source::cheat_death_chance;
use crate::status::{apply_status, tick_statuses, ActiveStatus};
use crate::types::CombatantKind;
use crate::zone::{calc_block_reduction, resolve_hit_zone};
use rand::seq::SliceRandom;
use rand::Rng;

/// Updated combatants and the log entry for one action
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    pub actor: CombatantState,
    pub target: CombatantState,
    pub entry: CombatLogEntry,
}

/// Pick basic attack or a special ability for this turn
pub fn choose_action(actor: &CombatantState, turns: &TurnConstants, rng: &mut impl Rng) -> Action {
    let chance = match actor.kind {
        CombatantKind::Player => turns.player_ability_chance,
        CombatantKind::Npc => turns.npc_ability_chance,
    };

    if rng.gen::<f64>() < chance {
        if let Some(ability) = actor.available_abilities().choose(rng) {
            return Action::Special(*ability);
        }
    }
    Action::BasicAttack
}

/// Apply damage, letting the holder's origin cheat death on a lethal amount
///
/// Returns true when death was cheated; HP is then left at 1.
pub fn apply_damage(defender: &mut CombatantState, amount: u32, rng: &mut impl Rng) -> bool {
    if defender.is_alive() && amount >= defender.current_hp {
        let chance = cheat_death_chance(defender.origin);
        if chance > 0.0 && rng.gen::<f64>() < chance {
            defender.current_hp = 1;
            tracing::debug!(combatant = %defender.id, amount, "cheated death");
            return true;
        }
    }
    defender.take_damage(amount);
    false
}

/// Start-of-action work for the actor, then its action
///
/// The actor's statuses tick first. If a tick kills it the entry carries no
/// action and the target is returned untouched.
pub fn take_turn(
    actor: &CombatantState,
    target: &CombatantState,
    turn: u32,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> ActionOutcome {
    let mut actor = actor.clone();
    let ticks = tick_statuses(&mut actor.statuses, turn);

    let mut cheated = false;
    let mut healed = 0;
    for tick in &ticks {
        if !actor.is_alive() {
            break;
        }
        if tick.harmful {
            cheated |= apply_damage(&mut actor, tick.amount, rng);
        } else {
            healed += actor.heal(tick.amount);
        }
    }

    if !actor.is_alive() {
        let mut entry = CombatLogEntry::new(turn, &actor.id, &target.id);
        let causes: Vec<&str> = ticks.iter().filter(|t| t.harmful).map(|t| t.kind.name()).collect();
        entry.message = format!("{} succumbs to {}", actor.name, causes.join(" and "));
        entry.status_ticks = ticks;
        entry.actor_hp = 0;
        entry.target_hp = target.current_hp;
        return ActionOutcome {
            actor,
            target: target.clone(),
            entry,
        };
    }

    let action = choose_action(&actor, &constants.turns, rng);
    let mut outcome = resolve_action(&actor, target, action, turn, constants, rng);
    if cheated {
        outcome.entry.cheated_death = true;
        outcome.entry.message = format!(
            "{} cheated death against a lingering wound. {}",
            actor.name, outcome.entry.message
        );
    }
    if healed > 0 {
        outcome.entry.heal = Some(healed);
    }
    outcome.entry.status_ticks = ticks;
    outcome
}

/// Resolve one action of `actor` against `target`
pub fn resolve_action(
    actor: &CombatantState,
    target: &CombatantState,
    action: Action,
    turn: u32,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> ActionOutcome {
    let mut actor = actor.clone();
    let mut target = target.clone();
    let profile = action.profile(actor.class);

    let mut entry = match profile.kind {
        ActionKind::Support => resolve_support(&mut actor, &profile, turn, constants),
        ActionKind::Physical | ActionKind::Magic => {
            resolve_hit(&mut actor, &mut target, &profile, turn, constants, rng)
        }
    };

    entry.action = Some(action);
    entry.action_name = Some(profile.name.to_string());
    entry.actor_hp = actor.current_hp;
    entry.target_hp = if entry.target_id == actor.id {
        actor.current_hp
    } else {
        target.current_hp
    };

    tracing::trace!(
        turn,
        actor = %actor.id,
        action = profile.name,
        damage = ?entry.damage,
        zone = ?entry.body_zone,
        "action resolved"
    );

    ActionOutcome { actor, target, entry }
}

/// Self-targeted buff: never dodged, never mitigated
fn resolve_support(
    actor: &mut CombatantState,
    profile: &ActionProfile,
    turn: u32,
    constants: &CombatConstants,
) -> CombatLogEntry {
    let mut entry = CombatLogEntry::new(turn, &actor.id, &actor.id);
    entry.message = format!("{} uses {}", actor.name, profile.name);

    if let Some(ActionEffect::ApplyStatus(kind)) = profile.effect {
        let status = ActiveStatus::new(kind, actor.max_hp, actor.id.clone(), &constants.status)
            .applied_in(turn);
        apply_status(&mut actor.statuses, status);
        entry.status_applied = Some(kind);
        entry.message.push_str(&format!(", gaining {kind}"));
    }
    entry
}

/// Damaging action: dodge, zone, base damage, crit, mitigation, effects
fn resolve_hit(
    actor: &mut CombatantState,
    target: &mut CombatantState,
    profile: &ActionProfile,
    turn: u32,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> CombatLogEntry {
    let mut entry = CombatLogEntry::new(turn, &actor.id, &target.id);

    if roll_dodge(target.stats.agility, &constants.dodge, rng) {
        entry.dodge = true;
        entry.damage = Some(0);
        entry.message = format!("{} dodges {}'s {}", target.name, actor.name, profile.name);
        return entry;
    }

    // Magic carries no zone and is never positionally blocked
    let zone = match profile.kind {
        ActionKind::Physical => Some(resolve_hit_zone(&actor.stance, &constants.zones, rng)),
        _ => None,
    };
    let zone_multiplier = zone.map_or(1.0, |z| constants.zones.damage_multipliers[z]);

    let mut damage = roll_base_damage(
        &actor.stats,
        actor.level,
        profile,
        zone_multiplier,
        &constants.damage,
        rng,
    );

    if let Some(multiplier) = roll_crit(actor.stats.luck, profile.crit_bonus, &constants.crit, rng) {
        damage *= multiplier;
        entry.crit = true;
    }

    match zone {
        Some(zone) => {
            let block = calc_block_reduction(zone, &target.stance);
            damage *= 1.0 - block;
            damage = calculate_armour_reduction(target.zone_armor[zone], damage, &constants.armour);
            entry.body_zone = Some(zone);
            entry.block_reduction = Some(block);
            entry.blocked = block > 0.0;
        }
        None => {
            let resist = magic_resist(&target.stats, &constants.resist);
            damage = calculate_resistance_mitigation(damage, resist);
        }
    }

    let amount = finalize_damage(damage, constants.damage.minimum);
    entry.damage = Some(amount);
    entry.cheated_death = apply_damage(target, amount, rng);

    entry.message = match zone {
        Some(zone) => format!(
            "{} hits {} in the {} with {} for {} damage",
            actor.name, target.name, zone, profile.name, amount
        ),
        None => format!(
            "{} casts {} on {} for {} damage",
            actor.name, profile.name, target.name, amount
        ),
    };
    if entry.crit {
        entry.message.push_str(" (critical)");
    }
    if entry.blocked {
        let pct = entry.block_reduction.unwrap_or(0.0) * 100.0;
        entry.message.push_str(&format!(" ({pct:.0}% blocked)"));
    }

    if entry.cheated_death {
        entry.message.push_str(&format!(". {} cheated death", target.name));
    }

    if !target.is_alive() {
        entry.message.push_str(&format!(". {} falls", target.name));
        return entry;
    }

    if let Some(effect) = profile.effect {
        apply_effect(effect, actor, target, &mut entry, constants, rng);
    }
    entry
}

fn apply_effect(
    effect: ActionEffect,
    actor: &mut CombatantState,
    target: &mut CombatantState,
    entry: &mut CombatLogEntry,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) {
    match effect {
        ActionEffect::ApplyStatus(kind) if kind.is_harmful() => {
            if rng.gen::<f64>() < constants.status.resist_chance {
                entry.status_resisted = Some(kind);
                entry.message.push_str(&format!(". {} resists {}", target.name, kind));
            } else {
                let status = ActiveStatus::new(kind, target.max_hp, actor.id.clone(), &constants.status)
                    .applied_in(entry.turn);
                apply_status(&mut target.statuses, status);
                entry.status_applied = Some(kind);
                entry.message.push_str(&format!(". {} suffers {}", target.name, kind));
            }
        }
        ActionEffect::ApplyStatus(kind) => {
            let status = ActiveStatus::new(kind, actor.max_hp, actor.id.clone(), &constants.status)
                .applied_in(entry.turn);
            apply_status(&mut actor.statuses, status);
            entry.status_applied = Some(kind);
            entry.message.push_str(&format!(". {} gains {}", actor.name, kind));
        }
        ActionEffect::ArmorBreak => {
            let remaining = 1.0 - constants.status.armor_break_fraction;
            target.zone_armor = target.zone_armor.map(|armor| armor * remaining);
            target.armor *= remaining;
            entry.armor_broken = true;
            entry.message.push_str(&format!(". {}'s armour is broken", target.name));
        }
    }
}
