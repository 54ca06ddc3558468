//! Damage calculation - raw hit damage, criticals and rounding

use super::{ActionKind, ActionProfile};
use crate::config::{CritConstants, DamageConstants};
use crate::types::BaseStats;
use rand::Rng;

/// Attribute an action scales from
pub fn offensive_stat(stats: &BaseStats, kind: ActionKind) -> u32 {
    match kind {
        ActionKind::Physical => stats.strength,
        ActionKind::Magic => stats.intelligence,
        ActionKind::Support => stats.wisdom,
    }
}

/// Roll pre-mitigation damage for an action
///
/// `(base + stat * stat_scaling + level * level_scaling) * multiplier * zone_multiplier * variance`
/// where variance is uniform in `1 ± constants.variance`. Magic actions pass a
/// zone multiplier of 1.0.
pub fn roll_base_damage(
    stats: &BaseStats,
    level: u32,
    profile: &ActionProfile,
    zone_multiplier: f64,
    constants: &DamageConstants,
    rng: &mut impl Rng,
) -> f64 {
    let stat = f64::from(offensive_stat(stats, profile.kind));
    let raw = constants.base + stat * constants.stat_scaling + f64::from(level) * constants.level_scaling;

    let variance = if constants.variance > 0.0 {
        rng.gen_range((1.0 - constants.variance)..=(1.0 + constants.variance))
    } else {
        1.0
    };

    (raw * profile.multiplier * zone_multiplier * variance).max(0.0)
}

/// Crit chance: base + luck bonus + action bonus, capped
pub fn crit_chance(luck: u32, action_bonus: f64, constants: &CritConstants) -> f64 {
    let chance = constants.base_chance + f64::from(luck) * constants.per_luck + action_bonus;
    chance.clamp(0.0, constants.max_chance)
}

/// Crit damage multiplier, between 1.0 and `max_multiplier`
pub fn crit_multiplier(luck: u32, constants: &CritConstants) -> f64 {
    let mult = constants.base_multiplier + f64::from(luck) * constants.multiplier_per_luck;
    mult.clamp(1.0, constants.max_multiplier.max(1.0))
}

/// Roll for a critical strike, returning the multiplier on success
pub fn roll_crit(luck: u32, action_bonus: f64, constants: &CritConstants, rng: &mut impl Rng) -> Option<f64> {
    if rng.gen::<f64>() < crit_chance(luck, action_bonus, constants) {
        Some(crit_multiplier(luck, constants))
    } else {
        None
    }
}

/// Round mitigated damage to whole hit points, never below `minimum`
pub fn finalize_damage(damage: f64, minimum: u32) -> u32 {
    let rounded = damage.round().max(0.0) as u32;
    rounded.max(minimum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::{Action, ActionKind};
    use crate::types::{Attribute, CombatClass};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn no_variance() -> DamageConstants {
        DamageConstants {
            variance: 0.0,
            ..DamageConstants::default()
        }
    }

    #[test]
    fn test_base_damage_formula() {
        let stats = BaseStats::splat(10).with(Attribute::Strength, 20);
        let profile = Action::BasicAttack.profile(CombatClass::Warrior);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // 5 + 20 * 1.5 + 3 * 1.0 = 38
        let damage = roll_base_damage(&stats, 3, &profile, 1.0, &no_variance(), &mut rng);
        assert!((damage - 38.0).abs() < 1e-9);

        let head = roll_base_damage(&stats, 3, &profile, 1.3, &no_variance(), &mut rng);
        assert!((head - 38.0 * 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_magic_scales_from_intelligence() {
        let stats = BaseStats::splat(0).with(Attribute::Intelligence, 10);
        assert_eq!(offensive_stat(&stats, ActionKind::Magic), 10);
        assert_eq!(offensive_stat(&stats, ActionKind::Physical), 0);
    }

    #[test]
    fn test_variance_stays_in_bounds() {
        let stats = BaseStats::splat(10);
        let profile = Action::BasicAttack.profile(CombatClass::Rogue);
        let constants = DamageConstants::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        // 5 + 15 + 1 = 21
        for _ in 0..500 {
            let damage = roll_base_damage(&stats, 1, &profile, 1.0, &constants, &mut rng);
            assert!((21.0 * 0.9 - 1e-9..=21.0 * 1.1 + 1e-9).contains(&damage));
        }
    }

    #[test]
    fn test_crit_chance_cap() {
        let constants = CritConstants::default();
        assert!((crit_chance(0, 0.0, &constants) - 0.05).abs() < 1e-9);
        assert!((crit_chance(50, 0.15, &constants) - 0.30).abs() < 1e-9);
        assert!((crit_chance(1000, 0.0, &constants) - 0.40).abs() < 1e-9);
    }

    #[test]
    fn test_crit_multiplier_bounds() {
        let constants = CritConstants::default();
        assert!((crit_multiplier(0, &constants) - 1.5).abs() < 1e-9);
        assert!((crit_multiplier(40, &constants) - 1.7).abs() < 1e-9);
        assert!((crit_multiplier(500, &constants) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_finalize_damage_minimum() {
        assert_eq!(finalize_damage(0.2, 1), 1);
        assert_eq!(finalize_damage(12.5, 1), 13);
        assert_eq!(finalize_damage(12.4, 1), 12);
    }
}
