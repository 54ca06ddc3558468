//! Hit-zone resolution and block reduction

use super::{BodyZone, CombatStance, BLOCK_REDUCTION_PER_POINT, MAX_BLOCK_POINTS};
use crate::config::ZoneConstants;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Pick the zone a physical attack lands on, from the attacker's stance
///
/// A single-zone stance always hits that zone. Otherwise a focus roll below
/// `focus_chance` hits the primary zone, and anything else is a weighted draw
/// restricted to the declared attack zones.
pub fn resolve_hit_zone(stance: &CombatStance, zones: &ZoneConstants, rng: &mut impl Rng) -> BodyZone {
    let attack_zones = stance.attack_zones();
    let primary = stance.primary_zone();
    if attack_zones.len() == 1 {
        return primary;
    }

    if rng.gen::<f64>() < zones.focus_chance {
        return primary;
    }

    let weights = attack_zones.iter().map(|zone| zones.hit_weights[*zone].max(0.0));
    match WeightedIndex::new(weights) {
        Ok(dist) => attack_zones[dist.sample(rng)],
        // All weights zero
        Err(_) => primary,
    }
}

/// Fraction of damage to `zone` absorbed by the defender's block points
///
/// 0.25 per point, so 0 / 0.25 / 0.50 / 0.75.
pub fn calc_block_reduction(zone: BodyZone, defender_stance: &CombatStance) -> f64 {
    let points = defender_stance.block_points(zone).min(MAX_BLOCK_POINTS);
    points as f64 * BLOCK_REDUCTION_PER_POINT
}
