//! End-to-end fight scenarios

use combat_core::prelude::*;
use combat_core::zone::{generate_boss_stance, validate_stance, BossArchetype};
use combat_core::ActionKind;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Long fights, basic attacks only
fn sparring_engine() -> CombatEngine {
    let mut constants = CombatConstants::default();
    constants.turns.player_ability_chance = 0.0;
    constants.turns.npc_ability_chance = 0.0;
    CombatEngine::new(constants)
}

fn tank(id: &str, attack: &str, block_zone: &str) -> CombatantInput {
    CombatantInput::new(id, id, CombatClass::Warrior)
        .with_stats(BaseStats::splat(10).with(Attribute::Vitality, 1000))
        .with_stance(RawStance::new([attack], [(block_zone, 3)]))
}

#[test]
fn head_focus_outdamages_leg_focus() {
    let engine = sparring_engine();
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    // Head attacker against a defender that only guards the legs
    let head_attacker = engine.build(&tank("head", "head", "torso")).unwrap();
    let legs_guard = engine.build(&tank("legs_guard", "torso", "legs")).unwrap();

    // Legs attacker against a defender with all three points on the head
    let legs_attacker = engine.build(&tank("legs", "legs", "torso")).unwrap();
    let head_guard = engine.build(&tank("head_guard", "torso", "head")).unwrap();

    let mut head_total = 0u64;
    let mut legs_total = 0u64;
    for _ in 0..30 {
        let result = engine.fight(&head_attacker, &legs_guard, &mut rng).unwrap();
        head_total += result.damage_dealt_by("head");
        assert!(result
            .log
            .iter()
            .filter(|e| e.actor_id == "head" && !e.dodge)
            .all(|e| e.body_zone == Some(BodyZone::Head) && !e.blocked));

        let result = engine.fight(&legs_attacker, &head_guard, &mut rng).unwrap();
        legs_total += result.damage_dealt_by("legs");
    }

    assert!(head_total > legs_total, "head {head_total} vs legs {legs_total}");
}

#[test]
fn magic_is_never_zoned_or_blocked() {
    let mut constants = CombatConstants::default();
    constants.turns.player_ability_chance = 0.5;
    let engine = CombatEngine::new(constants);
    let mut rng = ChaCha8Rng::seed_from_u64(77);

    let mage = engine
        .build(&CombatantInput::new("mage", "Mage", CombatClass::Mage))
        .unwrap();
    let wall = engine
        .build(
            &CombatantInput::new("wall", "Wall", CombatClass::Warrior)
                .with_stance(RawStance::new(["torso"], [("torso", 3)])),
        )
        .unwrap();

    let mut magic_entries = 0;
    for _ in 0..50 {
        let result = engine.fight(&mage, &wall, &mut rng).unwrap();
        for entry in result.log.iter().filter(|e| e.actor_id == "mage" && e.action.is_some()) {
            let kind = entry
                .action
                .map(|a| a.profile(CombatClass::Mage).kind)
                .unwrap_or(ActionKind::Magic);
            assert_eq!(kind, ActionKind::Magic);
            assert_eq!(entry.body_zone, None);
            assert!(!entry.blocked);
            magic_entries += 1;
        }
    }
    assert!(magic_entries > 0);
}

#[test]
fn undead_cheats_death_eventually() {
    let engine = sparring_engine();
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let attacker = engine
        .build(&CombatantInput::new("attacker", "Slayer", CombatClass::Warrior))
        .unwrap();
    let mut undead = engine
        .build(&CombatantInput::new("undead", "Lich", CombatClass::Warrior).with_origin("undead"))
        .unwrap();
    undead.current_hp = 1;

    let mut cheated = 0;
    for _ in 0..200 {
        let result = engine.fight(&attacker, &undead, &mut rng).unwrap();
        cheated += result
            .log
            .iter()
            .filter(|e| e.message.contains("cheated death"))
            .count();
    }
    assert!(cheated > 0);
}

#[test]
fn mortals_never_cheat_death() {
    let engine = sparring_engine();
    let mut rng = ChaCha8Rng::seed_from_u64(6);

    let attacker = engine
        .build(&CombatantInput::new("attacker", "Slayer", CombatClass::Warrior))
        .unwrap();
    let mut human = engine
        .build(&CombatantInput::new("human", "Squire", CombatClass::Warrior).with_origin("human"))
        .unwrap();
    human.current_hp = 1;

    for _ in 0..200 {
        let result = engine.fight(&attacker, &human, &mut rng).unwrap();
        assert_eq!(result.cheat_death_count(), 0);
        assert!(result.log.iter().all(|e| !e.message.contains("cheated death")));
    }
}

#[test]
fn every_fight_terminates() {
    let engine = CombatEngine::with_defaults();
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let classes = [
        CombatClass::Warrior,
        CombatClass::Rogue,
        CombatClass::Mage,
        CombatClass::Cleric,
        CombatClass::Boss,
    ];

    for (i, a_class) in classes.iter().enumerate() {
        for b_class in &classes[i..] {
            let a = engine
                .build(&CombatantInput::new("a", "A", *a_class).with_origin("orc"))
                .unwrap();
            let mut b = engine
                .build(
                    &CombatantInput::new("b", "B", *b_class)
                        .with_kind(CombatantKind::Npc)
                        .with_origin("undead"),
                )
                .unwrap();
            b.stance = generate_boss_stance(Some("duelist"), &mut rng);

            for _ in 0..10 {
                let result = engine.fight(&a, &b, &mut rng).unwrap();
                assert!(result.turns <= engine.constants().turns.max_turns);
                assert!(!result.log.is_empty());
                match (&result.winner_id, &result.loser_id) {
                    (Some(w), Some(l)) => {
                        assert!(!result.draw);
                        assert_ne!(w, l);
                    }
                    (None, None) => assert!(result.draw),
                    other => panic!("inconsistent verdict: {other:?}"),
                }
                for entry in &result.log {
                    assert!(entry.turn >= 1 && entry.turn <= result.turns);
                    if let Some(zone) = entry.body_zone {
                        let attacker = result.snapshot(&entry.actor_id).unwrap();
                        assert!(attacker.stance.attack_zones().contains(&zone));
                    }
                }
            }
        }
    }
}

#[test]
fn boss_archetypes_are_valid_stances() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    for archetype in BossArchetype::all() {
        let stance = generate_boss_stance(Some(archetype.id()), &mut rng);
        assert_eq!(validate_stance(Some(&RawStance::from(stance))), Ok(()));
    }
}

#[test]
fn gear_flows_into_the_fight() {
    let engine = sparring_engine();
    let mut rng = ChaCha8Rng::seed_from_u64(12);

    let knight = engine
        .build(
            &CombatantInput::new("knight", "Knight", CombatClass::Warrior).with_equipment(vec![
                EquippedItem::new(EquipmentSlot::Helmet, "Great Helm").with_stat("armor", 40.0),
                EquippedItem::new(EquipmentSlot::Chest, "Hauberk").with_stat("armor", 60.0),
                EquippedItem::new(EquipmentSlot::Weapon, "Longsword").with_stat("strength", 6.0),
            ]),
        )
        .unwrap();
    assert_eq!(knight.stats.strength, 16);
    assert!((knight.zone_armor[BodyZone::Torso] - 60.0).abs() < f64::EPSILON);

    let rookie = engine
        .build(&CombatantInput::new("rookie", "Rookie", CombatClass::Warrior))
        .unwrap();
    let result = engine.fight(&knight, &rookie, &mut rng).unwrap();
    let snapshot = result.snapshot("knight").unwrap();
    assert!((snapshot.armor - 100.0).abs() < f64::EPSILON);
}
