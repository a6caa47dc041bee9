use hero_battle::battle::{resolve_attack, run_round, sample_critical_hits, Arena, RoundReport};
use hero_battle::error::HeroError;
use hero_battle::model::{Archetype, Character};
use hero_battle::roster::{create_character, IdGenerator};
use rand::rngs::mock::StepRng;

// gen::<f64>() yields 0.0 forever: every roll is a critical hit.
fn always_crit() -> StepRng {
    StepRng::new(0, 0)
}

// gen::<f64>() yields just under 1.0 forever: no roll is a critical hit.
fn never_crit() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn make_hero(ids: &mut IdGenerator, name: &str, archetype: Archetype) -> Character {
    create_character(ids, name, archetype).unwrap()
}

#[test]
fn caster_outpaces_melee_for_plain_hit() {
    let mut ids = IdGenerator::new();
    let mut melee = make_hero(&mut ids, "Dmytro", Archetype::Melee);
    let mut caster = make_hero(&mut ids, "Merlin", Archetype::Caster);

    let report = run_round(&mut melee, &mut caster, &mut never_crit());
    match &report {
        RoundReport::Hit {
            attacker,
            defender,
            outcome,
        } => {
            assert_eq!(attacker, "Merlin");
            assert_eq!(defender, "Dmytro");
            assert_eq!(outcome.damage, 15);
            assert!(!outcome.is_critical);
            assert_eq!(outcome.remaining_health, 105);
        }
        other => panic!("expected a hit, got {other:?}"),
    }
    assert_eq!(melee.health(), 105);
    assert_eq!(caster.health(), 80, "defender never counter-attacks");

    let message = report.to_string();
    assert!(message.starts_with("Merlin attacks Dmytro"), "{message}");
    assert!(message.contains("105"), "{message}");
    assert!(!message.contains("critical"), "{message}");
}

#[test]
fn caster_outpaces_melee_for_critical_hit() {
    let mut ids = IdGenerator::new();
    let mut melee = make_hero(&mut ids, "Dmytro", Archetype::Melee);
    let mut caster = make_hero(&mut ids, "Merlin", Archetype::Caster);

    let report = run_round(&mut melee, &mut caster, &mut always_crit());
    let outcome = report.outcome().copied().unwrap();
    assert_eq!(outcome.damage, 30);
    assert!(outcome.is_critical);
    assert_eq!(outcome.remaining_health, 90);
    assert_eq!(melee.health(), 90);
    assert!(report.to_string().contains("(critical hit!)"));
}

#[test]
fn speed_tie_favours_first_argument() {
    let mut ids = IdGenerator::new();
    let mut left = make_hero(&mut ids, "Left", Archetype::Marksman);
    let mut right = make_hero(&mut ids, "Right", Archetype::Marksman);

    let report = run_round(&mut left, &mut right, &mut never_crit());
    match report {
        RoundReport::Hit {
            attacker, defender, ..
        } => {
            assert_eq!(attacker, "Left");
            assert_eq!(defender, "Right");
        }
        other => panic!("expected a hit, got {other:?}"),
    }
    assert_eq!(left.health(), 100);
    assert_eq!(right.health(), 100 - (20 - 7));
}

#[test]
fn damage_and_remaining_health_never_negative() {
    for attacker_kind in Archetype::ALL {
        for defender_kind in Archetype::ALL {
            for crit in [false, true] {
                let mut ids = IdGenerator::new();
                let attacker = make_hero(&mut ids, "A", attacker_kind);
                let mut defender = make_hero(&mut ids, "D", defender_kind);
                let before = defender.health();
                let outcome = if crit {
                    resolve_attack(&attacker, &mut defender, &mut always_crit())
                } else {
                    resolve_attack(&attacker, &mut defender, &mut never_crit())
                };
                assert!(outcome.damage >= 0);
                assert!(outcome.remaining_health >= 0);
                assert_eq!(outcome.remaining_health, (before - outcome.damage).max(0));
                assert_eq!(outcome.remaining_health, defender.health());
                assert_eq!(outcome.is_critical, crit);
            }
        }
    }
}

#[test]
fn lethal_hit_clamps_health_and_kills() {
    let mut ids = IdGenerator::new();
    let archer = make_hero(&mut ids, "Leona", Archetype::Marksman);
    let mut mage = make_hero(&mut ids, "Merlin", Archetype::Caster);

    // 15 per hit against 80 health: the sixth hit overkills by 10.
    for _ in 0..5 {
        resolve_attack(&archer, &mut mage, &mut never_crit());
        assert!(mage.is_alive());
    }
    assert_eq!(mage.health(), 5);
    let outcome = resolve_attack(&archer, &mut mage, &mut never_crit());
    assert_eq!(outcome.damage, 15);
    assert_eq!(outcome.remaining_health, 0);
    assert_eq!(mage.health(), 0);
    assert!(!mage.is_alive());
}

#[test]
fn fallen_defender_stays_down_under_more_hits() {
    let mut ids = IdGenerator::new();
    let archer = make_hero(&mut ids, "Leona", Archetype::Marksman);
    let mut mage = make_hero(&mut ids, "Merlin", Archetype::Caster);

    while mage.is_alive() {
        resolve_attack(&archer, &mut mage, &mut always_crit());
    }
    for _ in 0..10 {
        let outcome = resolve_attack(&archer, &mut mage, &mut always_crit());
        assert_eq!(outcome.remaining_health, 0);
        assert_eq!(mage.health(), 0);
        assert!(!mage.is_alive());
    }
}

#[test]
fn fallen_character_cannot_fight() {
    let mut ids = IdGenerator::new();
    let mut archer = make_hero(&mut ids, "Leona", Archetype::Marksman);
    let mut mage = make_hero(&mut ids, "Merlin", Archetype::Caster);
    while mage.is_alive() {
        resolve_attack(&archer, &mut mage, &mut always_crit());
    }
    let archer_before = archer.clone();
    let mage_before = mage.clone();

    for mage_first in [false, true] {
        let report = if mage_first {
            run_round(&mut mage, &mut archer, &mut always_crit())
        } else {
            run_round(&mut archer, &mut mage, &mut always_crit())
        };
        assert!(matches!(report, RoundReport::CannotFight { .. }));
        assert!(report.outcome().is_none());
        assert!(report.to_string().contains("cannot fight"));
    }
    assert_eq!(archer, archer_before);
    assert_eq!(mage, mage_before);
}

#[test]
fn arena_runs_rounds_by_slot() {
    let mut arena = Arena::new(7);
    arena.spawn("Dmytro", Archetype::Melee).unwrap();
    arena.spawn("Merlin", Archetype::Caster).unwrap();

    let report = arena.round(0, 1).unwrap();
    let outcome = report.outcome().copied().unwrap();
    assert!(outcome.damage == 15 || outcome.damage == 30);
    assert_eq!(arena.heroes()[0].health(), 120 - outcome.damage);
    assert_eq!(arena.heroes()[1].health(), 80);

    // Slot order does not change who is faster.
    let report = arena.round(1, 0).unwrap();
    assert!(report.to_string().starts_with("Merlin attacks Dmytro"));
}

#[test]
fn arena_rejects_bad_slots() {
    let mut arena = Arena::new(1);
    arena.spawn("Solo", Archetype::Melee).unwrap();
    assert_eq!(arena.round(0, 0), Err(HeroError::SelfMatch(0)));
    assert_eq!(arena.round(0, 3), Err(HeroError::UnknownCharacter(3)));
    assert_eq!(arena.round(2, 0), Err(HeroError::UnknownCharacter(2)));
}

#[test]
fn same_seed_same_battle() {
    let play = |seed| {
        let mut arena = Arena::new(seed);
        arena.spawn("A", Archetype::Marksman).unwrap();
        arena.spawn("B", Archetype::Caster).unwrap();
        (0..8)
            .map(|_| arena.round(0, 1).unwrap().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(play(99), play(99));
}

#[test]
fn critical_rate_near_one_in_five() {
    let trials = 10_000;
    let crits = sample_critical_hits(42, trials);
    let rate = crits as f64 / trials as f64;
    assert!(
        (rate - 0.2).abs() < 0.03,
        "expected crit rate near 0.2, got {rate}"
    );
}
