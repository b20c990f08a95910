//! Engine-level integration tests: the full command → tick → snapshot
//! loop, exercising the phase machine and the invariants the simulation
//! promises to hold between ticks.

use homebound_core::commands::Command;
use homebound_core::components::Hostile;
use homebound_core::constants::*;
use homebound_core::enums::{HostileKind, OfferReason, RunPhase, WeaponKind};
use homebound_core::events::GameEvent;

use crate::engine::{RunEngine, SimConfig};
use crate::persistence::MemoryScoreStore;

const DT: f32 = 0.033;

fn engine(seed: u64) -> RunEngine {
    RunEngine::new(SimConfig { seed })
}

fn play_engine(seed: u64) -> RunEngine {
    let mut e = engine(seed);
    e.start_play("Tester");
    e
}

fn boss_count(e: &RunEngine) -> usize {
    e.world()
        .query::<&Hostile>()
        .iter()
        .filter(|(_, h)| h.kind.is_boss())
        .count()
}

fn non_boss_count(e: &RunEngine) -> usize {
    e.world()
        .query::<&Hostile>()
        .iter()
        .filter(|(_, h)| !h.kind.is_boss())
        .count()
}

// --- Phase machine ---

#[test]
fn menu_ignores_play_commands() {
    let mut e = engine(1);
    e.queue_commands([Command::Jump, Command::Fire, Command::Reload]);
    let snap = e.tick(DT);
    assert_eq!(snap.phase, RunPhase::Menu);
    assert!(snap.player_shots.is_empty());
    assert_eq!(snap.player.ammo_in_mag, 12);
}

#[test]
fn start_run_plays_the_intro_then_enters_play() {
    let mut e = engine(1);
    e.queue_command(Command::StartRun {
        name: "  Ellie  ".to_string(),
    });
    let snap = e.tick(DT);
    assert_eq!(snap.phase, RunPhase::Cutscene);
    assert_eq!(snap.stats.player_name, "Ellie");
    let scene = snap.cutscene.expect("intro scene visible");
    assert_eq!(scene.index, 0);
    assert!(!scene.holding);

    // Skip through every intro scene; the final skip releases into Play.
    for _ in 0..5 {
        e.queue_command(Command::AdvanceCutscene);
    }
    let snap = e.tick(DT);
    assert_eq!(snap.phase, RunPhase::Play);
    assert!(snap.cutscene.is_none());
}

#[test]
fn blank_name_falls_back_to_default() {
    let mut e = engine(1);
    e.queue_command(Command::StartRun {
        name: "   ".to_string(),
    });
    let snap = e.tick(DT);
    assert_eq!(snap.stats.player_name, DEFAULT_PLAYER_NAME);
}

#[test]
fn overlong_name_is_truncated() {
    let mut e = engine(1);
    e.queue_command(Command::StartRun {
        name: "a".repeat(40),
    });
    let snap = e.tick(DT);
    assert_eq!(snap.stats.player_name.chars().count(), MAX_PLAYER_NAME_LEN);
}

#[test]
fn jump_only_works_from_the_ground() {
    let mut e = play_engine(2);
    e.queue_command(Command::Jump);
    let snap = e.tick(DT);
    assert!(!snap.player.on_ground);
    let vel_after_first = e.player().vel_y;

    e.queue_command(Command::Jump);
    e.tick(DT);
    // A mid-air jump is dropped: velocity keeps integrating gravity.
    assert!(e.player().vel_y > vel_after_first);
    assert!(e.player().vel_y > JUMP_VELOCITY);
}

// --- Determinism ---

#[test]
fn same_seed_and_commands_reproduce_the_same_run() {
    let run = |seed| {
        let mut e = play_engine(seed);
        let mut last = None;
        for i in 0..400 {
            if i % 3 == 0 {
                e.queue_command(Command::Fire);
            }
            if i % 50 == 0 {
                e.queue_command(Command::Jump);
            }
            let snap = e.tick(DT);
            if snap.phase == RunPhase::UpgradeSelect {
                e.queue_command(Command::SelectUpgrade { index: 0 });
            }
            last = Some(snap);
        }
        serde_json::to_string(&last.unwrap()).unwrap()
    };

    assert_eq!(run(7), run(7));
    assert_ne!(run(7), run(8));
}

// --- Weapons & ammo ---

#[test]
fn pistol_empties_after_twelve_shots_then_reloads() {
    let mut e = play_engine(3);
    assert_eq!(e.player().weapon, WeaponKind::Pistol);

    for _ in 0..12 {
        e.player_mut().fire_cooldown = 0.0;
        e.queue_command(Command::Fire);
        e.tick(0.0);
    }
    assert_eq!(e.player().ammo_in_mag, 0);
    assert_eq!(e.player().ammo_reserve, START_RESERVE_AMMO);
    assert!(!e.player().reloading);

    // The thirteenth trigger pull starts a reload instead of firing.
    e.player_mut().fire_cooldown = 0.0;
    e.queue_command(Command::Fire);
    let snap = e.tick(0.0);
    assert!(snap.player.reloading);
    assert!(snap.events.contains(&GameEvent::ReloadStarted));

    for _ in 0..40 {
        e.tick(DT);
    }
    assert!(!e.player().reloading);
    assert_eq!(e.player().ammo_in_mag, 12);
    assert_eq!(e.player().ammo_reserve, START_RESERVE_AMMO - 12);
}

#[test]
fn reload_with_full_magazine_is_a_noop() {
    let mut e = play_engine(3);
    e.queue_command(Command::Reload);
    let snap = e.tick(0.0);
    assert!(!snap.player.reloading);
}

// --- Invariants over a long run ---

#[test]
fn ammo_health_and_population_invariants_hold_every_tick() {
    let mut e = play_engine(4);
    for i in 0..4000 {
        if i % 2 == 0 {
            e.queue_command(Command::Fire);
        }
        if i % 90 == 0 {
            e.queue_command(Command::Jump);
        }
        let snap = e.tick(DT);

        assert!(snap.player.health >= 0.0);
        assert!(snap.player.health <= snap.player.health_max);
        assert!(snap.player.ammo_in_mag <= snap.player.mag_size);
        assert!(snap.player.ammo_reserve <= RESERVE_AMMO_CAP);
        assert!(boss_count(&e) <= 1);
        // The stricter boss-fight cap binds at spawn time only; hostiles
        // already on screen are never culled down to it.
        assert!(
            non_boss_count(&e) <= MAX_HOSTILES,
            "population {} over cap",
            non_boss_count(&e)
        );

        match snap.phase {
            RunPhase::UpgradeSelect => e.queue_command(Command::SelectUpgrade { index: 0 }),
            RunPhase::GameOver | RunPhase::Win => break,
            _ => {}
        }
    }
}

// --- Combat ---

#[test]
fn a_shot_damages_at_most_one_hostile() {
    use glam::Vec2;
    use homebound_core::components::{Body, PlayerShot, Shot};
    use homebound_core::types::Rect;

    let mut e = play_engine(5);
    // Two overlapping hostiles with a shot already inside both.
    for _ in 0..2 {
        e.world_mut().spawn((
            Body {
                rect: Rect::new(300.0, GROUND_Y - 50.0, 40.0, 50.0),
            },
            Hostile {
                kind: HostileKind::Normal,
                health: 5.0,
                health_max: 5.0,
                speed: 0.0,
                attack_timer: 2.0,
                anim_clock: 0.0,
            },
        ));
    }
    e.world_mut().spawn((
        Shot {
            pos: Vec2::new(310.0, GROUND_Y - 25.0),
            vel: Vec2::new(760.0, 0.0),
            radius: PLAYER_SHOT_RADIUS,
            damage: 1.0,
        },
        PlayerShot,
    ));

    e.tick(0.0);

    let damaged = e
        .world()
        .query::<&Hostile>()
        .iter()
        .filter(|(_, h)| h.health < h.health_max)
        .count();
    assert_eq!(damaged, 1);
    assert_eq!(e.world().query::<&Shot>().iter().count(), 0);
}

// --- Boss ---

#[test]
fn only_one_boss_exists_at_a_time() {
    let mut e = play_engine(6);
    e.stats_mut().distance = FIRST_BOSS_AT;
    e.tick(DT);
    assert!(e.stats().boss_alive);
    assert_eq!(boss_count(&e), 1);

    // Cross the next threshold while the first boss is still alive.
    e.stats_mut().distance = FIRST_BOSS_AT + BOSS_INTERVAL;
    for _ in 0..5 {
        e.tick(DT);
    }
    assert_eq!(boss_count(&e), 1);
}

#[test]
fn boss_death_drops_a_weapon_and_opens_the_guaranteed_offer() {
    use homebound_core::components::Pickup;
    use homebound_core::enums::PickupKind;

    let mut e = play_engine(7);
    e.spawn_test_boss();
    assert!(e.stats().boss_alive);

    for (_, hostile) in e.world_mut().query_mut::<&mut Hostile>() {
        if hostile.kind.is_boss() {
            hostile.health = 0.0;
        }
    }
    let snap = e.tick(0.0);

    assert!(!e.stats().boss_alive);
    assert!(snap.events.contains(&GameEvent::BossDefeated));
    assert_eq!(snap.phase, RunPhase::UpgradeSelect);

    let offer = snap.offer.expect("offer open");
    assert_eq!(offer.reason, OfferReason::BossDown);
    assert_eq!(offer.reason_label, "BOSS DOWN");
    assert_eq!(offer.choices.len(), 3);

    let weapon_drops = e
        .world()
        .query::<&Pickup>()
        .iter()
        .filter(|(_, p)| p.kind == PickupKind::Weapon)
        .count();
    assert_eq!(weapon_drops, 1);
}

// --- Upgrades ---

#[test]
fn offer_choices_are_three_distinct_modifiers() {
    let mut e = play_engine(8);
    e.spawn_test_boss();
    for (_, hostile) in e.world_mut().query_mut::<&mut Hostile>() {
        hostile.health = 0.0;
    }
    let snap = e.tick(0.0);

    let offer = snap.offer.expect("offer open");
    let ids: Vec<_> = offer.choices.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), 3);
    assert!(ids[0] != ids[1] && ids[1] != ids[2] && ids[0] != ids[2]);
}

#[test]
fn an_upgrade_is_applied_exactly_once() {
    let mut e = play_engine(9);
    e.spawn_test_boss();
    for (_, hostile) in e.world_mut().query_mut::<&mut Hostile>() {
        hostile.health = 0.0;
    }
    e.tick(0.0);
    assert_eq!(e.phase(), RunPhase::UpgradeSelect);

    // A duplicate selection in the same batch must be dropped.
    e.queue_command(Command::SelectUpgrade { index: 0 });
    e.queue_command(Command::SelectUpgrade { index: 0 });
    let snap = e.tick(0.0);

    assert_eq!(snap.phase, RunPhase::Play);
    let chosen = snap
        .events
        .iter()
        .filter(|ev| matches!(ev, GameEvent::UpgradeChosen { .. }))
        .count();
    assert_eq!(chosen, 1);
}

#[test]
fn invalid_selection_index_keeps_the_offer_open() {
    let mut e = play_engine(10);
    e.spawn_test_boss();
    for (_, hostile) in e.world_mut().query_mut::<&mut Hostile>() {
        hostile.health = 0.0;
    }
    e.tick(0.0);

    e.queue_command(Command::SelectUpgrade { index: 9 });
    let snap = e.tick(0.0);
    assert_eq!(snap.phase, RunPhase::UpgradeSelect);
    assert!(snap.offer.is_some());
}

#[test]
fn milestone_offer_opens_once_conditions_line_up() {
    let mut e = play_engine(11);
    e.stats_mut().next_boss_at = 10_000.0;
    e.stats_mut().distance = 700.0;
    e.tick(DT); // companion appears
    e.companion_mut().expect("companion appeared").found = true;

    let snap = e.tick(DT);
    assert_eq!(snap.phase, RunPhase::UpgradeSelect);
    let offer = snap.offer.expect("milestone offer");
    assert_eq!(offer.reason, OfferReason::Milestone);
    assert_eq!(offer.reason_label, "MILESTONE");
}

// --- Companion ---

#[test]
fn finding_the_companion_opens_an_offer() {
    let mut e = play_engine(12);
    e.stats_mut().next_boss_at = 10_000.0;
    e.stats_mut().distance = 200.0;
    e.tick(DT);
    let dog = e.companion_mut().expect("companion drifted in");
    assert!(!dog.found);
    dog.rect.pos.x = PLAYER_X + 10.0;

    let snap = e.tick(DT);
    assert!(snap.events.contains(&GameEvent::CompanionFound));
    assert_eq!(snap.phase, RunPhase::UpgradeSelect);
    assert_eq!(snap.offer.expect("offer").reason, OfferReason::CompanionFound);
    assert!(snap.companion.expect("companion visible").found);
}

// --- Run outcomes ---

#[test]
fn reaching_home_wins_and_plays_the_ending() {
    let mut e = play_engine(13);
    e.stats_mut().next_boss_at = 10_000.0;
    e.stats_mut().distance = HOME_DISTANCE - 0.01;

    let snap = e.tick(DT);
    assert_eq!(snap.phase, RunPhase::Win);
    assert!(snap
        .events
        .iter()
        .any(|ev| matches!(ev, GameEvent::Win { distance } if *distance >= HOME_DISTANCE)));
    assert!(snap.cutscene.is_some());
    // Winning does not touch the best score.
    assert_eq!(e.best().distance, 0.0);

    e.queue_command(Command::Replay);
    let snap = e.tick(DT);
    assert_eq!(snap.phase, RunPhase::Cutscene);
    assert_eq!(snap.stats.distance, 0.0);
}

#[test]
fn death_records_the_best_score_and_retry_restarts() {
    let store = MemoryScoreStore::new();
    let mut e = RunEngine::with_store(SimConfig { seed: 14 }, Box::new(store.clone()));
    e.start_play("Joel");
    e.stats_mut().distance = 321.0;
    e.player_mut().health = 0.0;

    let snap = e.tick(0.0);
    assert_eq!(snap.phase, RunPhase::GameOver);
    assert!(snap
        .events
        .iter()
        .any(|ev| matches!(ev, GameEvent::GameOver { .. })));
    assert_eq!(e.best().name, "Joel");
    assert_eq!(e.best().distance, 321.0);
    assert_eq!(store.stored().distance, 321.0);

    e.queue_command(Command::Retry);
    let snap = e.tick(DT);
    assert_eq!(snap.phase, RunPhase::Cutscene);
    assert_eq!(snap.stats.distance, 0.0);
    // The best survives the reset.
    assert_eq!(snap.stats.best.distance, 321.0);
}

#[test]
fn a_worse_run_leaves_the_best_alone() {
    let store = MemoryScoreStore::new();
    {
        let mut e = RunEngine::with_store(SimConfig { seed: 15 }, Box::new(store.clone()));
        e.start_play("Joel");
        e.stats_mut().distance = 500.0;
        e.player_mut().health = 0.0;
        e.tick(0.0);
    }
    let mut e = RunEngine::with_store(SimConfig { seed: 16 }, Box::new(store.clone()));
    assert_eq!(e.best().distance, 500.0);

    e.start_play("Tess");
    e.stats_mut().distance = 120.0;
    e.player_mut().health = 0.0;
    e.tick(0.0);
    assert_eq!(e.best().name, "Joel");
    assert_eq!(store.stored().distance, 500.0);
}
