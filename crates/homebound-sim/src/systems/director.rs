//! Spawn & difficulty director.
//!
//! Two independent countdown timers (hostiles, pickups) re-arm with a
//! freshly rolled interval each time they fire. Hostile spawns respect
//! the population cap; the boss threshold advances by a fixed increment
//! after each fight.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use homebound_core::components::{Body, Hostile, Pickup, RunStats};
use homebound_core::constants::*;
use homebound_core::enums::{HostileKind, PickupKind};
use homebound_core::events::GameEvent;
use homebound_core::types::Rect;

/// Director timer state, reset with the run.
#[derive(Debug, Clone, Default)]
pub struct Director {
    pub hostile_timer: f32,
    pub pickup_timer: f32,
}

/// One director pass: boss threshold, then the two spawn timers.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut Director,
    stats: &mut RunStats,
    events: &mut Vec<GameEvent>,
    dt: f32,
) {
    if stats.distance >= stats.next_boss_at {
        spawn_boss(world, stats, events);
        stats.next_boss_at += BOSS_INTERVAL;
    }

    director.hostile_timer -= dt;
    if director.hostile_timer <= 0.0 {
        director.hostile_timer = hostile_interval(stats.distance);
        spawn_hostile(world, rng, stats);
    }

    director.pickup_timer -= dt;
    if director.pickup_timer <= 0.0 {
        director.pickup_timer = rng.gen_range(PICKUP_SPAWN_MIN..PICKUP_SPAWN_MAX);
        spawn_roadside_pickup(world, rng, stats);
    }
}

/// Spawn interval shrinks with distance but never below the floor, and
/// is stretched by the global slowdown multiplier.
pub fn hostile_interval(distance: f32) -> f32 {
    ((HOSTILE_SPAWN_BASE - distance / HOSTILE_SPAWN_DISTANCE_SCALE) * SPAWN_SLOWDOWN)
        .max(MIN_HOSTILE_SPAWN_INTERVAL)
}

/// Live non-boss hostile count.
pub fn hostile_population(world: &World) -> usize {
    world
        .query::<&Hostile>()
        .iter()
        .filter(|(_, h)| !h.kind.is_boss())
        .count()
}

/// Cap in effect right now: stricter while a boss is alive.
pub fn population_cap(boss_alive: bool) -> usize {
    if boss_alive {
        MAX_HOSTILES_DURING_BOSS
    } else {
        MAX_HOSTILES
    }
}

/// Spawn one hostile of a distance-gated weighted random kind. No-op at
/// the population cap.
fn spawn_hostile(world: &mut World, rng: &mut ChaCha8Rng, stats: &RunStats) {
    if hostile_population(world) >= population_cap(stats.boss_alive) {
        return;
    }
    let kind = roll_kind(rng, stats.distance);
    spawn_hostile_of_kind(world, rng, kind);
}

/// Weighted kind roll. Weaker kinds dominate early; Runner, Tank, and
/// Spitter unlock at increasing distances.
fn roll_kind(rng: &mut ChaCha8Rng, distance: f32) -> HostileKind {
    let roll: f64 = rng.gen();
    if distance > RUNNER_MIN_DISTANCE && roll < RUNNER_ROLL {
        HostileKind::Runner
    } else if distance > TANK_MIN_DISTANCE && roll < TANK_ROLL {
        HostileKind::Tank
    } else if distance > SPITTER_MIN_DISTANCE && roll < SPITTER_ROLL {
        HostileKind::Spitter
    } else {
        HostileKind::Normal
    }
}

/// Spawn a non-boss hostile just past the right edge.
pub(crate) fn spawn_hostile_of_kind(world: &mut World, rng: &mut ChaCha8Rng, kind: HostileKind) {
    debug_assert!(!kind.is_boss(), "boss spawns go through spawn_boss");

    let base_height = rng.gen_range(NORMAL_HEIGHT_MIN..NORMAL_HEIGHT_MAX);
    let mut width = base_height * HOSTILE_ASPECT;
    let mut height = base_height;

    let (hp, speed, attack_timer) = match kind {
        HostileKind::Runner => {
            width *= RUNNER_SIZE_MULT;
            height *= RUNNER_SIZE_MULT;
            (
                RUNNER_HP,
                rng.gen_range(RUNNER_SPEED_MIN..RUNNER_SPEED_MAX),
                rng.gen_range(DEFAULT_ATTACK_MIN..DEFAULT_ATTACK_MAX),
            )
        }
        HostileKind::Tank => {
            width *= TANK_SIZE_MULT;
            height *= TANK_SIZE_MULT;
            (
                TANK_HP,
                rng.gen_range(TANK_SPEED_MIN..TANK_SPEED_MAX),
                rng.gen_range(DEFAULT_ATTACK_MIN..DEFAULT_ATTACK_MAX),
            )
        }
        HostileKind::Spitter => (
            SPITTER_HP,
            rng.gen_range(SPITTER_SPEED_MIN..SPITTER_SPEED_MAX),
            rng.gen_range(SPITTER_SPAWN_ATTACK_MIN..SPITTER_SPAWN_ATTACK_MAX),
        ),
        _ => (
            NORMAL_HP,
            rng.gen_range(NORMAL_SPEED_MIN..NORMAL_SPEED_MAX),
            rng.gen_range(DEFAULT_ATTACK_MIN..DEFAULT_ATTACK_MAX),
        ),
    };

    // Global easing: weaker hp (never below 1) and slower feet.
    let eased_hp = (hp * HOSTILE_HP_MULT).round().max(1.0);

    world.spawn((
        Body {
            rect: Rect::new(
                PLAYFIELD_WIDTH + 60.0,
                GROUND_Y - height,
                width,
                height,
            ),
        },
        Hostile {
            kind,
            health: eased_hp,
            health_max: eased_hp,
            speed: speed * HOSTILE_SPEED_MULT,
            attack_timer,
            anim_clock: 0.0,
        },
    ));
}

/// Spawn the boss. Re-entrant calls while one is alive are no-ops; at
/// most one boss exists at a time.
pub(crate) fn spawn_boss(world: &mut World, stats: &mut RunStats, events: &mut Vec<GameEvent>) {
    if stats.boss_alive {
        return;
    }
    stats.boss_alive = true;

    let base_hp = BOSS_BASE_HP + (stats.distance / BOSS_HP_DISTANCE_SCALE).floor();
    let hp = (base_hp * BOSS_HP_MULT).round();

    world.spawn((
        Body {
            rect: Rect::new(
                PLAYFIELD_WIDTH + 80.0,
                GROUND_Y - BOSS_HEIGHT,
                BOSS_WIDTH,
                BOSS_HEIGHT,
            ),
        },
        Hostile {
            kind: HostileKind::Boss,
            health: hp,
            health_max: hp,
            speed: BOSS_SPEED * BOSS_SPEED_MULT,
            attack_timer: 0.8,
            anim_clock: 0.0,
        },
    ));

    events.push(GameEvent::BossSpawned);
}

/// Roll a pickup kind and spawn it past the right edge. Probabilistically
/// suppressed during boss fights.
fn spawn_roadside_pickup(world: &mut World, rng: &mut ChaCha8Rng, stats: &RunStats) {
    if stats.boss_alive && rng.gen_bool(PICKUP_SUPPRESS_DURING_BOSS) {
        return;
    }

    let roll: f64 = rng.gen();
    let kind = if roll < PICKUP_MED_ROLL {
        PickupKind::Med
    } else if roll < PICKUP_WEAPON_ROLL && stats.distance > PICKUP_WEAPON_MIN_DISTANCE {
        PickupKind::Weapon
    } else {
        PickupKind::Ammo
    };

    world.spawn((
        Body {
            rect: Rect::new(
                PLAYFIELD_WIDTH + 60.0,
                GROUND_Y - PICKUP_SIZE - 2.0,
                PICKUP_SIZE,
                PICKUP_SIZE,
            ),
        },
        Pickup { kind },
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn interval_shrinks_with_distance_and_floors() {
        let early = hostile_interval(0.0);
        let mid = hostile_interval(400.0);
        let late = hostile_interval(2000.0);

        assert!(early > mid, "pacing speeds up with distance");
        assert!(mid > late || late == MIN_HOSTILE_SPAWN_INTERVAL);
        assert_eq!(late, MIN_HOSTILE_SPAWN_INTERVAL);
        assert!((early - HOSTILE_SPAWN_BASE * SPAWN_SLOWDOWN).abs() < 1e-5);
    }

    #[test]
    fn early_distance_only_rolls_normals() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            assert_eq!(roll_kind(&mut rng, 50.0), HostileKind::Normal);
        }
    }

    #[test]
    fn late_distance_unlocks_all_kinds() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(roll_kind(&mut rng, 1000.0));
        }
        assert!(seen.contains(&HostileKind::Normal));
        assert!(seen.contains(&HostileKind::Runner));
        assert!(seen.contains(&HostileKind::Tank));
        assert!(seen.contains(&HostileKind::Spitter));
    }

    #[test]
    fn boss_spawn_is_reentrant_noop() {
        let mut world = World::new();
        let mut stats = RunStats {
            distance: 500.0,
            ..Default::default()
        };
        let mut events = Vec::new();

        spawn_boss(&mut world, &mut stats, &mut events);
        spawn_boss(&mut world, &mut stats, &mut events);

        let bosses = world
            .query::<&Hostile>()
            .iter()
            .filter(|(_, h)| h.kind.is_boss())
            .count();
        assert_eq!(bosses, 1);
        assert_eq!(events.len(), 1);
        assert!(stats.boss_alive);
    }

    #[test]
    fn hostile_spawn_respects_cap() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stats = RunStats::default();

        for _ in 0..MAX_HOSTILES + 5 {
            spawn_hostile(&mut world, &mut rng, &stats);
        }
        assert_eq!(hostile_population(&world), MAX_HOSTILES);
    }

    #[test]
    fn boss_tightens_cap() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let stats = RunStats {
            boss_alive: true,
            ..Default::default()
        };

        for _ in 0..MAX_HOSTILES {
            spawn_hostile(&mut world, &mut rng, &stats);
        }
        assert_eq!(hostile_population(&world), MAX_HOSTILES_DURING_BOSS);
    }

    #[test]
    fn spawned_hostiles_stand_on_the_ground() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        spawn_hostile_of_kind(&mut world, &mut rng, HostileKind::Tank);

        let mut q = world.query::<(&Body, &Hostile)>();
        let (_, (body, hostile)) = q.iter().next().unwrap();
        assert!((body.rect.bottom() - GROUND_Y).abs() < 1e-4);
        assert_eq!(hostile.health, (TANK_HP * HOSTILE_HP_MULT).round());
        assert!(hostile.health == hostile.health_max);
    }
}
