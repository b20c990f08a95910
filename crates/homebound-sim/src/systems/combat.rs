//! Combat and collision resolution.
//!
//! Per-tick order (fixed): player shots vs hostiles, hostile contact
//! damage, hostile ranged fire, enemy shots vs player, dead-hostile
//! sweep, player pickup collection. Entities consumed mid-pass are
//! collected into the despawn buffer and removed before the next step
//! that could observe them twice.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use homebound_core::components::{
    Body, CompanionStats, EnemyShot, Hostile, Pickup, Player, PlayerShot, RunStats, Shot,
};
use homebound_core::constants::*;
use homebound_core::enums::{HostileKind, OfferReason, PickupKind};
use homebound_core::events::GameEvent;
use homebound_core::types::{Circle, Rect};

/// Resolve all combat for one tick. Returns `Some(OfferReason::BossDown)`
/// when the boss died this tick so the engine can open the guaranteed
/// offer.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    player: &mut Player,
    companion_stats: &CompanionStats,
    stats: &mut RunStats,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
    dt: f32,
) -> Option<OfferReason> {
    resolve_player_shots(world, events, despawn_buffer);
    drain(world, despawn_buffer);

    apply_contact_damage(world, player, dt);
    fire_hostile_shots(world, rng, dt);

    resolve_enemy_shots(world, player, events, despawn_buffer);
    drain(world, despawn_buffer);

    let boss_down = sweep_dead(world, player, stats, rng, events, despawn_buffer);
    drain(world, despawn_buffer);

    collect_pickups(world, player, companion_stats, events, despawn_buffer);
    drain(world, despawn_buffer);

    boss_down
}

/// Attempt one trigger pull. No-op while reloading or on cooldown; an
/// empty magazine starts a reload instead of firing.
pub fn try_fire(
    world: &mut World,
    player: &mut Player,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    if player.reloading || player.fire_cooldown > 0.0 {
        return;
    }
    if player.ammo_in_mag == 0 {
        start_reload(player, events);
        return;
    }

    let spec = player.weapon.spec();
    player.ammo_in_mag -= 1;
    player.fire_cooldown = spec.fire_interval;

    let origin = Vec2::new(
        player.rect.right(),
        player.rect.pos.y + player.rect.size.y * 0.45,
    );
    for _ in 0..spec.pellets {
        let angle = (rng.gen::<f32>() - 0.5) * spec.spread;
        world.spawn((
            Shot {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * spec.shot_speed,
                radius: PLAYER_SHOT_RADIUS,
                damage: spec.damage,
            },
            PlayerShot,
        ));
    }

    events.push(GameEvent::ShotFired {
        weapon: player.weapon,
    });
}

/// Begin a reload. No-op if already reloading, the magazine is full, or
/// the reserve is empty.
pub fn start_reload(player: &mut Player, events: &mut Vec<GameEvent>) {
    if player.reloading {
        return;
    }
    if player.ammo_in_mag >= player.weapon.spec().mag_size || player.ammo_reserve == 0 {
        return;
    }
    player.reloading = true;
    player.reload_timer = RELOAD_TIME;
    events.push(GameEvent::ReloadStarted);
}

/// Each shot damages at most one hostile, then is consumed.
fn resolve_player_shots(
    world: &mut World,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let shots: Vec<(Entity, Shot)> = world
        .query::<(&Shot, &PlayerShot)>()
        .iter()
        .map(|(entity, (shot, _))| (entity, *shot))
        .collect();

    for (shot_entity, shot) in shots {
        let circle = Circle::new(shot.pos, shot.radius);
        for (_hostile_entity, (body, hostile)) in world.query_mut::<(&Body, &mut Hostile)>() {
            if circle.hits_rect(&body.rect) {
                hostile.health -= shot.damage;
                events.push(GameEvent::Hit {
                    target: hostile.kind,
                });
                despawn_buffer.push(shot_entity);
                break;
            }
        }
    }
}

/// Hostiles overlapping the player grind health down continuously,
/// scaled by dt and a per-kind rate.
fn apply_contact_damage(world: &mut World, player: &mut Player, dt: f32) {
    for (_entity, (body, hostile)) in world.query_mut::<(&Body, &Hostile)>() {
        if body.rect.overlaps(&player.rect) {
            let rate = match hostile.kind {
                HostileKind::Tank => CONTACT_DAMAGE_TANK,
                HostileKind::Boss => CONTACT_DAMAGE_BOSS,
                HostileKind::Runner => CONTACT_DAMAGE_RUNNER,
                HostileKind::Normal | HostileKind::Spitter => CONTACT_DAMAGE_NORMAL,
            };
            player.health = (player.health - rate * CONTACT_DAMAGE_MULT * dt).max(0.0);
        }
    }
}

/// Ranged hostiles fire on independent cooldowns once inside the
/// playfield.
fn fire_hostile_shots(world: &mut World, rng: &mut ChaCha8Rng, dt: f32) {
    let mut spawns: Vec<(Vec2, HostileKind)> = Vec::new();

    for (_entity, (body, hostile)) in world.query_mut::<(&Body, &mut Hostile)>() {
        if !hostile.kind.is_ranged() {
            continue;
        }
        hostile.attack_timer -= dt;
        if hostile.attack_timer > 0.0
            || body.rect.pos.x >= PLAYFIELD_WIDTH - RANGED_FIRE_EDGE_MARGIN
        {
            continue;
        }
        hostile.attack_timer = match hostile.kind {
            HostileKind::Boss => rng.gen_range(BOSS_ATTACK_MIN..BOSS_ATTACK_MAX),
            _ => rng.gen_range(SPITTER_ATTACK_MIN..SPITTER_ATTACK_MAX),
        };
        let muzzle = Vec2::new(
            body.rect.pos.x,
            body.rect.pos.y + body.rect.size.y * 0.45,
        );
        spawns.push((muzzle, hostile.kind));
    }

    for (muzzle, kind) in spawns {
        let (speed, damage, radius) = if kind == HostileKind::Boss {
            (BOSS_SHOT_SPEED, BOSS_SHOT_DAMAGE, BOSS_SHOT_RADIUS)
        } else {
            (SPITTER_SHOT_SPEED, SPITTER_SHOT_DAMAGE, SPITTER_SHOT_RADIUS)
        };
        world.spawn((
            Shot {
                pos: muzzle,
                vel: Vec2::new(-speed, 0.0),
                radius,
                damage,
            },
            EnemyShot,
        ));
    }
}

/// Enemy shots apply a fixed discrete damage and are consumed on hit.
fn resolve_enemy_shots(
    world: &mut World,
    player: &mut Player,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    for (entity, (shot, _)) in world.query_mut::<(&Shot, &EnemyShot)>() {
        if Circle::new(shot.pos, shot.radius).hits_rect(&player.rect) {
            player.health = (player.health - shot.damage).max(0.0);
            events.push(GameEvent::PlayerHit {
                damage: shot.damage,
            });
            despawn_buffer.push(entity);
        }
    }
}

/// Remove hostiles whose health reached zero, in a single pass. A boss
/// death clears the boss flag, drops a guaranteed weapon pickup, and
/// requests an upgrade offer; other deaths have a small ammo-drop chance.
fn sweep_dead(
    world: &mut World,
    player: &Player,
    stats: &mut RunStats,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) -> Option<OfferReason> {
    let mut boss_down = None;
    let mut drops: Vec<(f32, PickupKind)> = Vec::new();

    for (entity, (body, hostile)) in world.query_mut::<(&Body, &Hostile)>() {
        if hostile.health > 0.0 {
            continue;
        }
        despawn_buffer.push(entity);

        if hostile.kind.is_boss() {
            stats.boss_alive = false;
            drops.push((player.rect.pos.x + BOSS_DROP_OFFSET, PickupKind::Weapon));
            events.push(GameEvent::BossDefeated);
            boss_down = Some(OfferReason::BossDown);
        } else if rng.gen_bool(DEATH_AMMO_DROP_CHANCE) {
            drops.push((body.rect.pos.x, PickupKind::Ammo));
        }
    }

    for (x, kind) in drops {
        spawn_pickup_at(world, x, kind);
    }

    boss_down
}

/// Drop a pickup on the ground at the given x.
pub(crate) fn spawn_pickup_at(world: &mut World, x: f32, kind: PickupKind) {
    world.spawn((
        Body {
            rect: Rect::new(x, GROUND_Y - PICKUP_SIZE - 2.0, PICKUP_SIZE, PICKUP_SIZE),
        },
        Pickup { kind },
    ));
}

/// Direct player-overlap collection. Companion auto-collection ran
/// earlier in the tick, so nothing here can be double-collected.
fn collect_pickups(
    world: &mut World,
    player: &mut Player,
    companion_stats: &CompanionStats,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let mut collected: Vec<PickupKind> = Vec::new();
    for (entity, (body, pickup)) in world.query_mut::<(&Body, &Pickup)>() {
        if body.rect.overlaps(&player.rect) {
            collected.push(pickup.kind);
            despawn_buffer.push(entity);
        }
    }
    for kind in collected {
        apply_pickup(player, companion_stats, kind, events);
    }
}

/// Apply a pickup's effect to the player.
pub(crate) fn apply_pickup(
    player: &mut Player,
    companion_stats: &CompanionStats,
    kind: PickupKind,
    events: &mut Vec<GameEvent>,
) {
    match kind {
        PickupKind::Ammo => {
            let gain = AMMO_PICKUP_AMOUNT + companion_stats.ammo_bonus;
            player.ammo_reserve = (player.ammo_reserve + gain).min(RESERVE_AMMO_CAP);
        }
        PickupKind::Med => {
            player.health = (player.health + MED_PICKUP_HEAL).min(player.health_max);
        }
        PickupKind::Weapon => {
            let next = player.weapon.next();
            if next != player.weapon {
                player.weapon = next;
                player.ammo_in_mag = next.spec().mag_size;
                player.reloading = false;
                player.reload_timer = 0.0;
            }
            player.ammo_reserve =
                (player.ammo_reserve + WEAPON_PICKUP_RESERVE_BONUS).min(RESERVE_AMMO_CAP);
        }
    }
    events.push(GameEvent::PickupCollected { kind });
}

fn drain(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
