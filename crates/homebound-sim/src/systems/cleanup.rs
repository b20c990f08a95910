//! Off-screen culling.
//!
//! Runs after combat has already despawned dead and consumed entities,
//! so everything left is alive; anything past its trailing bound is
//! simply gone. A boss that walks off the left edge also clears the
//! boss-alive flag so the director can stage the next fight.

use hecs::{Entity, World};

use homebound_core::components::{Body, EnemyShot, Hostile, Pickup, PlayerShot, RunStats, Shot};
use homebound_core::constants::*;

pub fn run(world: &mut World, stats: &mut RunStats, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (body, hostile)) in world.query::<(&Body, &Hostile)>().iter() {
        if body.rect.right() < HOSTILE_CULL_X {
            if hostile.kind.is_boss() {
                stats.boss_alive = false;
            }
            despawn_buffer.push(entity);
        }
    }

    for (entity, (shot, _)) in world.query::<(&Shot, &PlayerShot)>().iter() {
        if shot.pos.x > PLAYFIELD_WIDTH + PLAYER_SHOT_CULL_MARGIN
            || shot.pos.x < -PLAYER_SHOT_CULL_MARGIN
        {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (shot, _)) in world.query::<(&Shot, &EnemyShot)>().iter() {
        if shot.pos.x < ENEMY_SHOT_CULL_X {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (body, _)) in world.query::<(&Body, &Pickup)>().iter() {
        if body.rect.right() < PICKUP_CULL_X {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
