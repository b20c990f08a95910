//! Per-tick integration: world scroll, player physics and weapon timers,
//! and position updates for every scrolling entity.

use hecs::World;

use homebound_core::components::{Body, Hostile, Pickup, Player, RunStats, Shot};
use homebound_core::constants::*;
use homebound_core::events::GameEvent;

/// Advance scroll speed and cumulative distance, then integrate all
/// positions. Removal of anything that left the playfield happens later
/// in the cleanup pass, never here.
pub fn run(
    world: &mut World,
    player: &mut Player,
    stats: &mut RunStats,
    events: &mut Vec<GameEvent>,
    dt: f32,
) {
    stats.distance += stats.speed * dt * DISTANCE_RATE;
    stats.speed = (stats.speed + SCROLL_SPEED_RAMP * dt).min(MAX_SCROLL_SPEED);

    update_player(player, events, dt);

    // Hostiles close distance relative to the world scroll.
    for (_entity, (body, hostile)) in world.query_mut::<(&mut Body, &mut Hostile)>() {
        body.rect.pos.x -= (stats.speed + hostile.speed) * dt;
        hostile.anim_clock += dt;
    }

    // Shots fly on their fixed velocity vectors.
    for (_entity, shot) in world.query_mut::<&mut Shot>() {
        shot.pos += shot.vel * dt;
    }

    // Pickups ride the road.
    for (_entity, (body, _pickup)) in world.query_mut::<(&mut Body, &Pickup)>() {
        body.rect.pos.x -= stats.speed * dt;
    }
}

fn update_player(player: &mut Player, events: &mut Vec<GameEvent>, dt: f32) {
    // Constant-gravity hop.
    player.vel_y += GRAVITY * dt;
    player.rect.pos.y += player.vel_y * dt;
    if player.rect.bottom() >= GROUND_Y {
        player.rect.pos.y = GROUND_Y - player.rect.size.y;
        player.vel_y = 0.0;
        player.on_ground = true;
    }

    player.anim_clock += dt;
    player.fire_cooldown = (player.fire_cooldown - dt).max(0.0);

    if player.reloading {
        player.reload_timer -= dt;
        if player.reload_timer <= 0.0 {
            finish_reload(player);
            events.push(GameEvent::ReloadFinished);
        }
    }
}

/// Move rounds from reserve into the magazine, up to capacity.
fn finish_reload(player: &mut Player) {
    let mag_size = player.weapon.spec().mag_size;
    let need = mag_size.saturating_sub(player.ammo_in_mag);
    let take = need.min(player.ammo_reserve);
    player.ammo_in_mag += take;
    player.ammo_reserve -= take;
    player.reloading = false;
    player.reload_timer = 0.0;
}
