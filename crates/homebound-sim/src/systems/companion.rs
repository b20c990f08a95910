//! Companion behavior: drift-in and discovery while unfound; follow,
//! passive heal, pickup auto-collection, and the windowed bite once
//! found.

use hecs::{Entity, World};

use homebound_core::components::{Body, Companion, CompanionStats, Hostile, Pickup, Player, RunStats};
use homebound_core::constants::*;
use homebound_core::enums::OfferReason;
use homebound_core::events::GameEvent;

use super::combat::apply_pickup;

/// Advance the companion one tick. Returns `Some(CompanionFound)` on the
/// tick discovery happens so the engine can open the guaranteed offer.
pub fn run(
    world: &mut World,
    companion: &mut Option<Companion>,
    stats: &RunStats,
    companion_stats: &CompanionStats,
    player: &mut Player,
    events: &mut Vec<GameEvent>,
    dt: f32,
) -> Option<OfferReason> {
    // One appearance per run, past the distance threshold.
    if companion.is_none() && stats.distance > COMPANION_APPEAR_DISTANCE {
        *companion = Some(Companion::appearing());
    }

    let dog = companion.as_mut()?;
    dog.anim_clock += dt;

    if !dog.found {
        dog.rect.pos.x -= stats.speed * dt;
        if dog.rect.pos.x < player.rect.pos.x + COMPANION_DISCOVER_RANGE {
            dog.found = true;
            events.push(GameEvent::CompanionFound);
            return Some(OfferReason::CompanionFound);
        }
        return None;
    }

    // Trail the player with an exponential catch-up.
    let target_x = player.rect.pos.x - COMPANION_FOLLOW_OFFSET;
    dog.rect.pos.x += (target_x - dog.rect.pos.x) * dt * COMPANION_FOLLOW_RATE;
    dog.rect.pos.y = GROUND_Y - dog.rect.size.y;

    if companion_stats.heal_per_sec > 0.0 {
        player.health = (player.health + companion_stats.heal_per_sec * dt).min(player.health_max);
    }

    auto_collect(world, dog, companion_stats, player, events);
    bite(world, dog, companion_stats, player, events, dt);

    None
}

/// Collect every pickup within the collect radius of the companion's
/// center. Collected pickups are despawned immediately so no later pass
/// can collect them again this tick.
fn auto_collect(
    world: &mut World,
    dog: &Companion,
    companion_stats: &CompanionStats,
    player: &mut Player,
    events: &mut Vec<GameEvent>,
) {
    let center = dog.rect.center();
    let radius_sq = companion_stats.collect_radius * companion_stats.collect_radius;

    let mut collected: Vec<(Entity, homebound_core::enums::PickupKind)> = Vec::new();
    for (entity, (body, pickup)) in world.query_mut::<(&Body, &Pickup)>() {
        if (body.rect.center() - center).length_squared() < radius_sq {
            collected.push((entity, pickup.kind));
        }
    }

    for (entity, kind) in collected {
        apply_pickup(player, companion_stats, kind, events);
        let _ = world.despawn(entity);
    }
}

/// On cooldown expiry, bite the first non-boss hostile inside the window
/// around the player. At most one target per expiry.
fn bite(
    world: &mut World,
    dog: &mut Companion,
    companion_stats: &CompanionStats,
    player: &Player,
    events: &mut Vec<GameEvent>,
    dt: f32,
) {
    dog.bite_timer = (dog.bite_timer - dt).max(0.0);
    if dog.bite_timer > 0.0 {
        return;
    }

    let window_lo = player.rect.pos.x - COMPANION_BITE_BEHIND;
    let window_hi = player.rect.pos.x + COMPANION_BITE_AHEAD;

    for (_entity, (body, hostile)) in world.query_mut::<(&Body, &mut Hostile)>() {
        if hostile.kind.is_boss() || hostile.health <= 0.0 {
            continue;
        }
        let x = body.rect.pos.x;
        if x > window_lo && x < window_hi {
            hostile.health -= companion_stats.bite_damage;
            dog.bite_timer = companion_stats.bite_cooldown;
            events.push(GameEvent::Hit {
                target: hostile.kind,
            });
            break;
        }
    }
}
