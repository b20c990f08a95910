//! Snapshot assembly: copy the visible state into plain view structs.

use hecs::World;

use homebound_core::components::{
    Body, Companion, EnemyShot, Hostile, Pickup, Player, PlayerShot, RunStats, Shot,
};
use homebound_core::state::*;

pub fn player_view(player: &Player) -> PlayerView {
    let spec = player.weapon.spec();
    PlayerView {
        rect: player.rect,
        on_ground: player.on_ground,
        health: player.health,
        health_max: player.health_max,
        weapon: player.weapon,
        weapon_name: spec.name.to_string(),
        ammo_in_mag: player.ammo_in_mag,
        mag_size: spec.mag_size,
        ammo_reserve: player.ammo_reserve,
        reloading: player.reloading,
    }
}

pub fn stats_view(stats: &RunStats, player_name: &str, best: &BestScore) -> RunStatsView {
    RunStatsView {
        distance: stats.distance,
        speed: stats.speed,
        player_name: player_name.to_string(),
        best: best.clone(),
        ..Default::default()
    }
}

pub fn hostile_views(world: &World) -> Vec<HostileView> {
    world
        .query::<(&Body, &Hostile)>()
        .iter()
        .map(|(_, (body, hostile))| HostileView {
            rect: body.rect,
            kind: hostile.kind,
            health_ratio: (hostile.health / hostile.health_max).clamp(0.0, 1.0),
        })
        .collect()
}

pub fn shot_views<M: hecs::Component>(world: &World) -> Vec<ShotView> {
    world
        .query::<(&Shot, &M)>()
        .iter()
        .map(|(_, (shot, _))| ShotView {
            pos: shot.pos,
            radius: shot.radius,
        })
        .collect()
}

pub fn pickup_views(world: &World) -> Vec<PickupView> {
    world
        .query::<(&Body, &Pickup)>()
        .iter()
        .map(|(_, (body, pickup))| PickupView {
            rect: body.rect,
            kind: pickup.kind,
        })
        .collect()
}

pub fn companion_view(companion: &Option<Companion>) -> Option<CompanionView> {
    companion.as_ref().map(|c| CompanionView {
        rect: c.rect,
        found: c.found,
    })
}

/// Assemble the full snapshot for this tick. `events` is the tick's
/// drained event list.
pub fn build(
    world: &World,
    phase: homebound_core::enums::RunPhase,
    stats: &RunStats,
    player: &Player,
    companion: &Option<Companion>,
    player_name: &str,
    best: &BestScore,
    offer: Option<OfferView>,
    cutscene: Option<SceneView>,
    events: Vec<homebound_core::events::GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        phase,
        stats: stats_view(stats, player_name, best),
        player: player_view(player),
        hostiles: hostile_views(world),
        player_shots: shot_views::<PlayerShot>(world),
        enemy_shots: shot_views::<EnemyShot>(world),
        pickups: pickup_views(world),
        companion: companion_view(companion),
        offer,
        cutscene,
        events,
    }
}
