//! Data records for simulation state.
//!
//! The first group are hecs components for transient entities (hostiles,
//! shots, pickups): plain data, no methods, logic lives in systems. The
//! second group are the run-scoped records the engine owns directly —
//! player, companion, and run stats — rebuilt whole on run reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{HostileKind, PickupKind, WeaponKind};
use crate::types::Rect;

// --- ECS components ---

/// Rectangular body for hostiles and pickups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rect,
}

/// Hostile state. Variant-specific behavior dispatches on `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hostile {
    pub kind: HostileKind,
    /// May go negative transiently between damage and the dead sweep.
    pub health: f32,
    pub health_max: f32,
    /// Own speed, added to the world scroll speed.
    pub speed: f32,
    /// Ranged attack countdown (only consulted for ranged kinds).
    pub attack_timer: f32,
    pub anim_clock: f32,
}

/// A projectile in flight, used for both player fire and hostile spit.
/// Marker components distinguish the two.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shot {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub damage: f32,
}

/// Marks a shot fired by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShot;

/// Marks a shot fired by a hostile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyShot;

/// A collectible on the road.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
}

// --- Engine-owned run records ---

/// The player character. Exactly one per run; rebuilt on run reset.
///
/// Invariants held outside of a tick: `0 <= ammo_in_mag <= mag size`,
/// `0 <= health <= health_max`, and at most one of {cooldown active,
/// reloading} at a time (firing requires both idle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity (positive = down).
    pub vel_y: f32,
    pub on_ground: bool,
    pub health: f32,
    pub health_max: f32,
    pub weapon: WeaponKind,
    pub ammo_in_mag: u32,
    pub ammo_reserve: u32,
    /// Seconds until the next shot is allowed.
    pub fire_cooldown: f32,
    pub reloading: bool,
    /// Remaining reload time; only meaningful while `reloading`.
    pub reload_timer: f32,
    pub anim_clock: f32,
}

impl Default for Player {
    fn default() -> Self {
        let weapon = WeaponKind::Pistol;
        Self {
            rect: Rect::new(
                PLAYER_X,
                GROUND_Y - PLAYER_HEIGHT,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            vel_y: 0.0,
            on_ground: true,
            health: PLAYER_MAX_HEALTH,
            health_max: PLAYER_MAX_HEALTH,
            weapon,
            ammo_in_mag: weapon.spec().mag_size,
            ammo_reserve: START_RESERVE_AMMO,
            fire_cooldown: 0.0,
            reloading: false,
            reload_timer: 0.0,
            anim_clock: 0.0,
        }
    }
}

/// The dog. Appears unfound, drifting in from off-screen; once found it
/// follows the player and participates in combat and collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Companion {
    pub rect: Rect,
    pub found: bool,
    /// Bite countdown (only ticks once found).
    pub bite_timer: f32,
    pub anim_clock: f32,
}

impl Companion {
    /// A freshly appeared, unfound companion just past the right edge.
    pub fn appearing() -> Self {
        Self {
            rect: Rect::new(
                PLAYFIELD_WIDTH + 20.0,
                GROUND_Y - COMPANION_HEIGHT,
                COMPANION_WIDTH,
                COMPANION_HEIGHT,
            ),
            found: false,
            bite_timer: COMPANION_FIRST_BITE_DELAY,
            anim_clock: 0.0,
        }
    }
}

/// Upgradeable companion stat block. Lives on the engine (not the
/// companion) so upgrades chosen before discovery still stick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionStats {
    pub collect_radius: f32,
    pub bite_damage: f32,
    pub bite_cooldown: f32,
    pub heal_per_sec: f32,
    /// Extra reserve ammo per ammo pickup.
    pub ammo_bonus: u32,
}

impl Default for CompanionStats {
    fn default() -> Self {
        Self {
            collect_radius: COMPANION_COLLECT_RADIUS,
            bite_damage: COMPANION_BITE_DAMAGE,
            bite_cooldown: COMPANION_BITE_COOLDOWN,
            heal_per_sec: 0.0,
            ammo_bonus: 0,
        }
    }
}

/// Run-wide progression state, owned by the engine and reset per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// Cumulative distance traveled.
    pub distance: f32,
    /// Current scroll speed; ramps monotonically toward the cap.
    pub speed: f32,
    /// Distance threshold for the next boss spawn.
    pub next_boss_at: f32,
    pub boss_alive: bool,
    /// Distance at which the last upgrade offer was opened.
    pub last_upgrade_at: f32,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            distance: 0.0,
            speed: START_SCROLL_SPEED,
            next_boss_at: FIRST_BOSS_AT,
            boss_alive: false,
            last_upgrade_at: 0.0,
        }
    }
}
