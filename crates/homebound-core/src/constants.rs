//! Simulation constants and tuning parameters.
//!
//! Gameplay numbers are tunable defaults; the formulas that consume them
//! are the contract.

// --- Frame timing ---

/// Largest time delta a single tick will integrate (seconds). Frames that
/// arrive later than this are clamped to bound the integration step.
pub const MAX_FRAME_DT: f32 = 0.033;

// --- Playfield ---

/// Visible playfield width (units). Entities spawn just past the right edge.
pub const PLAYFIELD_WIDTH: f32 = 960.0;

/// Ground line y (top of the road surface).
pub const GROUND_Y: f32 = 430.0;

/// Cumulative distance at which the run is won.
pub const HOME_DISTANCE: f32 = 2200.0;

// --- Scroll speed & distance ---

/// Scroll speed at run start (units/s).
pub const START_SCROLL_SPEED: f32 = 260.0;

/// Scroll speed cap.
pub const MAX_SCROLL_SPEED: f32 = 460.0;

/// Scroll speed ramp per second.
pub const SCROLL_SPEED_RAMP: f32 = 4.5;

/// Distance gained per unit of scroll: distance += speed * dt * this.
pub const DISTANCE_RATE: f32 = 0.02;

// --- Player ---

pub const PLAYER_X: f32 = 140.0;
pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 60.0;
pub const PLAYER_MAX_HEALTH: f32 = 100.0;

/// Downward acceleration (units/s²).
pub const GRAVITY: f32 = 1300.0;

/// Initial vertical velocity of a jump (negative = up).
pub const JUMP_VELOCITY: f32 = -520.0;

/// Reserve ammo at run start.
pub const START_RESERVE_AMMO: u32 = 60;

/// Hard cap on reserve ammo.
pub const RESERVE_AMMO_CAP: u32 = 260;

/// Seconds to complete a reload.
pub const RELOAD_TIME: f32 = 1.0;

// --- Difficulty easing multipliers ---

pub const HOSTILE_HP_MULT: f32 = 0.80;
pub const HOSTILE_SPEED_MULT: f32 = 0.85;
pub const CONTACT_DAMAGE_MULT: f32 = 0.65;

// --- Population caps ---

/// Max simultaneous non-boss hostiles.
pub const MAX_HOSTILES: usize = 6;

/// Stricter cap while a boss is alive.
pub const MAX_HOSTILES_DURING_BOSS: usize = 3;

// --- Spawn pacing ---

/// Global slowdown multiplier on the hostile spawn interval.
pub const SPAWN_SLOWDOWN: f32 = 1.35;

/// Floor on the hostile spawn interval (seconds).
pub const MIN_HOSTILE_SPAWN_INTERVAL: f32 = 0.65;

/// Hostile interval formula: max(floor, (base - distance/scale) * slowdown).
pub const HOSTILE_SPAWN_BASE: f32 = 1.55;
pub const HOSTILE_SPAWN_DISTANCE_SCALE: f32 = 520.0;

/// Pickup spawn interval bounds (seconds).
pub const PICKUP_SPAWN_MIN: f32 = 1.0;
pub const PICKUP_SPAWN_MAX: f32 = 2.2;

/// Chance a pickup spawn is suppressed while a boss is alive.
pub const PICKUP_SUPPRESS_DURING_BOSS: f64 = 0.4;

// --- Hostile type gating (distance threshold, roll threshold) ---

pub const RUNNER_MIN_DISTANCE: f32 = 120.0;
pub const RUNNER_ROLL: f64 = 0.18;
pub const TANK_MIN_DISTANCE: f32 = 200.0;
pub const TANK_ROLL: f64 = 0.28;
pub const SPITTER_MIN_DISTANCE: f32 = 160.0;
pub const SPITTER_ROLL: f64 = 0.38;

// --- Hostile contact damage (per second, before CONTACT_DAMAGE_MULT) ---

pub const CONTACT_DAMAGE_NORMAL: f32 = 24.0;
pub const CONTACT_DAMAGE_RUNNER: f32 = 28.0;
pub const CONTACT_DAMAGE_TANK: f32 = 40.0;
pub const CONTACT_DAMAGE_BOSS: f32 = 55.0;

// --- Ranged attacks ---

/// Hostiles hold fire until they are this far inside the right edge.
pub const RANGED_FIRE_EDGE_MARGIN: f32 = 160.0;

pub const SPITTER_SHOT_SPEED: f32 = 340.0;
pub const SPITTER_SHOT_DAMAGE: f32 = 10.0;
pub const SPITTER_SHOT_RADIUS: f32 = 5.0;
pub const SPITTER_ATTACK_MIN: f32 = 1.2;
pub const SPITTER_ATTACK_MAX: f32 = 2.0;

pub const BOSS_SHOT_SPEED: f32 = 520.0;
pub const BOSS_SHOT_DAMAGE: f32 = 14.0;
pub const BOSS_SHOT_RADIUS: f32 = 7.0;
pub const BOSS_ATTACK_MIN: f32 = 0.5;
pub const BOSS_ATTACK_MAX: f32 = 0.9;

/// Player shot hit radius.
pub const PLAYER_SHOT_RADIUS: f32 = 4.0;

// --- Boss ---

/// Distance threshold for the first boss.
pub const FIRST_BOSS_AT: f32 = 500.0;

/// Threshold increment after each boss fight.
pub const BOSS_INTERVAL: f32 = 500.0;

pub const BOSS_WIDTH: f32 = 120.0;
pub const BOSS_HEIGHT: f32 = 170.0;

/// Boss base hp: (base + distance / scale), then eased.
pub const BOSS_BASE_HP: f32 = 60.0;
pub const BOSS_HP_DISTANCE_SCALE: f32 = 10.0;
pub const BOSS_HP_MULT: f32 = 0.85;
pub const BOSS_SPEED: f32 = 15.0;
pub const BOSS_SPEED_MULT: f32 = 0.90;

// --- Pickups ---

pub const PICKUP_SIZE: f32 = 26.0;

/// Kind roll: r < MED_ROLL -> Med; r < WEAPON_ROLL (past gate) -> Weapon.
pub const PICKUP_MED_ROLL: f64 = 0.23;
pub const PICKUP_WEAPON_ROLL: f64 = 0.33;
pub const PICKUP_WEAPON_MIN_DISTANCE: f32 = 80.0;

pub const AMMO_PICKUP_AMOUNT: u32 = 20;
pub const MED_PICKUP_HEAL: f32 = 35.0;
pub const WEAPON_PICKUP_RESERVE_BONUS: u32 = 50;

/// Chance a non-boss death drops an ammo pickup.
pub const DEATH_AMMO_DROP_CHANCE: f64 = 0.10;

/// A defeated boss drops its weapon pickup this far ahead of the player.
pub const BOSS_DROP_OFFSET: f32 = 260.0;

// --- Companion ---

/// Cumulative distance at which the companion appears (unfound).
pub const COMPANION_APPEAR_DISTANCE: f32 = 160.0;

pub const COMPANION_WIDTH: f32 = 34.0;
pub const COMPANION_HEIGHT: f32 = 24.0;

/// Proximity (ahead of the player) that triggers discovery.
pub const COMPANION_DISCOVER_RANGE: f32 = 60.0;

/// Found companion trails the player by this much.
pub const COMPANION_FOLLOW_OFFSET: f32 = 55.0;

/// Follow lerp rate (per second).
pub const COMPANION_FOLLOW_RATE: f32 = 6.0;

/// Bite target window relative to player x: [-behind, +ahead].
pub const COMPANION_BITE_BEHIND: f32 = 40.0;
pub const COMPANION_BITE_AHEAD: f32 = 230.0;

/// Bite timer value when the companion first appears.
pub const COMPANION_FIRST_BITE_DELAY: f32 = 1.2;

// Base companion stats (upgradeable).
pub const COMPANION_COLLECT_RADIUS: f32 = 70.0;
pub const COMPANION_BITE_DAMAGE: f32 = 2.0;
pub const COMPANION_BITE_COOLDOWN: f32 = 2.2;
pub const COMPANION_MIN_BITE_COOLDOWN: f32 = 0.8;

// --- Upgrades ---

/// Minimum distance between non-guaranteed offers.
pub const OFFER_THROTTLE_DISTANCE: f32 = 120.0;

/// Proactive milestone offer: distance past this ...
pub const MILESTONE_MIN_DISTANCE: f32 = 250.0;
/// ... and this far past the last offer, with no boss alive.
pub const MILESTONE_OFFER_GAP: f32 = 350.0;

// --- Culling bounds (trailing edge / off-screen) ---

pub const HOSTILE_CULL_X: f32 = -120.0;
pub const ENEMY_SHOT_CULL_X: f32 = -100.0;
pub const PLAYER_SHOT_CULL_MARGIN: f32 = 60.0;
pub const PICKUP_CULL_X: f32 = -60.0;

// --- Normal hostile base stats ---

pub const NORMAL_HP: f32 = 2.0;
pub const NORMAL_SPEED_MIN: f32 = 40.0;
pub const NORMAL_SPEED_MAX: f32 = 95.0;
pub const NORMAL_HEIGHT_MIN: f32 = 45.0;
pub const NORMAL_HEIGHT_MAX: f32 = 72.0;
/// Width as a fraction of height.
pub const HOSTILE_ASPECT: f32 = 0.7;

pub const RUNNER_HP: f32 = 2.0;
pub const RUNNER_SPEED_MIN: f32 = 120.0;
pub const RUNNER_SPEED_MAX: f32 = 170.0;
pub const RUNNER_SIZE_MULT: f32 = 0.9;

pub const TANK_HP: f32 = 10.0;
pub const TANK_SPEED_MIN: f32 = 20.0;
pub const TANK_SPEED_MAX: f32 = 55.0;
pub const TANK_SIZE_MULT: f32 = 1.15;

pub const SPITTER_HP: f32 = 4.0;
pub const SPITTER_SPEED_MIN: f32 = 45.0;
pub const SPITTER_SPEED_MAX: f32 = 85.0;
/// Spitter's first-attack re-arm at spawn is tighter than its steady rate.
pub const SPITTER_SPAWN_ATTACK_MIN: f32 = 0.9;
pub const SPITTER_SPAWN_ATTACK_MAX: f32 = 1.6;

/// Non-spitter spawn attack timer (unused unless the kind is ranged).
pub const DEFAULT_ATTACK_MIN: f32 = 1.2;
pub const DEFAULT_ATTACK_MAX: f32 = 2.2;

// --- Run identity ---

/// Player name fallback and max length.
pub const DEFAULT_PLAYER_NAME: &str = "Runner";
pub const MAX_PLAYER_NAME_LEN: usize = 16;
