//! Static weapon tier table.

use crate::enums::WeaponKind;

/// Fixed stats for one weapon tier.
#[derive(Debug, Clone, Copy)]
pub struct WeaponSpec {
    pub name: &'static str,
    pub mag_size: u32,
    /// Seconds between shots.
    pub fire_interval: f32,
    /// Muzzle speed of each pellet (units/s).
    pub shot_speed: f32,
    /// Damage per pellet.
    pub damage: f32,
    /// Pellets per trigger pull (one round of ammo regardless).
    pub pellets: u32,
    /// Half-angle spread in radians, centered on horizontal.
    pub spread: f32,
}

const PISTOL: WeaponSpec = WeaponSpec {
    name: "Pistol",
    mag_size: 12,
    fire_interval: 0.22,
    shot_speed: 760.0,
    damage: 1.0,
    pellets: 1,
    spread: 0.0,
};

const SMG: WeaponSpec = WeaponSpec {
    name: "SMG",
    mag_size: 24,
    fire_interval: 0.08,
    shot_speed: 820.0,
    damage: 1.0,
    pellets: 1,
    spread: 0.08,
};

const SHOTGUN: WeaponSpec = WeaponSpec {
    name: "Shotgun",
    mag_size: 6,
    fire_interval: 0.45,
    shot_speed: 700.0,
    damage: 1.0,
    pellets: 5,
    spread: 0.35,
};

const RIFLE: WeaponSpec = WeaponSpec {
    name: "Rifle",
    mag_size: 18,
    fire_interval: 0.14,
    shot_speed: 900.0,
    damage: 2.0,
    pellets: 1,
    spread: 0.02,
};

impl WeaponKind {
    /// Static stats for this tier.
    pub fn spec(&self) -> &'static WeaponSpec {
        match self {
            WeaponKind::Pistol => &PISTOL,
            WeaponKind::Smg => &SMG,
            WeaponKind::Shotgun => &SHOTGUN,
            WeaponKind::Rifle => &RIFLE,
        }
    }

    /// Next tier, saturating at the top.
    pub fn next(&self) -> WeaponKind {
        match self {
            WeaponKind::Pistol => WeaponKind::Smg,
            WeaponKind::Smg => WeaponKind::Shotgun,
            WeaponKind::Shotgun => WeaponKind::Rifle,
            WeaponKind::Rifle => WeaponKind::Rifle,
        }
    }
}
