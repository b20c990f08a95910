//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level run state. Transitions are owned by the engine's per-phase
/// command table; no other code mutates the phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// No simulation advances. Exits via StartRun.
    #[default]
    Menu,
    /// Intro scene playback; final scene holds until input.
    Cutscene,
    /// Full simulation tick.
    Play,
    /// Simulation frozen while an upgrade offer is open.
    UpgradeSelect,
    /// Absorbing until Retry.
    GameOver,
    /// Ending scene playback; absorbing until Replay.
    Win,
}

/// Hostile variant. A closed sum: every damage table, spawn roll, and
/// behavior switch dispatches on this single discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostileKind {
    Normal,
    /// Fast, slightly smaller.
    Runner,
    /// Slow, heavily armored, hardest-hitting contact damage.
    Tank,
    /// Ranged attacker.
    Spitter,
    /// Ranged attacker on a tight cooldown; at most one alive at a time.
    Boss,
}

impl HostileKind {
    pub fn is_boss(&self) -> bool {
        matches!(self, HostileKind::Boss)
    }

    /// Whether this variant fires ranged shots.
    pub fn is_ranged(&self) -> bool {
        matches!(self, HostileKind::Spitter | HostileKind::Boss)
    }
}

/// Pickup kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Ammo,
    Med,
    Weapon,
}

/// Weapon tier, in pickup-upgrade order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    Pistol,
    Smg,
    Shotgun,
    Rifle,
}

/// Identifier for an upgrade in the fixed pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    BiteDamage,
    BiteRate,
    CollectRadius,
    PackHeal,
    MaxHealth,
    AmmoBonus,
}

/// Why an upgrade offer was opened. BossDown and CompanionFound bypass
/// the milestone throttle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OfferReason {
    BossDown,
    CompanionFound,
    Milestone,
}

impl OfferReason {
    /// Display text shown on the offer overlay.
    pub fn label(&self) -> &'static str {
        match self {
            OfferReason::BossDown => "BOSS DOWN",
            OfferReason::CompanionFound => "DOG FOUND",
            OfferReason::Milestone => "MILESTONE",
        }
    }
}
