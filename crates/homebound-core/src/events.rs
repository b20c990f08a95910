//! Semantic events emitted by the simulation for audio and UI feedback.
//!
//! Collected during a tick and handed out with the snapshot. Consumers
//! may map them to sound or effects; the simulation is correct with no
//! listener at all.

use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A trigger pull that actually fired.
    ShotFired { weapon: WeaponKind },
    ReloadStarted,
    ReloadFinished,
    /// A player shot or companion bite connected with a hostile.
    Hit { target: HostileKind },
    /// The player took a discrete hit from an enemy shot.
    PlayerHit { damage: f32 },
    BossSpawned,
    BossDefeated,
    CompanionFound,
    PickupCollected { kind: PickupKind },
    UpgradeChosen { id: UpgradeId },
    GameOver { distance: f32 },
    Win { distance: f32 },
}
