//! Game state snapshot — the complete visible state handed to the
//! presentation layer after each tick. Read-only views; the renderer
//! never touches live simulation state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::HOME_DISTANCE;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::Rect;

/// Complete game state produced by each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub phase: RunPhase,
    pub stats: RunStatsView,
    pub player: PlayerView,
    pub hostiles: Vec<HostileView>,
    pub player_shots: Vec<ShotView>,
    pub enemy_shots: Vec<ShotView>,
    pub pickups: Vec<PickupView>,
    pub companion: Option<CompanionView>,
    /// Present only while an offer is open (UpgradeSelect).
    pub offer: Option<OfferView>,
    /// Present during Cutscene and Win playback.
    pub cutscene: Option<SceneView>,
    /// Semantic events that occurred this tick.
    pub events: Vec<GameEvent>,
}

/// HUD-level run progression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStatsView {
    pub distance: f32,
    pub speed: f32,
    pub home_distance: f32,
    pub player_name: String,
    pub best: BestScore,
}

impl Default for RunStatsView {
    fn default() -> Self {
        Self {
            distance: 0.0,
            speed: 0.0,
            home_distance: HOME_DISTANCE,
            player_name: String::new(),
            best: BestScore::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub on_ground: bool,
    pub health: f32,
    pub health_max: f32,
    pub weapon: WeaponKind,
    pub weapon_name: String,
    pub ammo_in_mag: u32,
    pub mag_size: u32,
    pub ammo_reserve: u32,
    pub reloading: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileView {
    pub rect: Rect,
    pub kind: HostileKind,
    /// health / health_max, clamped to [0, 1] for bar rendering.
    pub health_ratio: f32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShotView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub rect: Rect,
    pub kind: PickupKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanionView {
    pub rect: Rect,
    pub found: bool,
}

/// One upgrade choice with its display text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeView {
    pub id: UpgradeId,
    pub title: String,
    pub description: String,
}

/// An open upgrade offer: exactly three distinct choices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferView {
    pub reason: OfferReason,
    pub reason_label: String,
    pub choices: Vec<UpgradeView>,
}

/// Current cutscene/ending scene and its local clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneView {
    pub index: usize,
    pub elapsed: f32,
    pub text: String,
    pub subtext: String,
    /// True on the final scene, which holds for input.
    pub holding: bool,
}

/// Persisted best run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestScore {
    pub name: String,
    pub distance: f32,
}

impl Default for BestScore {
    fn default() -> Self {
        Self {
            name: "—".to_string(),
            distance: 0.0,
        }
    }
}
