//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. The core
//! does not care about the originating device: a held fire button is
//! expressed by re-sending `Fire` each frame (the fire cooldown gates the
//! actual rate), while jump edge-triggering is the driver's job — one
//! `Jump` per press, never per held frame.

use serde::{Deserialize, Serialize};

/// All possible player actions. Commands invalid for the current phase
/// are silently ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Leave the menu: capture the player name, reset the run, and begin
    /// the intro cutscene.
    StartRun { name: String },
    /// Jump if grounded.
    Jump,
    /// Fire one trigger pull; starts a reload instead when the magazine
    /// is empty.
    Fire,
    /// Begin reloading (no-op if already reloading, magazine full, or
    /// reserve empty).
    Reload,
    /// Skip to the next cutscene/ending scene; on the final intro scene
    /// this starts gameplay.
    AdvanceCutscene,
    /// Choose one of the three offered upgrades.
    SelectUpgrade { index: usize },
    /// From GameOver: full run reset, back to the intro cutscene.
    Retry,
    /// From Win: full run reset, back to the intro cutscene.
    Replay,
}
