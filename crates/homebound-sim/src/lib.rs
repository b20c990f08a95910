//! Simulation engine for HOMEBOUND.
//!
//! Owns the hecs ECS world, advances the run by clamped frame deltas,
//! and produces GameStateSnapshots for the presentation layer.

pub mod cutscene;
pub mod engine;
pub mod persistence;
pub mod progression;
pub mod systems;

pub use engine::{RunEngine, SimConfig};
pub use homebound_core as core;

#[cfg(test)]
mod tests;
