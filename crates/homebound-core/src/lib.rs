//! Core types and definitions for the HOMEBOUND run simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, weapon tables, and
//! constants. It has no dependency on any runtime or presentation layer.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
pub mod weapons;
