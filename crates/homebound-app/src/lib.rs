//! Headless host for the run engine: a 30Hz loop thread fed by an mpsc
//! command channel, publishing snapshots through shared state.

pub mod game_loop;
