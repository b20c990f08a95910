//! Systems that operate on the run each Play tick, in engine order:
//! director → movement → companion → combat → cleanup. Systems are free
//! functions over the world plus the engine-owned records they touch;
//! they do not own state.

pub mod cleanup;
pub mod combat;
pub mod companion;
pub mod director;
pub mod movement;
pub mod snapshot;
