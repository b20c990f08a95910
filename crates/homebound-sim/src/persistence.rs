//! Best-score persistence.
//!
//! Storage failures never reach the simulation tick: loads degrade to the
//! default score and saves swallow errors.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use homebound_core::state::BestScore;

/// Best-score storage contract.
pub trait ScoreStore: Send {
    /// Load the stored best, or the default on any failure.
    fn load(&self) -> BestScore;
    /// Persist the best. Failures are swallowed.
    fn save(&self, best: &BestScore);
}

/// File-backed store writing pretty JSON.
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonScoreStore {
    fn load(&self) -> BestScore {
        let json = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(_) => return BestScore::default(),
        };
        serde_json::from_str(&json).unwrap_or_default()
    }

    fn save(&self, best: &BestScore) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(best) {
            let _ = fs::write(&self.path, json);
        }
    }
}

/// In-memory store for tests and headless demos. Clone handles share the
/// same slot so a test can observe what the engine saved.
#[derive(Clone, Default)]
pub struct MemoryScoreStore {
    slot: Arc<Mutex<BestScore>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self) -> BestScore {
        self.slot.lock().expect("score slot poisoned").clone()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> BestScore {
        self.stored()
    }

    fn save(&self, best: &BestScore) {
        *self.slot.lock().expect("score slot poisoned") = best.clone();
    }
}
