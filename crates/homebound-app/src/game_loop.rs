//! Game loop thread — runs the engine at 30Hz and publishes snapshots.
//!
//! The engine is created inside the thread so it never crosses a thread
//! boundary. Commands arrive via `mpsc`; the latest snapshot sits in a
//! shared slot for synchronous polling by the host.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::debug;

use homebound_core::commands::Command;
use homebound_core::state::GameStateSnapshot;
use homebound_sim::engine::{RunEngine, SimConfig};
use homebound_sim::persistence::JsonScoreStore;

/// Ticks per second.
pub const TICK_RATE: u32 = 30;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Messages accepted by the loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    Player(Command),
    Shutdown,
}

/// Shared slot holding the most recent snapshot.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Spawn the game loop in a new thread. Returns the command sender.
///
/// With a `score_path` the best run persists across launches; without
/// one it is kept in memory only.
pub fn spawn_game_loop(
    score_path: Option<PathBuf>,
    latest_snapshot: SharedSnapshot,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("homebound-game-loop".into())
        .spawn(move || {
            let engine = match score_path {
                Some(path) => RunEngine::with_store(
                    SimConfig::default(),
                    Box::new(JsonScoreStore::new(path)),
                ),
                None => RunEngine::new(SimConfig::default()),
            };
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn game loop thread");

    cmd_tx
}

/// The loop body. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut engine: RunEngine,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let dt = TICK_DURATION.as_secs_f32();
    let mut next_tick_time = Instant::now();

    loop {
        // Drain all pending commands.
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        let snapshot = engine.tick(dt);
        for event in &snapshot.events {
            debug!("event: {event:?}");
        }

        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}
