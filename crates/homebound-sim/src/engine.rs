//! Run engine — the core of the game.
//!
//! `RunEngine` owns the hecs world, the run-scoped records, and the phase
//! machine. It drains queued commands at the tick boundary, runs the
//! systems in a fixed order, and produces a `GameStateSnapshot` per tick.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use homebound_core::commands::Command;
use homebound_core::components::{Companion, CompanionStats, Player, RunStats};
use homebound_core::constants::*;
use homebound_core::enums::{OfferReason, RunPhase};
use homebound_core::events::GameEvent;
use homebound_core::state::{BestScore, GameStateSnapshot};

use crate::cutscene::ScenePlayer;
use crate::persistence::{MemoryScoreStore, ScoreStore};
use crate::progression::{self, UpgradeOffer};
use crate::systems;
use crate::systems::director::Director;

/// Configuration for starting a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same commands = same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The run engine. Owns the ECS world and all run state.
pub struct RunEngine {
    world: World,
    phase: RunPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<Command>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,

    player: Player,
    companion: Option<Companion>,
    companion_stats: CompanionStats,
    stats: RunStats,
    director: Director,
    offer: Option<UpgradeOffer>,
    scene: Option<ScenePlayer>,

    player_name: String,
    best: BestScore,
    store: Box<dyn ScoreStore>,
}

impl RunEngine {
    /// Create an engine with an in-memory score store.
    pub fn new(config: SimConfig) -> Self {
        Self::with_store(config, Box::new(MemoryScoreStore::new()))
    }

    /// Create an engine backed by the given score store. The stored best
    /// is loaded immediately.
    pub fn with_store(config: SimConfig, store: Box<dyn ScoreStore>) -> Self {
        let best = store.load();
        Self {
            world: World::new(),
            phase: RunPhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            player: Player::default(),
            companion: None,
            companion_stats: CompanionStats::default(),
            stats: RunStats::default(),
            director: Director::default(),
            offer: None,
            scene: None,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            best,
            store,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one frame and return the resulting snapshot. `dt` is
    /// clamped to the maximum integration step.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        self.process_commands();

        match self.phase {
            RunPhase::Play => self.run_systems(dt),
            RunPhase::Cutscene | RunPhase::Win => {
                if let Some(scene) = self.scene.as_mut() {
                    scene.advance(dt);
                }
            }
            _ => {}
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            self.phase,
            &self.stats,
            &self.player,
            &self.companion,
            &self.player_name,
            &self.best,
            self.offer.as_ref().map(|o| o.view()),
            self.scene.as_ref().map(|s| s.view()),
            events,
        )
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn companion(&self) -> Option<&Companion> {
        self.companion.as_ref()
    }

    pub fn companion_stats(&self) -> &CompanionStats {
        &self.companion_stats
    }

    pub fn best(&self) -> &BestScore {
        &self.best
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Commands that do not apply to the current
    /// phase are dropped.
    fn handle_command(&mut self, command: Command) {
        match command {
            Command::StartRun { name } => {
                if self.phase == RunPhase::Menu {
                    self.player_name = sanitize_name(&name);
                    self.begin_run();
                }
            }
            Command::Jump => {
                if self.phase == RunPhase::Play && self.player.on_ground {
                    self.player.vel_y = JUMP_VELOCITY;
                    self.player.on_ground = false;
                }
            }
            Command::Fire => {
                if self.phase == RunPhase::Play {
                    systems::combat::try_fire(
                        &mut self.world,
                        &mut self.player,
                        &mut self.rng,
                        &mut self.events,
                    );
                }
            }
            Command::Reload => {
                if self.phase == RunPhase::Play {
                    systems::combat::start_reload(&mut self.player, &mut self.events);
                }
            }
            Command::AdvanceCutscene => match self.phase {
                RunPhase::Cutscene => {
                    let done = self.scene.as_mut().map(|s| s.skip()).unwrap_or(true);
                    if done {
                        self.scene = None;
                        self.phase = RunPhase::Play;
                    }
                }
                RunPhase::Win => {
                    // The ending's final scene holds until Replay.
                    if let Some(scene) = self.scene.as_mut() {
                        scene.skip();
                    }
                }
                _ => {}
            },
            Command::SelectUpgrade { index } => {
                if self.phase == RunPhase::UpgradeSelect {
                    self.select_upgrade(index);
                }
            }
            Command::Retry => {
                if self.phase == RunPhase::GameOver {
                    self.begin_run();
                }
            }
            Command::Replay => {
                if self.phase == RunPhase::Win {
                    self.begin_run();
                }
            }
        }
    }

    /// Reset every run-scoped record and enter the intro cutscene.
    fn begin_run(&mut self) {
        self.world.clear();
        self.despawn_buffer.clear();
        self.player = Player::default();
        self.companion = None;
        self.companion_stats = CompanionStats::default();
        self.stats = RunStats::default();
        self.director = Director::default();
        self.offer = None;
        self.scene = Some(ScenePlayer::intro());
        self.phase = RunPhase::Cutscene;
    }

    /// Apply an offer choice. An out-of-range index leaves the offer open.
    fn select_upgrade(&mut self, index: usize) {
        let Some(offer) = self.offer.take() else {
            return;
        };
        match offer.choices.get(index) {
            Some(def) => {
                progression::apply(def.id, &mut self.player, &mut self.companion_stats);
                self.events.push(GameEvent::UpgradeChosen { id: def.id });
                self.phase = RunPhase::Play;
            }
            None => self.offer = Some(offer),
        }
    }

    /// Run all Play systems in order, then resolve the tick's outcome.
    fn run_systems(&mut self, dt: f32) {
        // 1. Spawning (boss threshold, hostiles, pickups)
        systems::director::run(
            &mut self.world,
            &mut self.rng,
            &mut self.director,
            &mut self.stats,
            &mut self.events,
            dt,
        );
        // 2. Integration (scroll, player physics, entity positions)
        systems::movement::run(
            &mut self.world,
            &mut self.player,
            &mut self.stats,
            &mut self.events,
            dt,
        );
        // 3. Companion (appear, discovery, follow, collect, bite)
        let found = systems::companion::run(
            &mut self.world,
            &mut self.companion,
            &self.stats,
            &self.companion_stats,
            &mut self.player,
            &mut self.events,
            dt,
        );
        // 4. Combat (shot hits, contact damage, dead sweep, collection)
        let boss_down = systems::combat::run(
            &mut self.world,
            &mut self.player,
            &self.companion_stats,
            &mut self.stats,
            &mut self.rng,
            &mut self.events,
            &mut self.despawn_buffer,
            dt,
        );
        // 5. Off-screen culling
        systems::cleanup::run(&mut self.world, &mut self.stats, &mut self.despawn_buffer);

        self.finish_tick(boss_down.or(found));
    }

    /// Terminal checks and offer opening, in priority order: win, then
    /// death, then any earned or due upgrade offer.
    fn finish_tick(&mut self, earned: Option<OfferReason>) {
        self.player.health = self.player.health.clamp(0.0, self.player.health_max);

        if self.stats.distance >= HOME_DISTANCE {
            self.phase = RunPhase::Win;
            self.scene = Some(ScenePlayer::ending());
            self.offer = None;
            self.events.push(GameEvent::Win {
                distance: self.stats.distance,
            });
            return;
        }

        if self.player.health <= 0.0 {
            self.phase = RunPhase::GameOver;
            self.offer = None;
            if self.stats.distance > self.best.distance {
                self.best = BestScore {
                    name: self.player_name.clone(),
                    distance: self.stats.distance,
                };
                self.store.save(&self.best);
            }
            self.events.push(GameEvent::GameOver {
                distance: self.stats.distance,
            });
            return;
        }

        let reason = earned.or_else(|| {
            let found = self.companion.as_ref().is_some_and(|c| c.found);
            progression::milestone_due(&self.stats, found).then_some(OfferReason::Milestone)
        });
        if let Some(reason) = reason {
            if let Some(offer) = progression::try_open(&mut self.stats, reason, &mut self.rng) {
                self.offer = Some(offer);
                self.phase = RunPhase::UpgradeSelect;
            }
        }
    }

    /// Drop the cutscene and enter Play directly (for tests).
    #[cfg(test)]
    pub fn start_play(&mut self, name: &str) {
        self.player_name = sanitize_name(name);
        self.begin_run();
        self.scene = None;
        self.phase = RunPhase::Play;
    }

    /// Spawn a non-boss hostile just past the right edge (for tests).
    #[cfg(test)]
    pub fn spawn_test_hostile(&mut self, kind: homebound_core::enums::HostileKind) {
        systems::director::spawn_hostile_of_kind(&mut self.world, &mut self.rng, kind);
    }

    /// Spawn the boss directly (for tests).
    #[cfg(test)]
    pub fn spawn_test_boss(&mut self) {
        systems::director::spawn_boss(&mut self.world, &mut self.stats, &mut self.events);
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub fn stats_mut(&mut self) -> &mut RunStats {
        &mut self.stats
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn companion_mut(&mut self) -> Option<&mut Companion> {
        self.companion.as_mut()
    }

    #[cfg(test)]
    pub fn offer(&self) -> Option<&UpgradeOffer> {
        self.offer.as_ref()
    }
}

/// Trim, truncate, and default the player name.
fn sanitize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER_NAME.to_string()
    } else {
        trimmed.chars().take(MAX_PLAYER_NAME_LEN).collect()
    }
}
