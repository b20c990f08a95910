//! Headless demo driver: starts a run, skips the intro, and autoplays
//! with a simple trigger-happy policy, logging the HUD once a second.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use log::info;

use homebound_app::game_loop::{spawn_game_loop, LoopCommand, SharedSnapshot};
use homebound_core::commands::Command;
use homebound_core::enums::RunPhase;

const SCORE_FILE: &str = "homebound_best.json";
const DEMO_LIMIT: Duration = Duration::from_secs(120);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "Runner".to_string());

    let latest = SharedSnapshot::default();
    let tx = spawn_game_loop(Some(SCORE_FILE.into()), latest.clone());

    send(&tx, Command::StartRun { name });
    for _ in 0..5 {
        send(&tx, Command::AdvanceCutscene);
    }

    let started = Instant::now();
    let mut last_hud = Instant::now();

    while started.elapsed() < DEMO_LIMIT {
        std::thread::sleep(Duration::from_millis(33));
        let Some(snap) = latest.lock().unwrap().clone() else {
            continue;
        };

        match snap.phase {
            RunPhase::Play => {
                send(&tx, Command::Fire);
                // Hop over anything closing in at ground level.
                let threat_near = snap
                    .hostiles
                    .iter()
                    .any(|h| h.rect.pos.x < snap.player.rect.right() + 90.0);
                if threat_near && snap.player.on_ground {
                    send(&tx, Command::Jump);
                }
            }
            RunPhase::UpgradeSelect => {
                if let Some(offer) = &snap.offer {
                    info!("offer [{}]: taking {}", offer.reason_label, offer.choices[0].title);
                }
                send(&tx, Command::SelectUpgrade { index: 0 });
            }
            RunPhase::GameOver => {
                info!(
                    "run over at {:.0}m (best: {:.0}m by {})",
                    snap.stats.distance, snap.stats.best.distance, snap.stats.best.name
                );
                break;
            }
            RunPhase::Win => {
                info!("made it home at {:.0}m", snap.stats.distance);
                break;
            }
            _ => {}
        }

        if last_hud.elapsed() >= Duration::from_secs(1) && snap.phase == RunPhase::Play {
            last_hud = Instant::now();
            info!(
                "{:>5.0}m  hp {:>3.0}/{:<3.0}  {} {}/{} (+{})  hostiles {}",
                snap.stats.distance,
                snap.player.health,
                snap.player.health_max,
                snap.player.weapon_name,
                snap.player.ammo_in_mag,
                snap.player.mag_size,
                snap.player.ammo_reserve,
                snap.hostiles.len(),
            );
        }
    }

    let _ = tx.send(LoopCommand::Shutdown);
}

fn send(tx: &Sender<LoopCommand>, command: Command) {
    let _ = tx.send(LoopCommand::Player(command));
}
