use super::respawn::RespawnQueue;
use super::types::{GameEvent, WorldUpdate};
use crate::domain::tuning::player::PlayerTuning;
use crate::domain::{Simulation, TickEvent};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc};
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Timing knobs for a single world loop.
#[derive(Debug, Clone, Copy)]
pub struct WorldSettings {
    /// Fixed simulation step.
    pub tick_interval: Duration,
    pub player_tuning: PlayerTuning,
}

pub async fn world_task(
    mut input_rx: mpsc::Receiver<GameEvent>,
    world_tx: broadcast::Sender<WorldUpdate>,
    settings: WorldSettings,
    shutdown: Arc<Notify>,
) {
    let mut sim = Simulation::new();
    let mut respawns = RespawnQueue::default();
    let mut rng = StdRng::from_entropy();

    // Drive the fixed-step game loop at the configured tick rate.
    let mut interval = tokio::time::interval(settings.tick_interval);

    loop {
        tokio::select! {
            _ = shutdown.notified() => {
                info!("world task shutting down");
                break;
            }
            _ = interval.tick() => {}
        }

        // Only the newest input per player survives until the step below.
        while let Ok(ev) = input_rx.try_recv() {
            match ev {
                GameEvent::Join { player_id, reply } => {
                    let joined = sim.join(player_id, &mut rng);
                    match &joined {
                        Ok(id) => info!(player_id, id, "player joined"),
                        Err(e) => warn!(player_id, error = %e, "join rejected"),
                    }
                    // The connection may already be gone.
                    let _ = reply.send(joined);
                }
                GameEvent::Leave { player_id } => {
                    if let Some(id) = sim.leave(player_id) {
                        respawns.cancel(id);
                        info!(player_id, id, "player left");
                    }
                }
                GameEvent::Input { player_id, input } => {
                    if !sim.set_input(player_id, input) {
                        debug!(player_id, "input for unknown player dropped");
                    }
                }
            }
        }

        let now = Instant::now();
        if !respawns.is_empty() {
            for id in respawns.take_due(now) {
                if let Err(e) = sim.respawn(id, &mut rng) {
                    warn!(id, error = %e, "respawn skipped");
                }
            }
        }

        for event in sim.step() {
            match event {
                TickEvent::PlayerDied { id } => {
                    respawns.schedule(id, now, settings.player_tuning.respawn_delay);
                    info!(
                        id,
                        respawn_in_ms = settings.player_tuning.respawn_delay.as_millis(),
                        pending_respawns = respawns.len(),
                        "player died"
                    );
                }
                TickEvent::OwnershipTransferred { from, to, tiles } => {
                    debug!(from, to, tiles, "territory transferred");
                }
                TickEvent::CaptureCompleted {
                    id,
                    finalized,
                    enclosed,
                } => {
                    debug!(id, finalized, enclosed, "territory claimed");
                }
            }
        }

        // No receivers is fine: nobody may be connected yet.
        let _ = world_tx.send(WorldUpdate {
            tick: sim.tick(),
            map: sim.encoded_map().to_vec(),
            players: sim.snapshots(),
        });
    }
}
