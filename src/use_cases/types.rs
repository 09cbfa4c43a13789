// Use-case level inputs/outputs for the game loop.

use crate::domain::{PlayerInput, PlayerSnapshot, SpawnError};
use tokio::sync::oneshot;

#[derive(Debug)]
pub enum GameEvent {
    /// `reply` receives the assigned game id, or why the session could not spawn.
    Join {
        player_id: u64,
        reply: oneshot::Sender<Result<u8, SpawnError>>,
    },
    Leave { player_id: u64 },
    Input { player_id: u64, input: PlayerInput },
}

/// State republished once per tick after every player has been processed.
#[derive(Debug, Clone)]
pub struct WorldUpdate {
    pub tick: u64,
    pub map: Vec<u32>,
    pub players: Vec<PlayerSnapshot>,
}
