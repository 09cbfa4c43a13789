use crate::use_cases::{GameEvent, WorldUpdate};
use axum::extract::ws::Utf8Bytes;
use std::sync::Arc;
use tokio::sync::{Notify, broadcast, mpsc, watch};

#[derive(Clone)]
pub struct AppState {
    // Joins, leaves and inputs flowing from the network into the world task.
    pub input_tx: mpsc::Sender<GameEvent>,
    // World updates produced by the world task (domain structs).
    pub world_tx: broadcast::Sender<WorldUpdate>,
    // Serialized world updates, shared across all connections.
    pub world_bytes_tx: broadcast::Sender<Utf8Bytes>,
    // Latest serialized world update for lag recovery.
    pub world_latest_tx: watch::Sender<Utf8Bytes>,
    // Stops the world task once the HTTP server is done.
    pub shutdown: Arc<Notify>,
}
