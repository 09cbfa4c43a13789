// Explicit simulation context: player registry plus the packed map, advanced one tick at a time.

use super::lifecycle::{self, SpawnError};
use super::state::{PlayerInput, PlayerSnapshot, SimPlayer};
use super::systems::capture::{self, CaptureOutcome};
use super::systems::movement;
use super::tile::{Tile, decode_map, encode_map, release_player};
use super::tuning::map::{GRID_SIDE, TOTAL_TILES};
use rand::Rng;
use tracing::{debug, info, warn};

/// Side effects of a tick that the orchestrator has to act on or report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The player left the board; a respawn should be scheduled.
    PlayerDied { id: u8 },
    /// `to` cut `from`'s trail and received `tiles` owned tiles.
    OwnershipTransferred { from: u8, to: u8, tiles: usize },
    CaptureCompleted { id: u8, finalized: usize, enclosed: usize },
}

#[derive(Debug, Clone)]
pub struct Simulation {
    tick: u64,
    map: Vec<u32>,
    // Join order; this is the processing order within a tick.
    players: Vec<SimPlayer>,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    pub fn new() -> Self {
        Self {
            tick: 0,
            map: vec![0; TOTAL_TILES],
            players: Vec::new(),
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Packed map as last published.
    pub fn encoded_map(&self) -> &[u32] {
        &self.map
    }

    pub fn tiles(&self) -> Vec<Tile> {
        decode_map(&self.map)
    }

    pub fn players(&self) -> &[SimPlayer] {
        &self.players
    }

    pub fn player_by_session(&self, session_id: u64) -> Option<&SimPlayer> {
        self.players.iter().find(|p| p.session_id == session_id)
    }

    pub fn snapshots(&self) -> Vec<PlayerSnapshot> {
        self.players.iter().map(PlayerSnapshot::from).collect()
    }

    /// Registers a new session and drops it onto a spawn block. Returns the game id.
    pub fn join<R: Rng + ?Sized>(&mut self, session_id: u64, rng: &mut R) -> Result<u8, SpawnError> {
        if let Some(existing) = self.player_by_session(session_id) {
            debug!(session_id, id = existing.id, "session already joined");
            return Ok(existing.id);
        }

        let id = lifecycle::next_free_id(&self.players).ok_or(SpawnError::IdPoolExhausted)?;
        let team = lifecycle::pick_team(&self.players, rng);
        let mut player = SimPlayer::new(session_id, id, team);

        let mut tiles = decode_map(&self.map);
        let tile = lifecycle::place(&mut player, &mut tiles, rng, GRID_SIDE);
        self.map = encode_map(&tiles);

        info!(session_id, id, team, tile, "player spawned");
        self.players.push(player);
        Ok(id)
    }

    /// Removes the session's player and frees their tiles. Returns the freed game id.
    pub fn leave(&mut self, session_id: u64) -> Option<u8> {
        let index = self.players.iter().position(|p| p.session_id == session_id)?;
        let player = self.players.remove(index);

        let mut tiles = decode_map(&self.map);
        release_player(&mut tiles, player.id);
        self.map = encode_map(&tiles);

        Some(player.id)
    }

    /// Buffers the latest input for a session, replacing any unconsumed one.
    pub fn set_input(&mut self, session_id: u64, input: PlayerInput) -> bool {
        match self.players.iter_mut().find(|p| p.session_id == session_id) {
            Some(p) => {
                p.last_input = Some(input);
                true
            }
            None => false,
        }
    }

    /// Puts a dead player back on a fresh block, keeping id and team.
    pub fn respawn<R: Rng + ?Sized>(&mut self, id: u8, rng: &mut R) -> Result<usize, SpawnError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(SpawnError::UnknownPlayer(id))?;
        if player.is_on_board() {
            return Err(SpawnError::AlreadyOnBoard(id));
        }

        let mut tiles = decode_map(&self.map);
        let tile = lifecycle::place(player, &mut tiles, rng, GRID_SIDE);
        self.map = encode_map(&tiles);

        info!(id, team = player.team, tile, "player respawned");
        Ok(tile)
    }

    /// Advances every player once, in join order, against a single decoded map.
    pub fn step(&mut self) -> Vec<TickEvent> {
        let mut tiles = decode_map(&self.map);
        let mut events = Vec::new();

        for index in 0..self.players.len() {
            let player = &mut self.players[index];
            if !player.is_on_board() {
                continue;
            }

            movement::tick_player(player, GRID_SIDE);
            let id = player.id;

            match capture::resolve(player, &mut tiles, GRID_SIDE) {
                CaptureOutcome::Idle | CaptureOutcome::TrailExtended { .. } => {}
                CaptureOutcome::Completed {
                    finalized,
                    enclosed,
                } => {
                    debug!(id, finalized, enclosed, "capture completed");
                    events.push(TickEvent::CaptureCompleted {
                        id,
                        finalized,
                        enclosed,
                    });
                }
                CaptureOutcome::SelfCollision => {
                    info!(id, "player ran into own trail");
                    self.players[index].mark_dead();
                    events.push(TickEvent::PlayerDied { id });
                }
                CaptureOutcome::Eliminated {
                    victim,
                    transferred,
                } => {
                    info!(victim, killer = id, transferred, "player eliminated");
                    events.push(TickEvent::OwnershipTransferred {
                        from: victim,
                        to: id,
                        tiles: transferred,
                    });
                    match self.players.iter_mut().find(|p| p.id == victim) {
                        Some(v) => {
                            lifecycle::kill(v, &mut tiles);
                            events.push(TickEvent::PlayerDied { id: victim });
                        }
                        None => warn!(victim, "eliminated trail had no registered player"),
                    }
                }
            }
        }

        self.map = encode_map(&tiles);
        self.tick += 1;
        events
    }
}
