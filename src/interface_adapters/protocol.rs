// Wire protocol DTOs and conversions for public game server messages.

use crate::domain::{Direction, PlayerInput, PlayerSnapshot};
use crate::use_cases::WorldUpdate;
use serde::{Deserialize, Serialize};

/// Messages the server sends to connected clients over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Session identity; match it against `session_id` in world updates.
    Identity { player_id: String },
    // Packed map and player list for a given tick.
    WorldUpdate(WorldUpdateDto),
}

/// Messages the client sends to the server over the WebSocket.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    Input(PlayerInputDto),
}

/// Directional command: 0 = up, 1 = right, 2 = down, 3 = left, 4 = stop.
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerInputDto {
    pub direction: u8,
    #[serde(default)]
    pub tick: u64,
}

/// Input rejected at the transport boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDirection(pub u8);

impl TryFrom<PlayerInputDto> for PlayerInput {
    type Error = InvalidDirection;

    fn try_from(input: PlayerInputDto) -> Result<Self, Self::Error> {
        let direction =
            Direction::from_code(input.direction).ok_or(InvalidDirection(input.direction))?;
        Ok(Self {
            direction,
            tick: input.tick,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorldUpdateDto {
    pub tick: u64,
    // One packed tile per cell, row-major.
    pub map: Vec<u32>,
    pub players: Vec<PlayerStateDto>,
}

impl From<WorldUpdate> for WorldUpdateDto {
    fn from(update: WorldUpdate) -> Self {
        Self {
            tick: update.tick,
            map: update.map,
            players: update.players.iter().map(PlayerStateDto::from).collect(),
        }
    }
}

/// Public per-player fields.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerStateDto {
    pub id: u8,
    pub session_id: String,
    // -1 while the player is off the board.
    pub tile: i32,
    pub team: u8,
    pub direction: u8,
    pub tick: u64,
}

impl From<&PlayerSnapshot> for PlayerStateDto {
    fn from(p: &PlayerSnapshot) -> Self {
        Self {
            id: p.id,
            session_id: p.session_id.to_string(),
            tile: p.tile.and_then(|t| i32::try_from(t).ok()).unwrap_or(-1),
            team: p.team,
            direction: p.direction.code(),
            tick: p.tick,
        }
    }
}
