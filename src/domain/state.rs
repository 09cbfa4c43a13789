// Domain-level simulation entities and input/snapshot types.

use super::direction::Direction;

/// Latest directional command received for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerInput {
    pub direction: Direction,
    pub tick: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub id: u8,
    pub session_id: u64,
    pub tile: Option<usize>,
    pub team: u8,
    pub direction: Direction,
    pub tick: u64,
}

#[derive(Debug, Clone)]
pub struct SimPlayer {
    /// Transport-level identity; stable for the whole connection.
    pub session_id: u64,
    /// Game id drawn from the id pool, stamped onto tiles.
    pub id: u8,
    pub team: u8,
    /// `None` while dead or waiting for a spawn block.
    pub tile: Option<usize>,
    pub direction: Direction,
    // Last acknowledged client input sequence (diagnostic only).
    pub tick: u64,
    // Overwritten by every new input; consumed once per tick.
    pub last_input: Option<PlayerInput>,
}

impl SimPlayer {
    pub fn new(session_id: u64, id: u8, team: u8) -> Self {
        Self {
            session_id,
            id,
            team,
            tile: None,
            direction: Direction::Stop,
            tick: 0,
            last_input: None,
        }
    }

    pub fn is_on_board(&self) -> bool {
        self.tile.is_some()
    }

    /// Takes the player off the board.
    pub fn mark_dead(&mut self) {
        self.tile = None;
        self.direction = Direction::Stop;
        self.last_input = None;
    }
}

impl From<&SimPlayer> for PlayerSnapshot {
    fn from(p: &SimPlayer) -> Self {
        Self {
            id: p.id,
            session_id: p.session_id,
            tile: p.tile,
            team: p.team,
            direction: p.direction,
            tick: p.tick,
        }
    }
}
