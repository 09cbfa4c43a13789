// Spawn placement, team balancing and death bookkeeping.

use super::direction::Direction;
use super::state::SimPlayer;
use super::tile::{Tile, release_player};
use super::tuning::map::{PLAYER_ID_POOL, SPAWN_BLOCK_SIDE, TEAM_COUNT};
use rand::Rng;
use std::fmt;

const SPAWN_BLOCK_TILES: usize = SPAWN_BLOCK_SIDE * SPAWN_BLOCK_SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// Every id in the pool belongs to an active player.
    IdPoolExhausted,
    /// No registered player carries this id.
    UnknownPlayer(u8),
    /// The player is already standing on the board.
    AlreadyOnBoard(u8),
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdPoolExhausted => write!(f, "no free player id"),
            Self::UnknownPlayer(id) => write!(f, "no player with id {id}"),
            Self::AlreadyOnBoard(id) => write!(f, "player {id} is already on the board"),
        }
    }
}

impl std::error::Error for SpawnError {}

/// Lowest pool id not held by any registered player.
pub fn next_free_id(players: &[SimPlayer]) -> Option<u8> {
    PLAYER_ID_POOL
        .iter()
        .copied()
        .find(|id| players.iter().all(|p| p.id != *id))
}

/// Team with the fewest registered players; exact ties are broken uniformly at random.
pub fn pick_team<R: Rng + ?Sized>(players: &[SimPlayer], rng: &mut R) -> u8 {
    let counts: Vec<(u8, usize)> = (1..=TEAM_COUNT)
        .map(|team| (team, players.iter().filter(|p| p.team == team).count()))
        .collect();
    let fewest = counts.iter().map(|(_, n)| *n).min().unwrap_or(0);
    let candidates: Vec<u8> = counts
        .into_iter()
        .filter(|(_, n)| *n == fewest)
        .map(|(team, _)| team)
        .collect();

    candidates[rng.gen_range(0..candidates.len())]
}

/// Row-major indices of a square block hugging a randomly chosen grid edge.
pub fn spawn_block<R: Rng + ?Sized>(rng: &mut R, grid_side: usize) -> [usize; SPAWN_BLOCK_TILES] {
    let max_start = grid_side - SPAWN_BLOCK_SIDE;
    let along = rng.gen_range(0..=max_start);

    // 0 = top, 1 = bottom, 2 = left, 3 = right
    let (start_x, start_y) = match rng.gen_range(0..4) {
        0 => (along, 0),
        1 => (along, max_start),
        2 => (0, along),
        _ => (max_start, along),
    };

    let mut block = [0; SPAWN_BLOCK_TILES];
    for (i, slot) in block.iter_mut().enumerate() {
        let x = start_x + i % SPAWN_BLOCK_SIDE;
        let y = start_y + i / SPAWN_BLOCK_SIDE;
        *slot = y * grid_side + x;
    }
    block
}

/// Places `player` on a fresh spawn block and returns the tile they stand on.
///
/// Anything left on the map under the player's id from a previous life is released first.
pub fn place<R: Rng + ?Sized>(
    player: &mut SimPlayer,
    tiles: &mut [Tile],
    rng: &mut R,
    grid_side: usize,
) -> usize {
    release_player(tiles, player.id);

    let block = spawn_block(rng, grid_side);
    for &index in &block {
        tiles[index].claim(player.id, player.team);
    }

    let centre = block[SPAWN_BLOCK_TILES / 2];
    player.tile = Some(centre);
    player.direction = Direction::Stop;
    player.last_input = None;
    centre
}

/// Takes `player` off the board and frees everything they held.
pub fn kill(player: &mut SimPlayer, tiles: &mut [Tile]) {
    player.mark_dead();
    release_player(tiles, player.id);
}
