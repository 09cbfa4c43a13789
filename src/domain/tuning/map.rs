//! Gameplay constants for the tile grid.
//!
//! These are shared with the client: changing any of them changes the wire contract.

/// Number of tiles along one side of the square grid.
pub const GRID_SIDE: usize = 25;

/// Total tile count, row-major.
pub const TOTAL_TILES: usize = GRID_SIDE * GRID_SIDE;

/// Side length of the square block granted on spawn.
pub const SPAWN_BLOCK_SIDE: usize = 3;

/// Ids handed out to players, lowest first. 10 is intentionally absent.
pub const PLAYER_ID_POOL: [u8; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12];

/// Playable teams are numbered 1..=TEAM_COUNT; 0 means unclaimed.
pub const TEAM_COUNT: u8 = 2;
