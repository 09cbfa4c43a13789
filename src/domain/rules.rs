// Pure predicates classifying a player's relationship to the tile they enter.
// A capturing owner of 0 always means "no trail on this tile".

use super::state::SimPlayer;
use super::tile::Tile;

/// The player starts or extends a trail through `tile`.
pub fn is_capturing(player: &SimPlayer, tile: &Tile) -> bool {
    tile.team != player.team && tile.capturing_owner == 0
}

/// The player is back on their own team's ground.
pub fn is_capture_complete(tile: &Tile, player: &SimPlayer) -> bool {
    tile.team == player.team
}

/// Someone, possibly the entering player, is already laying a trail through `tile`.
pub fn is_colliding_with_capturer(tile: &Tile) -> bool {
    tile.capturing_owner != 0
}
