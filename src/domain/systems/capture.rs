use crate::domain::flood_fill::enclosed_cells;
use crate::domain::rules::{is_capture_complete, is_capturing, is_colliding_with_capturer};
use crate::domain::direction::Direction;
use crate::domain::state::SimPlayer;
use crate::domain::tile::{Tile, release_player};

/// What one player's capture step did to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Nothing changed.
    Idle,
    /// The destination tile joined the player's trail.
    TrailExtended { tile: usize },
    /// The trail became territory, plus everything it enclosed.
    Completed { finalized: usize, enclosed: usize },
    /// The player ran into their own trail; their tiles are already released.
    SelfCollision,
    /// The player cut `victim`'s trail and took over `transferred` owned tiles.
    Eliminated { victim: u8, transferred: usize },
}

/// Resolves collision, capture completion and trail laying for `player` on the
/// tile movement just placed them on.
///
/// `tiles` is the shared decoded map for this tick and may already carry changes
/// made by players processed earlier.
pub fn resolve(player: &SimPlayer, tiles: &mut [Tile], grid_side: usize) -> CaptureOutcome {
    let Some(index) = player.tile else {
        return CaptureOutcome::Idle;
    };
    let Some(destination) = tiles.get(index).copied() else {
        return CaptureOutcome::Idle;
    };

    if is_colliding_with_capturer(&destination) {
        if player.direction == Direction::Stop {
            return CaptureOutcome::Idle;
        }

        if destination.capturing_owner == player.id {
            release_player(tiles, player.id);
            return CaptureOutcome::SelfCollision;
        }

        let victim = destination.capturing_owner;
        let transferred = eliminate(tiles, victim, player);
        return CaptureOutcome::Eliminated {
            victim,
            transferred,
        };
    }

    if is_capture_complete(&destination, player) {
        return complete_capture(tiles, player, grid_side);
    }

    if is_capturing(player, &destination) {
        tiles[index].capturing_owner = player.id;
        tiles[index].capturing_team = player.team;
        return CaptureOutcome::TrailExtended { tile: index };
    }

    CaptureOutcome::Idle
}

// Hands the victim's territory to the killer and drops the victim's trail.
fn eliminate(tiles: &mut [Tile], victim: u8, killer: &SimPlayer) -> usize {
    let mut transferred = 0;
    for tile in tiles.iter_mut() {
        if tile.owner == victim {
            tile.claim(killer.id, killer.team);
            transferred += 1;
        }
        if tile.capturing_owner == victim {
            tile.release_capture();
        }
    }
    transferred
}

fn complete_capture(tiles: &mut [Tile], player: &SimPlayer, grid_side: usize) -> CaptureOutcome {
    let trail = tiles
        .iter()
        .filter(|t| t.capturing_owner == player.id)
        .count();
    // A lone trail tile (e.g. stepping out and straight back) is not a loop.
    if trail <= 1 {
        return CaptureOutcome::Idle;
    }

    for tile in tiles.iter_mut().filter(|t| t.capturing_owner == player.id) {
        tile.claim(player.id, player.team);
        tile.release_capture();
    }

    let owners: Vec<u8> = tiles.iter().map(|t| t.owner).collect();
    let enclosed = enclosed_cells(&owners, grid_side, player.id);
    for &index in &enclosed {
        tiles[index].claim(player.id, player.team);
    }

    CaptureOutcome::Completed {
        finalized: trail,
        enclosed: enclosed.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tuning::map::{GRID_SIDE, TOTAL_TILES};

    fn empty_map() -> Vec<Tile> {
        vec![Tile::default(); TOTAL_TILES]
    }

    fn own(tiles: &mut [Tile], indices: &[usize], owner: u8, team: u8) {
        for &i in indices {
            tiles[i].claim(owner, team);
        }
    }

    fn trail(tiles: &mut [Tile], indices: &[usize], owner: u8, team: u8) {
        for &i in indices {
            tiles[i].capturing_owner = owner;
            tiles[i].capturing_team = team;
        }
    }

    fn player(id: u8, team: u8, tile: usize, direction: Direction) -> SimPlayer {
        let mut p = SimPlayer::new(u64::from(id), id, team);
        p.tile = Some(tile);
        p.direction = direction;
        p
    }

    #[test]
    fn when_player_enters_neutral_ground_then_tile_joins_their_trail() {
        let mut tiles = empty_map();
        let p = player(3, 2, 40, Direction::Down);

        let outcome = resolve(&p, &mut tiles, GRID_SIDE);

        assert_eq!(outcome, CaptureOutcome::TrailExtended { tile: 40 });
        assert_eq!(tiles[40].capturing_owner, 3);
        assert_eq!(tiles[40].capturing_team, 2);
        assert_eq!(tiles[40].owner, 0);
    }

    #[test]
    fn when_player_walks_on_own_team_ground_without_trail_then_nothing_changes() {
        let mut tiles = empty_map();
        own(&mut tiles, &[40], 8, 2);
        let before = tiles.clone();
        let p = player(3, 2, 40, Direction::Down);

        assert_eq!(resolve(&p, &mut tiles, GRID_SIDE), CaptureOutcome::Idle);
        assert_eq!(tiles, before);
    }

    #[test]
    fn when_only_one_trail_tile_exists_then_capture_does_not_complete() {
        let mut tiles = empty_map();
        own(&mut tiles, &[0, 1, 2], 5, 1);
        trail(&mut tiles, &[3], 5, 1);
        let before = tiles.clone();
        let p = player(5, 1, 2, Direction::Left);

        assert_eq!(resolve(&p, &mut tiles, GRID_SIDE), CaptureOutcome::Idle);
        assert_eq!(tiles, before);
    }

    #[test]
    fn when_two_trail_tiles_exist_then_capture_is_finalized() {
        let mut tiles = empty_map();
        own(&mut tiles, &[0, 1, 2], 5, 1);
        trail(&mut tiles, &[3, 4], 5, 1);
        let p = player(5, 1, 2, Direction::Left);

        let outcome = resolve(&p, &mut tiles, GRID_SIDE);

        assert_eq!(
            outcome,
            CaptureOutcome::Completed {
                finalized: 2,
                enclosed: 0,
            }
        );
        for i in [3, 4] {
            assert_eq!(tiles[i].owner, 5);
            assert_eq!(tiles[i].team, 1);
            assert_eq!(tiles[i].capturing_owner, 0);
            assert_eq!(tiles[i].capturing_team, 0);
        }
    }

    #[test]
    fn when_ring_is_closed_then_enclosed_cells_change_hands() {
        // Rows 1-3, cols 1-4 form a ring around 52 and 53; the right column is still trail.
        let mut tiles = empty_map();
        own(&mut tiles, &[26, 27, 28, 29, 51, 76, 77, 78], 6, 2);
        trail(&mut tiles, &[54, 79], 6, 2);
        own(&mut tiles, &[52], 9, 1);
        // Stepping left from 79 back onto owned 78.
        let p = player(6, 2, 78, Direction::Left);

        let outcome = resolve(&p, &mut tiles, GRID_SIDE);

        assert_eq!(
            outcome,
            CaptureOutcome::Completed {
                finalized: 2,
                enclosed: 2,
            }
        );
        for i in [52, 53, 54, 79] {
            assert_eq!(tiles[i].owner, 6);
            assert_eq!(tiles[i].team, 2);
            assert_eq!(tiles[i].capturing_owner, 0);
        }
        // Outside the ring nothing moved.
        assert_eq!(tiles[55], Tile::default());
        assert_eq!(tiles[0], Tile::default());
    }

    #[test]
    fn when_player_hits_own_trail_then_all_their_tiles_are_released() {
        let mut tiles = empty_map();
        own(&mut tiles, &[1, 2, 3], 5, 1);
        trail(&mut tiles, &[10, 11], 5, 1);
        own(&mut tiles, &[100], 7, 2);
        let p = player(5, 1, 11, Direction::Right);

        let outcome = resolve(&p, &mut tiles, GRID_SIDE);

        assert_eq!(outcome, CaptureOutcome::SelfCollision);
        for i in [1, 2, 3, 10, 11] {
            assert_eq!(tiles[i], Tile::default());
        }
        assert_eq!(tiles[100].owner, 7);
    }

    #[test]
    fn when_player_cuts_another_trail_then_victim_territory_is_transferred() {
        let mut tiles = empty_map();
        own(&mut tiles, &[1, 2, 3], 4, 1);
        trail(&mut tiles, &[10, 11], 4, 1);
        let killer = player(8, 2, 11, Direction::Up);

        let outcome = resolve(&killer, &mut tiles, GRID_SIDE);

        assert_eq!(
            outcome,
            CaptureOutcome::Eliminated {
                victim: 4,
                transferred: 3,
            }
        );
        for i in [1, 2, 3] {
            assert_eq!(tiles[i].owner, 8);
            assert_eq!(tiles[i].team, 2);
        }
        for i in [10, 11] {
            assert_eq!(tiles[i], Tile::default());
        }
    }

    #[test]
    fn when_stopped_on_a_contested_tile_then_nothing_is_resolved() {
        let mut tiles = empty_map();
        trail(&mut tiles, &[10], 4, 1);
        let before = tiles.clone();
        let p = player(8, 2, 10, Direction::Stop);

        assert_eq!(resolve(&p, &mut tiles, GRID_SIDE), CaptureOutcome::Idle);
        assert_eq!(tiles, before);
    }

    #[test]
    fn when_player_is_off_the_board_then_map_is_untouched() {
        let mut tiles = empty_map();
        let before = tiles.clone();
        let mut p = player(8, 2, 10, Direction::Up);
        p.tile = None;

        assert_eq!(resolve(&p, &mut tiles, GRID_SIDE), CaptureOutcome::Idle);
        p.tile = Some(TOTAL_TILES + 3);
        assert_eq!(resolve(&p, &mut tiles, GRID_SIDE), CaptureOutcome::Idle);
        assert_eq!(tiles, before);
    }
}
