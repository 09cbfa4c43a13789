use crate::domain::direction::next_tile;
use crate::domain::state::SimPlayer;

/// Applies the buffered input and steps the player one cell along their heading.
///
/// Players that are not on the board are left untouched, including their buffered input.
pub fn tick_player(p: &mut SimPlayer, grid_side: usize) {
    let Some(tile) = p.tile else {
        return;
    };

    if let Some(input) = p.last_input.take() {
        // No instant 180 into the player's own trail.
        if !p.direction.is_opposite(input.direction) {
            p.direction = input.direction;
        }
        p.tick = input.tick;
    }

    p.tile = Some(next_tile(tile, p.direction, grid_side));
}
