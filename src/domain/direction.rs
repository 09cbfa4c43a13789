// Headings and single-cell grid movement.

/// Player heading. Discriminants match the wire codes sent by clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
    #[default]
    Stop = 4,
}

impl Direction {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Up),
            1 => Some(Self::Right),
            2 => Some(Self::Down),
            3 => Some(Self::Left),
            4 => Some(Self::Stop),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// True when `proposed` would turn a moving player straight back onto their
    /// own path. Nothing is opposite to `Stop`.
    pub fn is_opposite(self, proposed: Direction) -> bool {
        matches!(
            (self, proposed),
            (Self::Up, Self::Down)
                | (Self::Down, Self::Up)
                | (Self::Left, Self::Right)
                | (Self::Right, Self::Left)
        )
    }
}

/// Index of the cell one step from `current` in `direction`.
///
/// Grid edges are walls: a step that would leave the grid returns `current`.
pub fn next_tile(current: usize, direction: Direction, grid_side: usize) -> usize {
    let row = current / grid_side;
    let col = current % grid_side;

    let (row, col) = match direction {
        Direction::Stop => return current,
        Direction::Up => (row.checked_sub(1), Some(col)),
        Direction::Down => (Some(row + 1), Some(col)),
        Direction::Left => (Some(row), col.checked_sub(1)),
        Direction::Right => (Some(row), Some(col + 1)),
    };

    match (row, col) {
        (Some(row), Some(col)) if row < grid_side && col < grid_side => row * grid_side + col,
        _ => current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tuning::map::{GRID_SIDE, TOTAL_TILES};
    use proptest::prelude::*;

    const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Stop,
    ];

    #[test]
    fn when_heading_reverses_then_it_is_opposite() {
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn when_stopped_then_any_heading_is_allowed() {
        for proposed in ALL {
            assert!(!Direction::Stop.is_opposite(proposed));
        }
    }

    #[test]
    fn when_moving_off_an_edge_then_tile_is_unchanged() {
        assert_eq!(next_tile(0, Direction::Up, GRID_SIDE), 0);
        assert_eq!(next_tile(0, Direction::Left, GRID_SIDE), 0);
        assert_eq!(next_tile(24, Direction::Right, GRID_SIDE), 24);
        assert_eq!(next_tile(624, Direction::Down, GRID_SIDE), 624);
        assert_eq!(next_tile(600, Direction::Left, GRID_SIDE), 600);
    }

    #[test]
    fn when_moving_inside_the_grid_then_one_cell_is_crossed() {
        assert_eq!(next_tile(26, Direction::Up, GRID_SIDE), 1);
        assert_eq!(next_tile(26, Direction::Down, GRID_SIDE), 51);
        assert_eq!(next_tile(26, Direction::Left, GRID_SIDE), 25);
        assert_eq!(next_tile(26, Direction::Right, GRID_SIDE), 27);
    }

    #[test]
    fn when_wire_code_is_unknown_then_no_direction_is_parsed() {
        assert_eq!(Direction::from_code(1), Some(Direction::Right));
        assert_eq!(Direction::from_code(5), None);
    }

    proptest! {
        #[test]
        fn when_any_move_is_resolved_then_result_stays_on_the_grid(
            tile in 0usize..TOTAL_TILES,
            code in 0u8..=4,
        ) {
            let direction = Direction::from_code(code).unwrap();
            let next = next_tile(tile, direction, GRID_SIDE);
            prop_assert!(next < TOTAL_TILES);
            if direction == Direction::Stop {
                prop_assert_eq!(next, tile);
            }
        }
    }
}
