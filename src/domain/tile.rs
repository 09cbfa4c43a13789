// Tile state and the packed integer codec used on the wire.

const TEAM_SHIFT: u32 = 18;
const OWNER_SHIFT: u32 = 10;
const CAPTURING_TEAM_SHIFT: u32 = 8;
const TEAM_MASK: u32 = 0b11;
const PLAYER_MASK: u32 = 0xFF;

/// One cell of the grid.
///
/// `team`/`owner` describe settled territory, `capturing_team`/`capturing_owner`
/// describe a trail currently crossing the cell. Both pairs are zero together or
/// non-zero together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub team: u8,
    pub owner: u8,
    pub capturing_team: u8,
    pub capturing_owner: u8,
}

impl Tile {
    /// Packs the tile as `team << 18 | owner << 10 | capturing_team << 8 | capturing_owner`.
    ///
    /// `team` and `capturing_team` are 2-bit fields. Values above 3 are truncated to
    /// their low two bits instead of bleeding into neighbouring fields; callers are
    /// expected to validate before this point.
    pub fn encode(&self) -> u32 {
        debug_assert!(u32::from(self.team) <= TEAM_MASK, "team out of range");
        debug_assert!(
            u32::from(self.capturing_team) <= TEAM_MASK,
            "capturing team out of range"
        );

        ((u32::from(self.team) & TEAM_MASK) << TEAM_SHIFT)
            | (u32::from(self.owner) << OWNER_SHIFT)
            | ((u32::from(self.capturing_team) & TEAM_MASK) << CAPTURING_TEAM_SHIFT)
            | u32::from(self.capturing_owner)
    }

    pub fn decode(packed: u32) -> Self {
        Self {
            team: ((packed >> TEAM_SHIFT) & TEAM_MASK) as u8,
            owner: ((packed >> OWNER_SHIFT) & PLAYER_MASK) as u8,
            capturing_team: ((packed >> CAPTURING_TEAM_SHIFT) & TEAM_MASK) as u8,
            capturing_owner: (packed & PLAYER_MASK) as u8,
        }
    }

    /// Drops settled ownership.
    pub fn release_ownership(&mut self) {
        self.owner = 0;
        self.team = 0;
    }

    /// Drops any trail crossing this tile.
    pub fn release_capture(&mut self) {
        self.capturing_owner = 0;
        self.capturing_team = 0;
    }

    pub fn claim(&mut self, owner: u8, team: u8) {
        self.owner = owner;
        self.team = team;
    }
}

pub fn decode_map(packed: &[u32]) -> Vec<Tile> {
    packed.iter().copied().map(Tile::decode).collect()
}

pub fn encode_map(tiles: &[Tile]) -> Vec<u32> {
    tiles.iter().map(Tile::encode).collect()
}

/// Clears every owned or capturing cell held by `player_id`.
pub fn release_player(tiles: &mut [Tile], player_id: u8) {
    for tile in tiles.iter_mut() {
        if tile.owner == player_id {
            tile.release_ownership();
        }
        if tile.capturing_owner == player_id {
            tile.release_capture();
        }
    }
}
