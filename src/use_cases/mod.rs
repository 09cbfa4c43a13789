// Use cases layer: application workflows for the territory server.

pub mod game;
pub mod respawn;
pub mod types;

pub use game::{WorldSettings, world_task};
pub use types::{GameEvent, WorldUpdate};
