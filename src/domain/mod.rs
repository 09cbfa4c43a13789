// Domain layer: core simulation types and rules.

pub mod direction;
pub mod flood_fill;
pub mod lifecycle;
pub mod rules;
pub mod simulation;
pub mod state;
pub mod systems;
pub mod tile;
pub mod tuning;

pub use direction::Direction;
pub use lifecycle::SpawnError;
pub use simulation::{Simulation, TickEvent};
pub use state::{PlayerInput, PlayerSnapshot, SimPlayer};
pub use tile::Tile;
