use std::time::Duration;

/// Gameplay tuning for player lifecycle.
///
/// Keep this separate from runtime/server configuration (tick rates, buffer sizes, etc.).
#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Time a dead player waits before being placed on a fresh spawn block.
    pub respawn_delay: Duration,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            respawn_delay: Duration::from_millis(3000),
        }
    }
}
