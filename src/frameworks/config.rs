use std::{env, time::Duration};

// Runtime/server constants (not gameplay tuning).

pub fn http_port() -> u16 {
    env::var("GAME_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3001)
}

fn millis_from_env(key: &str, default: u64) -> Duration {
    let millis = env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|&ms| ms > 0)
        .unwrap_or(default);
    Duration::from_millis(millis)
}

/// Fixed simulation step; every connected client gets one update per tick.
pub fn tick_interval() -> Duration {
    millis_from_env("TICK_INTERVAL_MS", 500)
}

pub fn respawn_delay() -> Duration {
    millis_from_env("RESPAWN_DELAY_MS", 3000)
}

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const WORLD_BROADCAST_CAPACITY: usize = 128;
