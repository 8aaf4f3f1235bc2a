use std::{env, time::Duration};

// Runtime/server constants (not robot tuning).

pub fn http_port() -> u16 {
    env::var("SIMULATION_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000)
}

pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
// Bounds run length when the target is unreachable (about ten minutes).
pub const MAX_TICKS: u64 = 6000;
