use std::{env, time::Duration};

// Runtime knobs for the control shell.

pub fn simulation_server_url() -> String {
    env::var("SIMULATION_SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string())
}

pub fn request_timeout() -> Duration {
    let millis = env::var("SIMULATION_REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(5000);
    Duration::from_millis(millis)
}
