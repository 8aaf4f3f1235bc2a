use crate::interface_adapters::handlers::simulation::{run_status, start_simulation};
use crate::interface_adapters::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

// Build the HTTP router for simulation endpoints.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/start-simulation", post(start_simulation))
        .route("/simulations/{run_id}", get(run_status))
        .with_state(state)
}
