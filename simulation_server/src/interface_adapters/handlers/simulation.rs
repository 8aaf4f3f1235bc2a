use crate::domain::tuning::robot::{RobotTuning, WorldTuning};
use crate::interface_adapters::protocol::{
    ErrorResponse, RunStatusResponse, StartSimulationResponse,
};
use crate::interface_adapters::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::info;

// Start a simulation run and return its identifier immediately.
pub async fn start_simulation(
    State(state): State<Arc<AppState>>,
) -> Json<StartSimulationResponse> {
    let handle = state
        .run_registry
        .start_run(WorldTuning::default(), RobotTuning::default())
        .await;

    info!(run_id = %handle.run_id, "simulation started");

    Json(StartSimulationResponse {
        message: "Simulation started".to_string(),
        run_id: handle.run_id.to_string(),
    })
}

// Report the latest published status of a run.
pub async fn run_status(
    State(state): State<Arc<AppState>>,
    Path(run_id): Path<String>,
) -> Result<Json<RunStatusResponse>, (StatusCode, Json<ErrorResponse>)> {
    let handle = state.run_registry.get_run(&run_id).await.ok_or((
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "run not found".to_string(),
        }),
    ))?;

    let status = handle.status_rx.borrow().clone();
    Ok(Json(RunStatusResponse::from_status(run_id, status)))
}
