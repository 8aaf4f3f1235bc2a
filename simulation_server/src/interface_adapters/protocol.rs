use crate::domain::RobotSnapshot;
use crate::use_cases::RunStatus;
use serde::Serialize;

// Response payload returned after starting a simulation run.
#[derive(Debug, Serialize)]
pub struct StartSimulationResponse {
    pub message: String,
    pub run_id: String,
}

// Latest observable state of a run, as exposed over HTTP.
#[derive(Debug, Serialize)]
pub struct RunStatusResponse {
    pub run_id: String,
    pub tick: u64,
    pub robot: RobotSnapshot,
    pub finished: bool,
}

impl RunStatusResponse {
    pub fn from_status(run_id: String, status: RunStatus) -> Self {
        Self {
            run_id,
            tick: status.tick,
            robot: status.robot,
            finished: status.finished,
        }
    }
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
