// Use-case level outputs for the simulation loop.

use crate::domain::RobotSnapshot;

// Latest observable state of a run, published every tick.
#[derive(Debug, Clone)]
pub struct RunStatus {
    pub tick: u64,
    pub robot: RobotSnapshot,
    pub finished: bool,
}
