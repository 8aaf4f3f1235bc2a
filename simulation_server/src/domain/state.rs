// Domain-level simulation entities and snapshot types.

use serde::Serialize;

pub struct SimRobot {
    pub x: f32,
    pub y: f32,

    // Duty-cycle state (do not serialize to clients)
    pub moving: bool,
    pub phase_elapsed: f32, // seconds spent in the current move/rest phase
    pub path_history: Vec<(f32, f32)>,
}

impl SimRobot {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            moving: true,
            phase_elapsed: 0.0,
            path_history: vec![(x, y)],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RobotSnapshot {
    pub x: f32,
    pub y: f32,
    pub resting: bool,
}

impl From<&SimRobot> for RobotSnapshot {
    fn from(r: &SimRobot) -> Self {
        Self {
            x: r.x,
            y: r.y,
            resting: !r.moving,
        }
    }
}

// Circular no-go region in the warehouse.
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}
