use crate::domain::state::Obstacle;

// Robot motion tuning.
#[derive(Debug, Clone, Copy)]
pub struct RobotTuning {
    pub speed: f32,      // m/s
    pub move_time: f32,  // seconds of motion before resting
    pub rest_time: f32,  // seconds of rest before moving again
    pub arrival_epsilon: f32,
}

impl Default for RobotTuning {
    fn default() -> Self {
        Self {
            speed: 0.1,
            move_time: 0.1,
            rest_time: 2.0,
            arrival_epsilon: 0.1,
        }
    }
}

// Warehouse layout: bounds, target and obstacle placement.
#[derive(Debug, Clone)]
pub struct WorldTuning {
    pub width: f32,
    pub height: f32,
    pub target_x: f32,
    pub target_y: f32,
    pub obstacles: Vec<Obstacle>,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            target_x: 7.0,
            target_y: 9.0,
            obstacles: vec![
                Obstacle {
                    x: 3.0,
                    y: 3.0,
                    radius: 0.5,
                },
                Obstacle {
                    x: 6.0,
                    y: 5.0,
                    radius: 0.5,
                },
            ],
        }
    }
}
