use crate::domain::state::{Obstacle, SimRobot};

#[derive(Debug, Clone, Copy)]
pub struct MovementConfig {
    pub speed: f32,     // m/s
    pub move_time: f32, // seconds per motion phase
    pub rest_time: f32, // seconds per rest phase
    pub arrival_epsilon: f32,

    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

// Advance the robot by one fixed step. Returns true once the robot is
// within the arrival epsilon of the target.
pub fn tick_robot(
    r: &mut SimRobot,
    target_x: f32,
    target_y: f32,
    dt: f32,
    cfg: MovementConfig,
    obstacles: &[Obstacle],
) -> bool {
    // Resting phase: no motion, only the phase clock advances.
    if !r.moving {
        r.phase_elapsed += dt;
        if r.phase_elapsed >= cfg.rest_time {
            r.phase_elapsed = 0.0;
            r.moving = true;
        }
        return false;
    }

    let dir_x = target_x - r.x;
    let dir_y = target_y - r.y;
    let distance = (dir_x * dir_x + dir_y * dir_y).sqrt();

    if distance < cfg.arrival_epsilon {
        return true;
    }

    // Normalized direction, step bounded by the remaining distance.
    let step = (cfg.speed * dt).min(distance);
    let mut new_x = r.x + (dir_x / distance) * step;
    let mut new_y = r.y + (dir_y / distance) * step;

    new_x = new_x.clamp(cfg.min_x, cfg.max_x);
    new_y = new_y.clamp(cfg.min_y, cfg.max_y);

    // The robot holds position on a blocked step; the phase clock still runs.
    if !hits_obstacle(new_x, new_y, obstacles) {
        r.x = new_x;
        r.y = new_y;
        r.path_history.push((new_x, new_y));
    }

    r.phase_elapsed += dt;
    if r.phase_elapsed >= cfg.move_time {
        r.phase_elapsed = 0.0;
        r.moving = false;
    }

    let dx = target_x - r.x;
    let dy = target_y - r.y;
    (dx * dx + dy * dy).sqrt() < cfg.arrival_epsilon
}

fn hits_obstacle(x: f32, y: f32, obstacles: &[Obstacle]) -> bool {
    obstacles.iter().any(|o| {
        let dx = x - o.x;
        let dy = y - o.y;
        (dx * dx + dy * dy).sqrt() < o.radius
    })
}
