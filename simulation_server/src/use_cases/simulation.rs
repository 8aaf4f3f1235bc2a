use crate::domain::systems::movement::{self, MovementConfig};
use crate::domain::tuning::robot::{RobotTuning, WorldTuning};
use crate::domain::{RobotSnapshot, SimRobot};
use crate::use_cases::RunStatus;
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;

pub async fn simulation_task(
    run_id: String,
    status_tx: watch::Sender<RunStatus>,
    tick_interval: Duration,
    world: WorldTuning,
    robot_tuning: RobotTuning,
    max_ticks: u64,
) {
    let mut tick: u64 = 0;
    let mut robot = SimRobot::new(0.0, 0.0);

    let cfg = MovementConfig {
        speed: robot_tuning.speed,
        move_time: robot_tuning.move_time,
        rest_time: robot_tuning.rest_time,
        arrival_epsilon: robot_tuning.arrival_epsilon,
        min_x: 0.0,
        max_x: world.width,
        min_y: 0.0,
        max_y: world.height,
    };

    info!(
        %run_id,
        target_x = world.target_x,
        target_y = world.target_y,
        "simulation run started"
    );

    // Drive the fixed-step loop at the configured tick rate.
    let mut interval = tokio::time::interval(tick_interval);
    let dt = tick_interval.as_secs_f32();

    loop {
        interval.tick().await;

        let arrived = movement::tick_robot(
            &mut robot,
            world.target_x,
            world.target_y,
            dt,
            cfg,
            &world.obstacles,
        );

        tick += 1;
        // Max-tick bound keeps unreachable targets from running forever.
        let finished = arrived || tick >= max_ticks;

        let send = status_tx.send(RunStatus {
            tick,
            robot: RobotSnapshot::from(&robot),
            finished,
        });

        if send.is_err() {
            // All status receivers dropped; nobody is watching this run.
            info!(%run_id, tick, "simulation run abandoned");
            break;
        }

        if finished {
            info!(%run_id, tick, arrived, "simulation run finished");
            break;
        }
    }
}
