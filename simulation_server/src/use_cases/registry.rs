// Run orchestration for spawning and tracking simulation tasks.

use crate::domain::tuning::robot::{RobotTuning, WorldTuning};
use crate::domain::{RobotSnapshot, SimRobot};
use crate::use_cases::simulation::simulation_task;
use crate::use_cases::RunStatus;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, RwLock};

/// Shared configuration applied to newly started runs.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Fixed tick interval for the simulation loop.
    pub tick_interval: Duration,
    /// Safety bound on run length for unreachable targets.
    pub max_ticks: u64,
}

/// Per-run identity and status access.
#[derive(Clone)]
pub struct RunHandle {
    /// Identifier clients use to look up this run.
    pub run_id: Arc<str>,
    /// Receiver holding the latest published run status.
    pub status_rx: watch::Receiver<RunStatus>,
}

/// Thread-safe registry for active simulation runs.
pub struct RunRegistry {
    settings: RunSettings,
    runs: RwLock<HashMap<String, RunHandle>>,
}

impl RunRegistry {
    pub fn new(settings: RunSettings) -> Self {
        Self {
            settings,
            runs: RwLock::new(HashMap::new()),
        }
    }

    /// Spawns a simulation task and registers its handle.
    pub async fn start_run(&self, world: WorldTuning, robot_tuning: RobotTuning) -> RunHandle {
        let run_id = uuid::Uuid::new_v4().to_string();

        // Seed the channel with the pre-first-tick state so status reads
        // never observe a placeholder.
        let initial = RunStatus {
            tick: 0,
            robot: RobotSnapshot::from(&SimRobot::new(0.0, 0.0)),
            finished: false,
        };
        let (status_tx, status_rx) = watch::channel(initial);

        tokio::spawn(simulation_task(
            run_id.clone(),
            status_tx,
            self.settings.tick_interval,
            world,
            robot_tuning,
            self.settings.max_ticks,
        ));

        let handle = RunHandle {
            run_id: Arc::from(run_id.as_str()),
            status_rx,
        };

        let mut runs = self.runs.write().await;
        runs.insert(run_id, handle.clone());
        handle
    }

    /// Returns a run handle for the provided id, if it exists.
    pub async fn get_run(&self, run_id: &str) -> Option<RunHandle> {
        let runs = self.runs.read().await;
        runs.get(run_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_robot() -> RobotTuning {
        RobotTuning {
            speed: 1.0,
            move_time: 10.0,
            rest_time: 0.1,
            arrival_epsilon: 0.1,
        }
    }

    fn world_with_target(target_x: f32, target_y: f32) -> WorldTuning {
        WorldTuning {
            width: 10.0,
            height: 10.0,
            target_x,
            target_y,
            obstacles: Vec::new(),
        }
    }

    // Follow a run's status channel until it publishes `finished`.
    async fn await_finished(handle: &RunHandle) -> RunStatus {
        let mut status_rx = handle.status_rx.clone();
        let followed = tokio::time::timeout(Duration::from_secs(5), async move {
            loop {
                status_rx
                    .changed()
                    .await
                    .expect("status channel closed before the run finished");
                let status = status_rx.borrow().clone();
                if status.finished {
                    break status;
                }
            }
        });
        followed.await.expect("run did not finish in time")
    }

    #[tokio::test]
    async fn run_with_reachable_target_reports_finished() {
        let registry = RunRegistry::new(RunSettings {
            tick_interval: Duration::from_millis(1),
            max_ticks: 10_000,
        });

        let handle = registry
            .start_run(world_with_target(0.5, 0.0), fast_robot())
            .await;
        let status = await_finished(&handle).await;

        assert!(status.finished);
        // The robot stopped within the arrival epsilon, well short of the bound.
        assert!(status.tick < 10_000);
        assert!((status.robot.x - 0.5).abs() < 0.2);
    }

    #[tokio::test]
    async fn run_with_unreachable_target_stops_at_max_ticks() {
        let registry = RunRegistry::new(RunSettings {
            tick_interval: Duration::from_millis(1),
            max_ticks: 50,
        });

        // Target outside the warehouse; clamping keeps the robot short of it.
        let handle = registry
            .start_run(world_with_target(20.0, 20.0), fast_robot())
            .await;
        let status = await_finished(&handle).await;

        assert!(status.finished);
        assert_eq!(status.tick, 50);
        assert!(status.robot.x <= 10.0);
        assert!(status.robot.y <= 10.0);
    }
}
