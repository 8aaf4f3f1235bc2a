// Use cases layer: application workflows for the simulation server.

pub mod registry;
pub mod simulation;
pub mod types;

pub use registry::{RunHandle, RunRegistry, RunSettings};
pub use types::RunStatus;
