use crate::use_cases::RunRegistry;
use std::sync::Arc;

// Shared application state for the HTTP handlers.
pub struct AppState {
    pub run_registry: Arc<RunRegistry>,
}
