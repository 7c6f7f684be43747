//! Application state.

use std::sync::Arc;

use jobhands_core::JobService;

/// State shared across handlers.
#[derive(Clone)]
pub struct ApiState {
    pub jobs: Arc<dyn JobService>,
}

impl ApiState {
    pub fn new(jobs: Arc<dyn JobService>) -> Self {
        Self { jobs }
    }
}
