//! Stored job definition.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::key::JobKey;

/// A job definition as the engine stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDetail {
    pub key: JobKey,
    /// Tag naming the handler that runs this job.
    pub job_type: String,
    pub description: Option<String>,
    /// Handler parameters.
    pub data: Map<String, Value>,
    /// Kept stored even when no trigger references it.
    pub durable: bool,
    /// Re-executed after an engine crash mid-run.
    pub requests_recovery: bool,
}

impl JobDetail {
    /// Create a durable, non-recovering job with an empty data map.
    pub fn new(key: JobKey, job_type: impl Into<String>) -> Self {
        Self {
            key,
            job_type: job_type.into(),
            description: None,
            data: Map::new(),
            durable: true,
            requests_recovery: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    pub fn with_durable(mut self, durable: bool) -> Self {
        self.durable = durable;
        self
    }

    pub fn with_requests_recovery(mut self, requests_recovery: bool) -> Self {
        self.requests_recovery = requests_recovery;
        self
    }
}
