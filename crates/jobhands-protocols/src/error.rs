//! Scheduler engine errors.

use thiserror::Error;

/// Failures raised by a scheduling engine.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The engine could not be reached or is shutting down.
    #[error("Scheduler unavailable: {0}")]
    Unavailable(String),

    /// No job is stored under the given key.
    #[error("Job not found: {0}")]
    JobNotFound(String),

    /// A job or trigger with the given key already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The key (or a trigger's job reference) was rejected.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The engine's job store failed.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Generic engine failure.
    #[error("{0}")]
    Internal(String),
}

impl SchedulerError {
    /// Whether this error reports a missing job.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SchedulerError::JobNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_error() {
        let err = SchedulerError::Unavailable("connection refused".to_string());
        assert!(err.to_string().contains("unavailable"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_job_not_found_error() {
        let err = SchedulerError::JobNotFound("reports.daily".to_string());
        assert!(err.to_string().contains("reports.daily"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_internal_error_is_bare_message() {
        let err = SchedulerError::Internal("boom".to_string());
        assert_eq!(err.to_string(), "boom");
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_all_error_variants_display() {
        let errors = vec![
            SchedulerError::Unavailable("a".to_string()),
            SchedulerError::JobNotFound("b".to_string()),
            SchedulerError::AlreadyExists("c".to_string()),
            SchedulerError::InvalidKey("d".to_string()),
            SchedulerError::Persistence("e".to_string()),
            SchedulerError::Internal("f".to_string()),
        ];

        for err in errors {
            assert!(!err.to_string().is_empty());
        }
    }
}
