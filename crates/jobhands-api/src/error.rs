//! API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use jobhands_core::{JobIdentity, OperationFailure};
use jobhands_protocols::SchedulerError;

/// Errors returned by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed job does not exist.
    #[error("Job '{0}' not found")]
    JobNotFound(JobIdentity),

    /// The job service failed.
    #[error(transparent)]
    Operation(#[from] OperationFailure),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::JobNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Operation(failure) => {
                if failure.is_not_found() {
                    StatusCode::NOT_FOUND
                } else if failure.definition_cause().is_some() {
                    StatusCode::BAD_REQUEST
                } else {
                    match failure.scheduler_cause() {
                        Some(SchedulerError::InvalidKey(_)) => StatusCode::BAD_REQUEST,
                        Some(SchedulerError::AlreadyExists(_)) => StatusCode::CONFLICT,
                        _ => StatusCode::INTERNAL_SERVER_ERROR,
                    }
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({"error": self.to_string()})),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobhands_core::{DefinitionError, resolve_identity};

    #[test]
    fn test_job_not_found_is_404() {
        let err = ApiError::JobNotFound(resolve_identity("grpA", "job1"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Job 'grpA.job1' not found");
    }

    #[test]
    fn test_engine_not_found_is_404() {
        let failure = OperationFailure::from(SchedulerError::JobNotFound("grpA.job1".into()));
        assert_eq!(ApiError::from(failure).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_definition_error_is_400() {
        let failure = OperationFailure::from(DefinitionError::UnknownJobType("sms".into()));
        assert_eq!(ApiError::from(failure).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_is_409() {
        let failure = OperationFailure::from(SchedulerError::AlreadyExists("grpA.job1".into()));
        assert_eq!(ApiError::from(failure).status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_engine_failure_is_500_with_message() {
        let failure = OperationFailure::from(SchedulerError::Unavailable("engine down".into()));
        let err = ApiError::from(failure);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Scheduler unavailable: engine down");
    }
}
