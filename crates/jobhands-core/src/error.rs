//! Job management errors.

use thiserror::Error;

use jobhands_protocols::SchedulerError;

/// Result type returned by every [`JobService`](crate::JobService) operation.
pub type JobResult<T> = Result<T, OperationFailure>;

/// The single failure type callers of the job service see.
///
/// `Display` shows only the original message. The underlying engine or
/// definition error is kept as the source for diagnostics.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct OperationFailure {
    message: String,
    #[source]
    cause: Option<FailureCause>,
}

/// What an [`OperationFailure`] was translated from.
#[derive(Debug, Error)]
pub enum FailureCause {
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    Definition(#[from] DefinitionError),
}

impl OperationFailure {
    /// A failure with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// The original failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&FailureCause> {
        self.cause.as_ref()
    }

    /// The engine error this failure was translated from, if any.
    pub fn scheduler_cause(&self) -> Option<&SchedulerError> {
        match &self.cause {
            Some(FailureCause::Scheduler(err)) => Some(err),
            _ => None,
        }
    }

    /// The definition error this failure was translated from, if any.
    pub fn definition_cause(&self) -> Option<&DefinitionError> {
        match &self.cause {
            Some(FailureCause::Definition(err)) => Some(err),
            _ => None,
        }
    }

    /// Whether the operation targeted a job the engine does not have.
    pub fn is_not_found(&self) -> bool {
        self.scheduler_cause().is_some_and(SchedulerError::is_not_found)
    }
}

impl From<SchedulerError> for OperationFailure {
    fn from(err: SchedulerError) -> Self {
        Self {
            message: err.to_string(),
            cause: Some(FailureCause::Scheduler(err)),
        }
    }
}

impl From<DefinitionError> for OperationFailure {
    fn from(err: DefinitionError) -> Self {
        Self {
            message: err.to_string(),
            cause: Some(FailureCause::Definition(err)),
        }
    }
}

/// A descriptor could not be turned into an engine job definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Unknown job type: {0}")]
    UnknownJobType(String),

    #[error("Job '{key}' is of type '{existing}', cannot change it to '{requested}'")]
    TypeMismatch {
        key: String,
        existing: String,
        requested: String,
    },

    #[error("Missing job data field: {0}")]
    MissingField(String),

    #[error("Invalid job data field {field}: {message}")]
    InvalidField { field: String, message: String },

    #[error("Invalid trigger {trigger}: {message}")]
    InvalidTrigger { trigger: String, message: String },
}

/// Builder registration errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Job type already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Job type not registered: {0}")]
    NotFound(String),
}
