//! Scheduler engine adapter.

use async_trait::async_trait;

use crate::error::SchedulerError;
use crate::job::JobDetail;
use crate::key::{GroupMatcher, JobKey};
use crate::trigger::Trigger;

/// Result type for engine calls.
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// A scheduling engine, queried and commanded by the job management layer.
///
/// Implementations are shared across concurrent callers and must do their
/// own synchronization. Every call is expected to complete in bounded time.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait Scheduler: Send + Sync {
    /// Keys of all stored jobs selected by the matcher.
    async fn job_keys(&self, matcher: &GroupMatcher) -> SchedulerResult<Vec<JobKey>>;

    /// The stored job, or `None` when no job has this key.
    async fn job_detail(&self, key: &JobKey) -> SchedulerResult<Option<JobDetail>>;

    /// Triggers currently bound to the job.
    async fn triggers_of_job(&self, key: &JobKey) -> SchedulerResult<Vec<Trigger>>;

    /// Store a job together with its triggers.
    ///
    /// When `replace` is false an existing job with the same key is an
    /// `AlreadyExists` error.
    async fn schedule_job(
        &self,
        job: JobDetail,
        triggers: Vec<Trigger>,
        replace: bool,
    ) -> SchedulerResult<()>;

    /// Store a job definition, keeping any triggers already bound to it.
    async fn add_job(&self, job: JobDetail, replace: bool) -> SchedulerResult<()>;

    /// Remove a job and its triggers. Returns whether a job was removed.
    async fn delete_job(&self, key: &JobKey) -> SchedulerResult<bool>;

    /// Remove several jobs. Returns true only if every job was removed.
    async fn delete_jobs(&self, keys: &[JobKey]) -> SchedulerResult<bool>;

    /// Pause every trigger of the job.
    async fn pause_job(&self, key: &JobKey) -> SchedulerResult<()>;

    /// Resume every paused trigger of the job.
    async fn resume_job(&self, key: &JobKey) -> SchedulerResult<()>;
}
