//! The job service contract.

use async_trait::async_trait;

use crate::descriptor::JobDescriptor;
use crate::error::JobResult;

/// Group/name addressed lifecycle operations over scheduled jobs.
///
/// Every operation either returns a value (empty and absent results
/// included) or a single [`OperationFailure`](crate::OperationFailure).
/// A missing job is data, never an error, except for `update_job`, which
/// fails with [`is_not_found`](crate::OperationFailure::is_not_found).
#[async_trait]
pub trait JobService: Send + Sync {
    /// Create a job under `group` and return it as stored.
    ///
    /// The descriptor's own group is ignored. Whether an existing identity
    /// is rejected or replaced is decided by the job type's builder.
    async fn create_job(&self, group: &str, descriptor: JobDescriptor) -> JobResult<JobDescriptor>;

    /// Every job known to the engine, sorted by identity.
    async fn find_jobs(&self) -> JobResult<Vec<JobDescriptor>>;

    /// Jobs whose group equals `group` exactly, sorted by identity.
    async fn find_group_jobs(&self, group: &str) -> JobResult<Vec<JobDescriptor>>;

    /// The job addressed by `(group, name)`, or `None` when there is none.
    async fn find_job(&self, group: &str, name: &str) -> JobResult<Option<JobDescriptor>>;

    /// Update an existing job definition. Triggers are left untouched.
    async fn update_job(&self, group: &str, name: &str, descriptor: JobDescriptor)
        -> JobResult<()>;

    /// Delete one job and its triggers.
    async fn delete_job(&self, group: &str, name: &str) -> JobResult<()>;

    /// Delete every job in one bulk engine call. Not atomic.
    async fn delete_all_jobs(&self) -> JobResult<()>;

    /// Pause every trigger of the job.
    async fn pause_job(&self, group: &str, name: &str) -> JobResult<()>;

    /// Resume the paused triggers of the job.
    async fn resume_job(&self, group: &str, name: &str) -> JobResult<()>;
}
