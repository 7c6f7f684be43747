//! Job definition builders.
//!
//! Each job type knows how to turn a [`JobDescriptor`] into the engine's
//! [`JobDetail`] and triggers, and how an update is merged into an existing
//! definition. The job service picks the builder whose
//! [`job_type`](JobDefinitionBuilder::job_type) matches the descriptor's tag.

mod email;
mod generic;
mod registry;

pub use email::EmailJobBuilder;
pub use generic::GenericJobBuilder;
pub use registry::BuilderRegistry;

use jobhands_protocols::{JobDetail, JobKey, Trigger};

use crate::descriptor::JobDescriptor;
use crate::error::DefinitionError;

/// What `create_job` does when the identity is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Fail the create; the existing job is left untouched.
    #[default]
    Reject,
    /// Replace the existing job and its triggers.
    Replace,
}

/// Strategy mapping descriptors of one job type to engine definitions.
pub trait JobDefinitionBuilder: Send + Sync {
    /// The descriptor `type` tag this builder handles.
    fn job_type(&self) -> &str;

    fn duplicate_policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::Reject
    }

    /// Build the engine job stored under `key`.
    fn build_job(&self, key: &JobKey, descriptor: &JobDescriptor)
        -> Result<JobDetail, DefinitionError>;

    /// Build the engine triggers for a newly created job.
    fn build_triggers(
        &self,
        key: &JobKey,
        descriptor: &JobDescriptor,
    ) -> Result<Vec<Trigger>, DefinitionError> {
        descriptor
            .triggers
            .iter()
            .map(|trigger| trigger.to_trigger(key))
            .collect()
    }

    /// Merge an update into the stored definition.
    ///
    /// The default replaces data, description and flags wholesale while
    /// keeping the stored key and job type.
    fn merge(
        &self,
        existing: &JobDetail,
        descriptor: &JobDescriptor,
    ) -> Result<JobDetail, DefinitionError> {
        let mut job = self.build_job(&existing.key, descriptor)?;
        job.key = existing.key.clone();
        job.job_type = existing.job_type.clone();
        Ok(job)
    }
}

/// Engine job carrying the descriptor's description and flags.
pub(crate) fn base_detail(job_type: &str, key: &JobKey, descriptor: &JobDescriptor) -> JobDetail {
    let mut job = JobDetail::new(key.clone(), job_type)
        .with_durable(descriptor.durable)
        .with_requests_recovery(descriptor.recoverable);
    job.description = descriptor.description.clone();
    job
}
