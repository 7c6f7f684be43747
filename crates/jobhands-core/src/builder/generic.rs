//! Pass-through job builder.

use jobhands_protocols::{JobDetail, JobKey};

use super::{base_detail, JobDefinitionBuilder};
use crate::descriptor::{JobDescriptor, DEFAULT_JOB_TYPE};
use crate::error::DefinitionError;

/// Stores the descriptor's data map as-is. Duplicate identities are rejected.
#[derive(Debug, Default)]
pub struct GenericJobBuilder;

impl GenericJobBuilder {
    pub fn new() -> Self {
        Self
    }
}

impl JobDefinitionBuilder for GenericJobBuilder {
    fn job_type(&self) -> &str {
        DEFAULT_JOB_TYPE
    }

    fn build_job(
        &self,
        key: &JobKey,
        descriptor: &JobDescriptor,
    ) -> Result<JobDetail, DefinitionError> {
        Ok(base_detail(DEFAULT_JOB_TYPE, key, descriptor).with_data(descriptor.data.clone()))
    }
}
