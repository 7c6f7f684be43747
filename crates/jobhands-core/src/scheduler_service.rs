//! Job service backed by a scheduler engine.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, info_span, warn, Instrument};

use jobhands_protocols::{GroupMatcher, JobKey, Scheduler, SchedulerError, SchedulerResult};

use crate::builder::{BuilderRegistry, DuplicatePolicy, JobDefinitionBuilder};
use crate::descriptor::{JobDescriptor, DEFAULT_JOB_TYPE};
use crate::error::{DefinitionError, JobResult};
use crate::identity::{match_any_group, match_group, resolve_identity};
use crate::service::JobService;

/// [`JobService`] that resolves identities, calls the engine, logs the
/// outcome and translates engine failures.
///
/// Holds no state besides the shared engine handle and the builders, so
/// one instance can serve any number of concurrent callers.
pub struct SchedulerJobService {
    scheduler: Arc<dyn Scheduler>,
    builders: Arc<BuilderRegistry>,
}

impl SchedulerJobService {
    pub fn new(scheduler: Arc<dyn Scheduler>, builders: Arc<BuilderRegistry>) -> Self {
        Self {
            scheduler,
            builders,
        }
    }

    pub fn scheduler(&self) -> &Arc<dyn Scheduler> {
        &self.scheduler
    }

    pub fn builders(&self) -> &Arc<BuilderRegistry> {
        &self.builders
    }

    /// Run a read inside the read-only boundary shared by all lookups.
    async fn read_only<T, F>(&self, operation: &'static str, read: F) -> T
    where
        F: Future<Output = T>,
    {
        read.instrument(info_span!("job_read", operation, read_only = true))
            .await
    }

    /// Fetch one job and its triggers; `None` if the engine has no such job.
    async fn describe(&self, key: &JobKey) -> SchedulerResult<Option<JobDescriptor>> {
        let Some(detail) = self.scheduler.job_detail(key).await? else {
            return Ok(None);
        };
        let triggers = self.scheduler.triggers_of_job(key).await?;
        Ok(Some(JobDescriptor::from_engine(detail, triggers)))
    }

    /// Describe every job selected by the matcher, one key at a time.
    async fn describe_matching(&self, matcher: &GroupMatcher) -> SchedulerResult<Vec<JobDescriptor>> {
        let keys = self.scheduler.job_keys(matcher).await?;
        let mut descriptors = Vec::with_capacity(keys.len());
        for key in keys {
            // Deleted between enumeration and lookup.
            if let Some(descriptor) = self.describe(&key).await? {
                descriptors.push(descriptor);
            }
        }
        descriptors.sort_by(|a, b| (&a.group, &a.name).cmp(&(&b.group, &b.name)));
        Ok(descriptors)
    }

    fn builder_for(&self, job_type: &str) -> Result<Arc<dyn JobDefinitionBuilder>, DefinitionError> {
        self.builders
            .get(job_type)
            .ok_or_else(|| DefinitionError::UnknownJobType(job_type.to_string()))
    }

    async fn try_create(&self, key: &JobKey, descriptor: &JobDescriptor) -> JobResult<JobDescriptor> {
        let builder = self.builder_for(&descriptor.job_type)?;
        let job = builder.build_job(key, descriptor)?;
        let triggers = builder.build_triggers(key, descriptor)?;
        let replace = builder.duplicate_policy() == DuplicatePolicy::Replace;

        self.scheduler.schedule_job(job, triggers, replace).await?;

        let persisted = self
            .describe(key)
            .await?
            .ok_or_else(|| SchedulerError::JobNotFound(key.to_string()))?;
        Ok(persisted)
    }

    async fn try_update(&self, key: &JobKey, descriptor: &JobDescriptor) -> JobResult<()> {
        let existing = self
            .scheduler
            .job_detail(key)
            .await?
            .ok_or_else(|| SchedulerError::JobNotFound(key.to_string()))?;

        if descriptor.job_type != DEFAULT_JOB_TYPE && descriptor.job_type != existing.job_type {
            return Err(DefinitionError::TypeMismatch {
                key: key.to_string(),
                existing: existing.job_type,
                requested: descriptor.job_type.clone(),
            }
            .into());
        }

        let builder = self.builder_for(&existing.job_type)?;
        let merged = builder.merge(&existing, descriptor)?;
        self.scheduler.add_job(merged, true).await?;
        Ok(())
    }

    async fn try_delete_all(&self) -> SchedulerResult<usize> {
        let keys = self.scheduler.job_keys(&match_any_group()).await?;
        self.scheduler.delete_jobs(&keys).await?;
        Ok(keys.len())
    }
}

#[async_trait]
impl JobService for SchedulerJobService {
    async fn create_job(&self, group: &str, descriptor: JobDescriptor) -> JobResult<JobDescriptor> {
        let mut descriptor = descriptor;
        descriptor.group = group.to_string();
        let key = resolve_identity(group, &descriptor.name);

        match self.try_create(&key, &descriptor).await {
            Ok(created) => {
                info!(
                    "Created {} job '{}' with {} trigger(s)",
                    created.job_type,
                    key,
                    created.triggers.len()
                );
                Ok(created)
            }
            Err(e) => {
                error!("Failed to create job '{}': {}", key, e);
                Err(e)
            }
        }
    }

    async fn find_jobs(&self) -> JobResult<Vec<JobDescriptor>> {
        let result = self
            .read_only("find_jobs", self.describe_matching(&match_any_group()))
            .await;

        match result {
            Ok(descriptors) => {
                info!("Found {} job(s)", descriptors.len());
                Ok(descriptors)
            }
            Err(e) => {
                error!("Failed to find jobs: {}", e);
                Err(e.into())
            }
        }
    }

    async fn find_group_jobs(&self, group: &str) -> JobResult<Vec<JobDescriptor>> {
        let result = self
            .read_only("find_group_jobs", self.describe_matching(&match_group(group)))
            .await;

        match result {
            Ok(descriptors) => {
                info!("Found {} job(s) in group '{}'", descriptors.len(), group);
                Ok(descriptors)
            }
            Err(e) => {
                error!("Failed to find jobs in group '{}': {}", group, e);
                Err(e.into())
            }
        }
    }

    async fn find_job(&self, group: &str, name: &str) -> JobResult<Option<JobDescriptor>> {
        let key = resolve_identity(group, name);

        match self.read_only("find_job", self.describe(&key)).await {
            Ok(Some(descriptor)) => {
                info!("Found job '{}'", key);
                Ok(Some(descriptor))
            }
            Ok(None) => {
                warn!("Job '{}' not found", key);
                Ok(None)
            }
            Err(e) => {
                error!("Failed to find job '{}': {}", key, e);
                Err(e.into())
            }
        }
    }

    async fn update_job(&self, group: &str, name: &str, descriptor: JobDescriptor) -> JobResult<()> {
        let key = resolve_identity(group, name);

        match self.try_update(&key, &descriptor).await {
            Ok(()) => {
                info!("Updated job '{}'", key);
                Ok(())
            }
            Err(e) => {
                error!("Failed to update job '{}': {}", key, e);
                Err(e)
            }
        }
    }

    async fn delete_job(&self, group: &str, name: &str) -> JobResult<()> {
        let key = resolve_identity(group, name);

        match self.scheduler.delete_job(&key).await {
            Ok(removed) => {
                info!("Deleted job '{}' (removed: {})", key, removed);
                Ok(())
            }
            Err(e) => {
                error!("Failed to delete job '{}': {}", key, e);
                Err(e.into())
            }
        }
    }

    async fn delete_all_jobs(&self) -> JobResult<()> {
        match self.try_delete_all().await {
            Ok(count) => {
                info!("Deleted all jobs ({})", count);
                Ok(())
            }
            Err(e) => {
                error!("Failed to delete all jobs: {}", e);
                Err(e.into())
            }
        }
    }

    async fn pause_job(&self, group: &str, name: &str) -> JobResult<()> {
        let key = resolve_identity(group, name);

        match self.scheduler.pause_job(&key).await {
            Ok(()) => {
                info!("Paused job '{}'", key);
                Ok(())
            }
            Err(e) => {
                error!("Failed to pause job '{}': {}", key, e);
                Err(e.into())
            }
        }
    }

    async fn resume_job(&self, group: &str, name: &str) -> JobResult<()> {
        let key = resolve_identity(group, name);

        match self.scheduler.resume_job(&key).await {
            Ok(()) => {
                info!("Resumed job '{}'", key);
                Ok(())
            }
            Err(e) => {
                error!("Failed to resume job '{}': {}", key, e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "scheduler_service_tests.rs"]
mod tests;
