//! Memory-backed scheduler engine.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use jobhands_protocols::{
    GroupMatcher, JobDetail, JobKey, Scheduler, SchedulerError, SchedulerResult, Trigger,
    TriggerSchedule, TriggerState,
};

struct StoredJob {
    detail: JobDetail,
    triggers: Vec<Trigger>,
}

/// Scheduler engine keeping every job and trigger in process memory.
pub struct MemoryScheduler {
    instance_name: String,
    jobs: RwLock<HashMap<JobKey, StoredJob>>,
}

impl MemoryScheduler {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::with_instance_name("jobhands")
    }

    /// Create an empty scheduler with the given instance name.
    pub fn with_instance_name(instance_name: impl Into<String>) -> Self {
        Self {
            instance_name: instance_name.into(),
            jobs: RwLock::new(HashMap::new()),
        }
    }

    /// Name this engine instance reports in its logs.
    pub fn instance_name(&self) -> &str {
        &self.instance_name
    }

    fn validate_key(key: &JobKey) -> SchedulerResult<()> {
        if key.group.is_empty() || key.name.is_empty() {
            return Err(SchedulerError::InvalidKey(format!(
                "job group and name must not be empty: '{}'",
                key
            )));
        }
        Ok(())
    }

    /// Check a trigger belongs to `job_key` and reset its engine-owned fields.
    fn prepare_trigger(job_key: &JobKey, mut trigger: Trigger) -> SchedulerResult<Trigger> {
        if trigger.key.group.is_empty() || trigger.key.name.is_empty() {
            return Err(SchedulerError::InvalidKey(format!(
                "trigger group and name must not be empty: '{}'",
                trigger.key
            )));
        }
        if trigger.job_key != *job_key {
            return Err(SchedulerError::InvalidKey(format!(
                "trigger '{}' references job '{}', expected '{}'",
                trigger.key, trigger.job_key, job_key
            )));
        }

        trigger.state = TriggerState::Normal;
        trigger.previous_fire_time = None;
        trigger.next_fire_time = match &trigger.schedule {
            TriggerSchedule::Once { fire_time } => Some(*fire_time),
            TriggerSchedule::Cron { .. } => None,
        };
        Ok(trigger)
    }
}

impl Default for MemoryScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Scheduler for MemoryScheduler {
    async fn job_keys(&self, matcher: &GroupMatcher) -> SchedulerResult<Vec<JobKey>> {
        let jobs = self.jobs.read().await;
        let mut keys: Vec<JobKey> = jobs.keys().filter(|k| matcher.matches(k)).cloned().collect();
        keys.sort();
        Ok(keys)
    }

    async fn job_detail(&self, key: &JobKey) -> SchedulerResult<Option<JobDetail>> {
        let jobs = self.jobs.read().await;
        Ok(jobs.get(key).map(|stored| stored.detail.clone()))
    }

    async fn triggers_of_job(&self, key: &JobKey) -> SchedulerResult<Vec<Trigger>> {
        let jobs = self.jobs.read().await;
        Ok(jobs
            .get(key)
            .map(|stored| stored.triggers.clone())
            .unwrap_or_default())
    }

    async fn schedule_job(
        &self,
        job: JobDetail,
        triggers: Vec<Trigger>,
        replace: bool,
    ) -> SchedulerResult<()> {
        Self::validate_key(&job.key)?;

        let mut prepared = Vec::with_capacity(triggers.len());
        for trigger in triggers {
            let trigger = Self::prepare_trigger(&job.key, trigger)?;
            if prepared.iter().any(|t: &Trigger| t.key == trigger.key) {
                return Err(SchedulerError::AlreadyExists(format!("trigger '{}'", trigger.key)));
            }
            prepared.push(trigger);
        }

        let mut jobs = self.jobs.write().await;
        if jobs.contains_key(&job.key) && !replace {
            return Err(SchedulerError::AlreadyExists(format!("job '{}'", job.key)));
        }

        // Trigger keys are unique across the whole engine.
        for (other_key, other) in jobs.iter() {
            if *other_key == job.key {
                continue;
            }
            if let Some(clash) = other
                .triggers
                .iter()
                .find(|t| prepared.iter().any(|p| p.key == t.key))
            {
                return Err(SchedulerError::AlreadyExists(format!(
                    "trigger '{}' is bound to job '{}'",
                    clash.key, other_key
                )));
            }
        }

        debug!(
            "[{}] Scheduling job '{}' with {} trigger(s)",
            self.instance_name,
            job.key,
            prepared.len()
        );
        jobs.insert(
            job.key.clone(),
            StoredJob {
                detail: job,
                triggers: prepared,
            },
        );
        Ok(())
    }

    async fn add_job(&self, job: JobDetail, replace: bool) -> SchedulerResult<()> {
        Self::validate_key(&job.key)?;

        let mut jobs = self.jobs.write().await;
        match jobs.get_mut(&job.key) {
            Some(_) if !replace => Err(SchedulerError::AlreadyExists(format!("job '{}'", job.key))),
            Some(stored) => {
                debug!("[{}] Replacing job definition '{}'", self.instance_name, job.key);
                stored.detail = job;
                Ok(())
            }
            None => {
                if !job.durable {
                    return Err(SchedulerError::Persistence(format!(
                        "job '{}' has no trigger and is not durable",
                        job.key
                    )));
                }
                debug!("[{}] Adding job definition '{}'", self.instance_name, job.key);
                jobs.insert(
                    job.key.clone(),
                    StoredJob {
                        detail: job,
                        triggers: Vec::new(),
                    },
                );
                Ok(())
            }
        }
    }

    async fn delete_job(&self, key: &JobKey) -> SchedulerResult<bool> {
        let mut jobs = self.jobs.write().await;
        let removed = jobs.remove(key).is_some();
        debug!("[{}] Delete job '{}': removed={}", self.instance_name, key, removed);
        Ok(removed)
    }

    async fn delete_jobs(&self, keys: &[JobKey]) -> SchedulerResult<bool> {
        let mut jobs = self.jobs.write().await;
        let mut all_removed = true;
        for key in keys {
            all_removed &= jobs.remove(key).is_some();
        }
        debug!(
            "[{}] Deleted {} job key(s): all_removed={}",
            self.instance_name,
            keys.len(),
            all_removed
        );
        Ok(all_removed)
    }

    async fn pause_job(&self, key: &JobKey) -> SchedulerResult<()> {
        let mut jobs = self.jobs.write().await;
        let stored = jobs
            .get_mut(key)
            .ok_or_else(|| SchedulerError::JobNotFound(key.to_string()))?;

        for trigger in stored.triggers.iter_mut() {
            if trigger.state != TriggerState::Complete {
                trigger.state = TriggerState::Paused;
            }
        }
        Ok(())
    }

    async fn resume_job(&self, key: &JobKey) -> SchedulerResult<()> {
        let mut jobs = self.jobs.write().await;
        let stored = jobs
            .get_mut(key)
            .ok_or_else(|| SchedulerError::JobNotFound(key.to_string()))?;

        for trigger in stored.triggers.iter_mut() {
            if trigger.state == TriggerState::Paused {
                trigger.state = TriggerState::Normal;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
