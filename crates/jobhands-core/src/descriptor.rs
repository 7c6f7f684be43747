//! Caller-facing job and trigger descriptors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use jobhands_protocols::{JobDetail, JobKey, Trigger, TriggerKey, TriggerSchedule, TriggerState};

use crate::error::DefinitionError;

/// Job type tag used when a descriptor does not name one.
pub const DEFAULT_JOB_TYPE: &str = "generic";

fn default_job_type() -> String {
    DEFAULT_JOB_TYPE.to_string()
}

fn default_durable() -> bool {
    true
}

/// Snapshot of one job and its triggers.
///
/// Built fresh from the engine on every read and never kept in sync
/// afterwards. On create and update it doubles as the request payload;
/// the engine-derived trigger fields are ignored there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptor {
    /// Overwritten by the group the job is created under.
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub name: String,
    /// Selects the [`JobDefinitionBuilder`](crate::JobDefinitionBuilder).
    #[serde(rename = "type", default = "default_job_type")]
    pub job_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(default = "default_durable")]
    pub durable: bool,
    #[serde(default)]
    pub recoverable: bool,
    #[serde(default)]
    pub triggers: Vec<TriggerSummary>,
}

impl JobDescriptor {
    /// Create a descriptor of the default job type with no data or triggers.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            job_type: default_job_type(),
            description: None,
            data: Map::new(),
            durable: true,
            recoverable: false,
            triggers: Vec::new(),
        }
    }

    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = job_type.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set one data entry.
    pub fn with_data(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    pub fn with_trigger(mut self, trigger: TriggerSummary) -> Self {
        self.triggers.push(trigger);
        self
    }

    /// Identity of the described job.
    pub fn identity(&self) -> JobKey {
        JobKey::new(self.group.clone(), self.name.clone())
    }

    /// Project an engine job and its triggers into a descriptor.
    pub fn from_engine(detail: JobDetail, triggers: Vec<Trigger>) -> Self {
        let mut triggers: Vec<TriggerSummary> =
            triggers.iter().map(TriggerSummary::from_trigger).collect();
        triggers.sort_by(|a, b| (&a.group, &a.name).cmp(&(&b.group, &b.name)));

        Self {
            group: detail.key.group,
            name: detail.key.name,
            job_type: detail.job_type,
            description: detail.description,
            data: detail.data,
            durable: detail.durable,
            recoverable: detail.requests_recovery,
            triggers,
        }
    }
}

/// Read-only view of one trigger bound to a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSummary {
    /// Empty means "same group as the job".
    #[serde(default)]
    pub group: String,
    pub name: String,
    pub schedule: TriggerSchedule,
    #[serde(default)]
    pub state: TriggerState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_fire_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_fire_time: Option<DateTime<Utc>>,
}

impl TriggerSummary {
    /// A trigger request in the job's own group.
    pub fn new(name: impl Into<String>, schedule: TriggerSchedule) -> Self {
        Self {
            group: String::new(),
            name: name.into(),
            schedule,
            state: TriggerState::Normal,
            next_fire_time: None,
            previous_fire_time: None,
        }
    }

    pub fn from_trigger(trigger: &Trigger) -> Self {
        Self {
            group: trigger.key.group.clone(),
            name: trigger.key.name.clone(),
            schedule: trigger.schedule.clone(),
            state: trigger.state,
            next_fire_time: trigger.next_fire_time,
            previous_fire_time: trigger.previous_fire_time,
        }
    }

    /// Build the engine trigger firing `job_key`.
    pub fn to_trigger(&self, job_key: &JobKey) -> Result<Trigger, DefinitionError> {
        if self.name.is_empty() {
            return Err(DefinitionError::InvalidTrigger {
                trigger: format!("of job '{}'", job_key),
                message: "trigger name must not be empty".to_string(),
            });
        }
        if let TriggerSchedule::Cron { expression, .. } = &self.schedule {
            if expression.trim().is_empty() {
                return Err(DefinitionError::InvalidTrigger {
                    trigger: self.name.clone(),
                    message: "cron expression must not be empty".to_string(),
                });
            }
        }

        let group = if self.group.is_empty() {
            job_key.group.clone()
        } else {
            self.group.clone()
        };

        Ok(Trigger::new(
            TriggerKey::new(group, self.name.clone()),
            job_key.clone(),
            self.schedule.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_descriptor_deserialize_defaults() {
        let descriptor: JobDescriptor = serde_json::from_value(json!({
            "name": "nightly"
        }))
        .unwrap();

        assert_eq!(descriptor.name, "nightly");
        assert_eq!(descriptor.group, "");
        assert_eq!(descriptor.job_type, DEFAULT_JOB_TYPE);
        assert!(descriptor.durable);
        assert!(!descriptor.recoverable);
        assert!(descriptor.triggers.is_empty());
    }

    #[test]
    fn test_descriptor_deserialize_full() {
        let descriptor: JobDescriptor = serde_json::from_value(json!({
            "name": "welcome",
            "type": "email",
            "data": {"subject": "Hi"},
            "triggers": [
                {"name": "t1", "schedule": {"kind": "cron", "expression": "0 0 9 * * ?"}},
                {"name": "t2", "schedule": {"kind": "once", "fireTime": "2030-05-01T10:00:00Z"}}
            ]
        }))
        .unwrap();

        assert_eq!(descriptor.job_type, "email");
        assert_eq!(descriptor.data["subject"], "Hi");
        assert_eq!(descriptor.triggers.len(), 2);
        assert_eq!(descriptor.triggers[0].state, TriggerState::Normal);
        assert_eq!(
            descriptor.triggers[1].schedule,
            TriggerSchedule::once(Utc.with_ymd_and_hms(2030, 5, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_descriptor_serializes_type_tag() {
        let descriptor = JobDescriptor::new("g", "n").with_job_type("email");
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["type"], "email");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_from_engine_projects_identity_and_triggers() {
        let key = JobKey::new("grpA", "job1");
        let detail = JobDetail::new(key.clone(), "generic")
            .with_description("demo")
            .with_requests_recovery(true);

        let mut paused = Trigger::new(
            TriggerKey::new("grpA", "b-trigger"),
            key.clone(),
            TriggerSchedule::cron("0 * * * * ?"),
        );
        paused.state = TriggerState::Paused;
        let normal = Trigger::new(
            TriggerKey::new("grpA", "a-trigger"),
            key.clone(),
            TriggerSchedule::cron("0 0 * * * ?"),
        );

        let descriptor = JobDescriptor::from_engine(detail, vec![paused, normal]);

        assert_eq!(descriptor.identity(), key);
        assert_eq!(descriptor.description.as_deref(), Some("demo"));
        assert!(descriptor.recoverable);
        assert_eq!(descriptor.triggers[0].name, "a-trigger");
        assert_eq!(descriptor.triggers[1].state, TriggerState::Paused);
    }

    #[test]
    fn test_to_trigger_defaults_group_to_job_group() {
        let key = JobKey::new("reports", "daily");
        let trigger = TriggerSummary::new("every-hour", TriggerSchedule::cron("0 0 * * * ?"))
            .to_trigger(&key)
            .unwrap();

        assert_eq!(trigger.key, TriggerKey::new("reports", "every-hour"));
        assert_eq!(trigger.job_key, key);
    }

    #[test]
    fn test_to_trigger_rejects_empty_name_and_expression() {
        let key = JobKey::new("g", "n");
        assert!(TriggerSummary::new("", TriggerSchedule::cron("0 * * * * ?"))
            .to_trigger(&key)
            .is_err());
        assert!(TriggerSummary::new("t", TriggerSchedule::cron("  "))
            .to_trigger(&key)
            .is_err());
    }
}
