//! Triggers bound to jobs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::key::{JobKey, TriggerKey};

/// Firing state of a trigger, as reported by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerState {
    /// Waiting for its next fire time.
    #[default]
    Normal,
    /// Will not fire until resumed.
    Paused,
    /// Has no remaining fire times.
    Complete,
    /// Engine failed to fire it.
    Error,
    /// Held back while a non-concurrent job runs.
    Blocked,
    /// Unknown to the engine.
    None,
}

/// When a trigger fires. Expressions are opaque to this crate; the engine
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TriggerSchedule {
    /// Recurring, driven by a cron expression.
    #[serde(rename_all = "camelCase")]
    Cron {
        expression: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time_zone: Option<String>,
    },
    /// Fires once at the given instant.
    #[serde(rename_all = "camelCase")]
    Once { fire_time: DateTime<Utc> },
}

impl TriggerSchedule {
    pub fn cron(expression: impl Into<String>) -> Self {
        TriggerSchedule::Cron {
            expression: expression.into(),
            time_zone: None,
        }
    }

    pub fn once(fire_time: DateTime<Utc>) -> Self {
        TriggerSchedule::Once { fire_time }
    }
}

/// A trigger as the engine stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub key: TriggerKey,
    /// The job this trigger fires.
    pub job_key: JobKey,
    pub schedule: TriggerSchedule,
    #[serde(default)]
    pub state: TriggerState,
    pub next_fire_time: Option<DateTime<Utc>>,
    pub previous_fire_time: Option<DateTime<Utc>>,
}

impl Trigger {
    /// Create a trigger in the `Normal` state with no fire times computed.
    pub fn new(key: TriggerKey, job_key: JobKey, schedule: TriggerSchedule) -> Self {
        Self {
            key,
            job_key,
            schedule,
            state: TriggerState::Normal,
            next_fire_time: None,
            previous_fire_time: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_trigger_state_defaults_to_normal() {
        assert_eq!(TriggerState::default(), TriggerState::Normal);
    }

    #[test]
    fn test_trigger_new_is_normal() {
        let trigger = Trigger::new(
            TriggerKey::new("g", "t"),
            JobKey::new("g", "j"),
            TriggerSchedule::cron("0 0 * * * ?"),
        );
        assert_eq!(trigger.state, TriggerState::Normal);
        assert!(trigger.next_fire_time.is_none());
    }

    #[test]
    fn test_schedule_serialization() {
        let cron = serde_json::to_value(TriggerSchedule::cron("0 0 12 * * ?")).unwrap();
        assert_eq!(cron["kind"], "cron");
        assert_eq!(cron["expression"], "0 0 12 * * ?");
        assert!(cron.get("timeZone").is_none());

        let at = Utc.with_ymd_and_hms(2030, 1, 1, 9, 0, 0).unwrap();
        let once = serde_json::to_value(TriggerSchedule::once(at)).unwrap();
        assert_eq!(once["kind"], "once");
        assert!(once["fireTime"].as_str().unwrap().starts_with("2030-01-01T09:00:00"));
    }

    #[test]
    fn test_state_serialization() {
        assert_eq!(serde_json::to_value(TriggerState::Paused).unwrap(), "PAUSED");
        assert_eq!(serde_json::to_value(TriggerState::Normal).unwrap(), "NORMAL");
    }
}
