//! Job and trigger keys, and group matchers over job keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Engine-native address of a job: a `(group, name)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobKey {
    pub group: String,
    pub name: String,
}

impl JobKey {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for JobKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.name)
    }
}

/// Engine-native address of a trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TriggerKey {
    pub group: String,
    pub name: String,
}

impl TriggerKey {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.name)
    }
}

/// Filter over job keys used when enumerating jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupMatcher {
    /// Every job, whatever its group.
    Any,
    /// Jobs whose group equals the value exactly.
    Equals(String),
}

impl GroupMatcher {
    /// Whether the key is selected by this matcher.
    pub fn matches(&self, key: &JobKey) -> bool {
        match self {
            GroupMatcher::Any => true,
            GroupMatcher::Equals(group) => key.group == *group,
        }
    }
}
