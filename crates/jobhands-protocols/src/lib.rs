//! # JobHands Protocols
//!
//! Engine-facing types for the JobHands job management layer.
//!
//! Everything in this crate describes the scheduling engine as seen from
//! the outside: how jobs and triggers are keyed, what a stored job looks
//! like, and the [`Scheduler`] adapter trait the management layer calls.
//! The engine owns all durable state; nothing here fires triggers.

pub mod error;
pub mod job;
pub mod key;
pub mod scheduler;
pub mod trigger;

pub use error::SchedulerError;
pub use job::JobDetail;
pub use key::{GroupMatcher, JobKey, TriggerKey};
pub use scheduler::{Scheduler, SchedulerResult};
pub use trigger::{Trigger, TriggerSchedule, TriggerState};

#[cfg(feature = "mock")]
pub use scheduler::MockScheduler;
