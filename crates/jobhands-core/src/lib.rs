//! # JobHands Core
//!
//! Job identity and lifecycle management over a scheduling engine.
//!
//! ## Architecture
//!
//! ```text
//! caller ──► JobService ──► identity / matcher ──► Scheduler (engine)
//!                │                                     │
//!                │◄──── JobDescriptor snapshot ◄───────┤
//!                │◄──── OperationFailure ◄──── SchedulerError
//! ```
//!
//! - [`identity`]: `(group, name)` → engine key, group → engine matcher.
//! - [`descriptor`]: caller-facing snapshots of a job and its triggers.
//! - [`builder`]: per job type strategies that turn descriptors into
//!   engine job definitions for create and update.
//! - [`SchedulerJobService`]: the [`JobService`] implementation that
//!   resolves identities, calls the engine, logs and translates failures.
//!
//! The layer holds no state of its own. Every read re-queries the engine.

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod identity;
pub mod scheduler_service;
pub mod service;

pub use builder::{
    BuilderRegistry, DuplicatePolicy, EmailJobBuilder, GenericJobBuilder, JobDefinitionBuilder,
};
pub use descriptor::{JobDescriptor, TriggerSummary, DEFAULT_JOB_TYPE};
pub use error::{DefinitionError, FailureCause, JobResult, OperationFailure, RegistryError};
pub use identity::{match_any_group, match_group, resolve_identity, JobIdentity};
pub use scheduler_service::SchedulerJobService;
pub use service::JobService;
