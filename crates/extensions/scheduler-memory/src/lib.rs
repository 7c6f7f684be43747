//! In-process scheduler engine for JobHands.
//!
//! Stores jobs and triggers in memory and answers the full
//! [`Scheduler`](jobhands_protocols::Scheduler) contract. It does not fire
//! triggers or evaluate cron expressions.

mod scheduler;

pub use scheduler::MemoryScheduler;
