//! # JobHands API
//!
//! HTTP interface over a [`JobService`](jobhands_core::JobService).
//!
//! ```text
//! /api/v1
//!   GET    /jobs                                - List every job
//!   DELETE /jobs                                - Delete every job
//!   POST   /groups/{group}/jobs                 - Create job
//!   GET    /groups/{group}/jobs                 - List group jobs
//!   GET    /groups/{group}/jobs/{name}          - Get job
//!   PUT    /groups/{group}/jobs/{name}          - Update job
//!   DELETE /groups/{group}/jobs/{name}          - Delete job
//!   PATCH  /groups/{group}/jobs/{name}/pause    - Pause job
//!   PATCH  /groups/{group}/jobs/{name}/resume   - Resume job
//!
//! /health - Liveness check
//! ```

pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, HealthResponse, JobListResponse};
pub use server::{ApiConfig, ApiServer};
pub use state::ApiState;
