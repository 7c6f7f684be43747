//! HTTP route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use jobhands_core::{resolve_identity, JobDescriptor};

use crate::error::ApiError;
use crate::state::ApiState;

/// Response for listing jobs.
#[derive(Debug, Serialize, Deserialize)]
pub struct JobListResponse {
    pub count: usize,
    pub jobs: Vec<JobDescriptor>,
}

impl From<Vec<JobDescriptor>> for JobListResponse {
    fn from(jobs: Vec<JobDescriptor>) -> Self {
        Self {
            count: jobs.len(),
            jobs,
        }
    }
}

/// Liveness response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Build the router for the job API.
pub fn create_router(state: ApiState) -> Router {
    let job_routes = Router::new()
        .route("/jobs", get(list_jobs).delete(delete_all_jobs))
        .route("/groups/{group}/jobs", post(create_job).get(list_group_jobs))
        .route(
            "/groups/{group}/jobs/{name}",
            get(get_job).put(update_job).delete(delete_job),
        )
        .route("/groups/{group}/jobs/{name}/pause", patch(pause_job))
        .route("/groups/{group}/jobs/{name}/resume", patch(resume_job))
        .with_state(state);

    Router::new()
        .nest("/api/v1", job_routes)
        .route("/health", get(health))
}

/// Create a job in a group.
///
/// POST /api/v1/groups/{group}/jobs
pub async fn create_job(
    State(state): State<ApiState>,
    Path(group): Path<String>,
    Json(descriptor): Json<JobDescriptor>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.jobs.create_job(&group, descriptor).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List every job.
///
/// GET /api/v1/jobs
pub async fn list_jobs(State(state): State<ApiState>) -> Result<Json<JobListResponse>, ApiError> {
    let jobs = state.jobs.find_jobs().await?;
    Ok(Json(jobs.into()))
}

/// List the jobs of one group.
///
/// GET /api/v1/groups/{group}/jobs
pub async fn list_group_jobs(
    State(state): State<ApiState>,
    Path(group): Path<String>,
) -> Result<Json<JobListResponse>, ApiError> {
    let jobs = state.jobs.find_group_jobs(&group).await?;
    Ok(Json(jobs.into()))
}

/// Get one job.
///
/// GET /api/v1/groups/{group}/jobs/{name}
pub async fn get_job(
    State(state): State<ApiState>,
    Path((group, name)): Path<(String, String)>,
) -> Result<Json<JobDescriptor>, ApiError> {
    match state.jobs.find_job(&group, &name).await? {
        Some(job) => Ok(Json(job)),
        None => Err(ApiError::JobNotFound(resolve_identity(&group, &name))),
    }
}

/// Update an existing job.
///
/// PUT /api/v1/groups/{group}/jobs/{name}
pub async fn update_job(
    State(state): State<ApiState>,
    Path((group, name)): Path<(String, String)>,
    Json(descriptor): Json<JobDescriptor>,
) -> Result<StatusCode, ApiError> {
    state.jobs.update_job(&group, &name, descriptor).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete one job. Deleting a missing job succeeds.
///
/// DELETE /api/v1/groups/{group}/jobs/{name}
pub async fn delete_job(
    State(state): State<ApiState>,
    Path((group, name)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.jobs.delete_job(&group, &name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete every job.
///
/// DELETE /api/v1/jobs
pub async fn delete_all_jobs(State(state): State<ApiState>) -> Result<StatusCode, ApiError> {
    state.jobs.delete_all_jobs().await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/groups/{group}/jobs/{name}/pause
pub async fn pause_job(
    State(state): State<ApiState>,
    Path((group, name)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.jobs.pause_job(&group, &name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/groups/{group}/jobs/{name}/resume
pub async fn resume_job(
    State(state): State<ApiState>,
    Path((group, name)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    state.jobs.resume_job(&group, &name).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
