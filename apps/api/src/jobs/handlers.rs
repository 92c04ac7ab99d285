//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::analytics::handlers::refresh_job_stats;
use crate::errors::AppError;
use crate::models::{JobPatch, JobPosting, NewJob};
use crate::state::AppState;

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    Ok(Json(state.jobs.list().await?))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobPosting>, AppError> {
    state
        .jobs
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(new_job): Json<NewJob>,
) -> Result<(StatusCode, Json<JobPosting>), AppError> {
    if new_job.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let job = state.jobs.create(new_job).await?;
    refresh_job_stats(&state).await?;
    info!("Created job {} ({})", job.id, job.title);

    Ok((StatusCode::CREATED, Json(job)))
}

/// PATCH /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<JobPatch>,
) -> Result<Json<JobPosting>, AppError> {
    if patch.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let job = state
        .jobs
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    refresh_job_stats(&state).await?;
    info!("Updated job {id}");

    Ok(Json(job))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.jobs.delete(id).await? {
        return Err(AppError::NotFound(format!("Job {id} not found")));
    }
    refresh_job_stats(&state).await?;
    info!("Deleted job {id}");

    Ok(StatusCode::NO_CONTENT)
}
