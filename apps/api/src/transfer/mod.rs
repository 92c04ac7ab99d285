//! Export/import of the full data set as one JSON snapshot.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analytics::handlers::refresh_job_stats;
use crate::analytics::Analytics;
use crate::errors::AppError;
use crate::jobs::find_duplicate_id;
use crate::models::JobPosting;
use crate::settings::{validate_threshold, Settings};
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataExport {
    pub jobs: Vec<JobPosting>,
    pub analytics: Analytics,
    pub settings: Settings,
    pub export_date: DateTime<Utc>,
}

/// Import body. Each section is optional; absent sections are left untouched.
/// Field aliases accept the legacy camelCase export, whose `exportDate` is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataImport {
    pub jobs: Option<Vec<JobPosting>>,
    pub analytics: Option<Analytics>,
    pub settings: Option<Settings>,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub jobs_imported: Option<usize>,
    pub analytics_imported: bool,
    pub settings_imported: bool,
}

/// GET /api/v1/export
pub async fn handle_export(State(state): State<AppState>) -> Result<Json<DataExport>, AppError> {
    Ok(Json(DataExport {
        jobs: state.jobs.list().await?,
        analytics: state.analytics.read().await.clone(),
        settings: state.settings.read().await.clone(),
        export_date: Utc::now(),
    }))
}

/// POST /api/v1/import
pub async fn handle_import(
    State(state): State<AppState>,
    Json(import): Json<DataImport>,
) -> Result<Json<ImportResponse>, AppError> {
    // Validate everything before touching any store.
    if let Some(settings) = &import.settings {
        validate_threshold(settings.min_match_threshold)?;
    }
    if let Some(id) = import.jobs.as_deref().and_then(find_duplicate_id) {
        return Err(AppError::Validation(format!(
            "jobs contain id {id} more than once"
        )));
    }

    let response = ImportResponse {
        jobs_imported: import.jobs.as_ref().map(Vec::len),
        analytics_imported: import.analytics.is_some(),
        settings_imported: import.settings.is_some(),
    };

    if let Some(settings) = import.settings {
        *state.settings.write().await = settings;
    }
    if let Some(analytics) = import.analytics {
        *state.analytics.write().await = analytics;
    }
    if let Some(jobs) = import.jobs {
        state.jobs.replace_all(jobs).await?;
        refresh_job_stats(&state).await?;
    }

    info!(
        "Import applied: jobs={:?} analytics={} settings={}",
        response.jobs_imported, response.analytics_imported, response.settings_imported
    );

    Ok(Json(response))
}
