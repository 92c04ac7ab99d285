//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::matching::ranking::{summarize, MatchSummary};
use crate::models::Profile;
use crate::settings::validate_threshold;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub profile: Profile,
    /// Overrides the configured threshold for this request only.
    pub min_threshold: Option<u32>,
}

/// POST /api/v1/matches
///
/// Scores the profile against every active posting and returns the ranked matches
/// with the averaged breakdown. A run with at least one match is recorded in analytics.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchSummary>, AppError> {
    let min_threshold = match request.min_threshold {
        Some(threshold) => validate_threshold(threshold)?,
        None => state.settings.read().await.min_match_threshold,
    };

    let jobs = state.jobs.list_active().await?;
    let summary = summarize(state.scorer.as_ref(), &request.profile, &jobs, min_threshold);

    if let Some(best) = summary.best_match_score {
        state.analytics.write().await.record_analysis(best, Utc::now());
    }

    info!(
        "Match run: {} of {} active jobs at or above {}",
        summary.matches.len(),
        summary.active_jobs,
        min_threshold
    );

    Ok(Json(summary))
}
