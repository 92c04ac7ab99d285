use anyhow::Result;
use axum::{extract::State, Json};
use serde::Serialize;

use crate::analytics::Analytics;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    #[serde(flatten)]
    pub analytics: Analytics,
    pub average_match_rate: u32,
    pub top_skill: Option<String>,
}

/// GET /api/v1/analytics
pub async fn handle_get_analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    let analytics = state.analytics.read().await.clone();
    let average_match_rate = analytics.average_match_rate();
    let top_skill = analytics.top_skill().map(str::to_string);
    Json(AnalyticsResponse {
        analytics,
        average_match_rate,
        top_skill,
    })
}

/// Re-derives job statistics after the job set changes.
pub async fn refresh_job_stats(state: &AppState) -> Result<()> {
    let active = state.jobs.list_active().await?;
    state.analytics.write().await.refresh_job_stats(&active);
    Ok(())
}
