use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::settings::{Settings, SettingsPatch};
use crate::state::AppState;

/// GET /api/v1/settings
pub async fn handle_get_settings(State(state): State<AppState>) -> Json<Settings> {
    Json(state.settings.read().await.clone())
}

/// PATCH /api/v1/settings
pub async fn handle_update_settings(
    State(state): State<AppState>,
    Json(patch): Json<SettingsPatch>,
) -> Result<Json<Settings>, AppError> {
    let mut settings = state.settings.write().await;
    settings.apply(patch)?;
    info!("Settings updated: min_match_threshold={}", settings.min_match_threshold);
    Ok(Json(settings.clone()))
}
