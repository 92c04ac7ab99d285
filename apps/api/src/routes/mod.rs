pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics::handlers as analytics;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::settings::handlers as settings;
use crate::state::AppState;
use crate::transfer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/matches", post(matching::handle_match))
        // Jobs API
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handle_get_job)
                .patch(jobs::handle_update_job)
                .delete(jobs::handle_delete_job),
        )
        // Settings / analytics
        .route(
            "/api/v1/settings",
            get(settings::handle_get_settings).patch(settings::handle_update_settings),
        )
        .route("/api/v1/analytics", get(analytics::handle_get_analytics))
        // Export / import
        .route("/api/v1/export", get(transfer::handle_export))
        .route("/api/v1/import", post(transfer::handle_import))
        .with_state(state)
}
