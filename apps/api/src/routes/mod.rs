pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::candidates::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job requirements
        .route(
            "/api/v1/requirements",
            get(handlers::handle_get_requirements).put(handlers::handle_set_requirements),
        )
        // Analysis
        .route("/api/v1/analyses", post(handlers::handle_analyze))
        .route(
            "/api/v1/analyses/upload",
            post(handlers::handle_analyze_upload),
        )
        // Candidate pool
        .route("/api/v1/candidates", get(handlers::handle_list_candidates))
        .route(
            "/api/v1/candidates/save",
            post(handlers::handle_save_candidates),
        )
        .route(
            "/api/v1/candidates/load",
            post(handlers::handle_load_candidates),
        )
        .route("/api/v1/candidates/:id", get(handlers::handle_get_candidate))
        .route(
            "/api/v1/candidates/:id/report",
            get(handlers::handle_get_report),
        )
        .route("/api/v1/demo", post(handlers::handle_run_demo))
        .with_state(state)
}
