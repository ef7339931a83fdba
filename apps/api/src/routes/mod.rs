pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as extraction;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Extraction API
        .route(
            "/api/v1/candidates/extract",
            post(extraction::handle_extract_candidate),
        )
        .route("/api/v1/jobs/analyze", post(extraction::handle_analyze_job))
        // Matching API
        .route("/api/v1/matches/score", post(matching::handle_score_match))
        .route("/api/v1/matches/rank", post(matching::handle_rank_candidates))
        .with_state(state)
}
