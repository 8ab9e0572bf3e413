pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analysis/entity",
            post(handlers::handle_analyze_entity),
        )
        .route(
            "/api/v1/analysis/compare",
            post(handlers::handle_compare_players),
        )
        .route(
            "/api/v1/analysis/matchup",
            post(handlers::handle_predict_matchup),
        )
        .route(
            "/api/v1/analysis/scout",
            post(handlers::handle_scout_player),
        )
        .with_state(state)
}
