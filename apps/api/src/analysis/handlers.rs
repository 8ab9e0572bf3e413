//! Axum route handlers for the Analysis API.
//!
//! Handlers stay thin: first-subject validation, then one gateway call.
//! Loading state and error display belong to the consumer.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::gateway;
use crate::analysis::models::{
    AnalyzedEntity, MatchupPrediction, PlayerComparison, ScoutSuggestion, Sport,
};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EntityRequest {
    pub query: String,
    pub sport: Sport,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    pub player_a: String,
    pub player_b: String,
    pub sport: Sport,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupRequest {
    pub team_a: String,
    pub team_b: String,
    pub sport: Sport,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutRequest {
    pub team: String,
    pub problem_area: String,
    pub sport: Sport,
}

/// POST /api/v1/analysis/entity
///
/// M6A report card for a single player or team.
pub async fn handle_analyze_entity(
    State(state): State<AppState>,
    Json(request): Json<EntityRequest>,
) -> Result<Json<AnalyzedEntity>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let result =
        gateway::analyze_entity(state.model.as_ref(), &request.query, request.sport).await?;

    Ok(Json(result))
}

/// POST /api/v1/analysis/compare
///
/// Head-to-head comparison of two players.
pub async fn handle_compare_players(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<PlayerComparison>, AppError> {
    if request.player_a.trim().is_empty() {
        return Err(AppError::Validation("playerA cannot be empty".to_string()));
    }

    let result = gateway::compare_players(
        state.model.as_ref(),
        &request.player_a,
        &request.player_b,
        request.sport,
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/v1/analysis/matchup
///
/// Predicted outcome of a hypothetical matchup between two teams.
pub async fn handle_predict_matchup(
    State(state): State<AppState>,
    Json(request): Json<MatchupRequest>,
) -> Result<Json<MatchupPrediction>, AppError> {
    if request.team_a.trim().is_empty() {
        return Err(AppError::Validation("teamA cannot be empty".to_string()));
    }

    let result = gateway::predict_matchup(
        state.model.as_ref(),
        &request.team_a,
        &request.team_b,
        request.sport,
    )
    .await?;

    Ok(Json(result))
}

/// POST /api/v1/analysis/scout
///
/// Scouting recommendation for a team's described weakness.
pub async fn handle_scout_player(
    State(state): State<AppState>,
    Json(request): Json<ScoutRequest>,
) -> Result<Json<ScoutSuggestion>, AppError> {
    if request.team.trim().is_empty() {
        return Err(AppError::Validation("team cannot be empty".to_string()));
    }

    let result = gateway::scout_player(
        state.model.as_ref(),
        &request.team,
        &request.problem_area,
        request.sport,
    )
    .await?;

    Ok(Json(result))
}
