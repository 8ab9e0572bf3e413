//! Analysis gateway — exactly one model round trip per invocation.
//!
//! All four modes share the same orchestration: build the mode's prompt,
//! call the model with the M6A system instruction, normalize the reply text
//! into the mode's shape, attach references extracted from grounding
//! metadata. Failures propagate typed; it is all-or-nothing per call.

use serde::de::DeserializeOwned;

use crate::analysis::grounding::extract_references;
use crate::analysis::models::{
    AnalyzedEntity, MatchupPrediction, PlayerComparison, ScoutSuggestion, Sport, WithReferences,
};
use crate::analysis::normalize::normalize;
use crate::analysis::prompts;
use crate::errors::AppError;
use crate::llm_client::GenerativeModel;

/// A single analysis request, tagged by mode. Keeping the four call shapes
/// behind one type keeps the prompt/shape pairs in one place.
#[derive(Debug, Clone)]
pub enum AnalysisRequest {
    Entity {
        query: String,
    },
    Comparison {
        player_a: String,
        player_b: String,
    },
    Matchup {
        team_a: String,
        team_b: String,
    },
    Scout {
        team: String,
        problem_area: String,
    },
}

impl AnalysisRequest {
    fn prompt(&self, sport: Sport) -> String {
        match self {
            AnalysisRequest::Entity { query } => prompts::entity_prompt(query, sport),
            AnalysisRequest::Comparison { player_a, player_b } => {
                prompts::comparison_prompt(player_a, player_b, sport)
            }
            AnalysisRequest::Matchup { team_a, team_b } => {
                prompts::matchup_prompt(team_a, team_b, sport)
            }
            AnalysisRequest::Scout { team, problem_area } => {
                prompts::scout_prompt(team, problem_area, sport)
            }
        }
    }
}

/// Shared orchestration routine for all four modes.
async fn run_analysis<T>(
    model: &dyn GenerativeModel,
    request: AnalysisRequest,
    sport: Sport,
) -> Result<T, AppError>
where
    T: DeserializeOwned + WithReferences,
{
    let prompt = request.prompt(sport);
    let reply = model.generate(&prompt, prompts::M6A_SYSTEM).await?;

    let text = reply.text.unwrap_or_else(|| "{}".to_string());
    let mut parsed: T = normalize(&text)?;
    parsed.set_references(extract_references(reply.grounding.as_ref()));

    Ok(parsed)
}

/// Rejects a blank required subject before any prompt is built or any
/// network cost is paid. Messages are the product's pt-BR UI copy.
fn require_subject(subject: &str, message: &str) -> Result<(), AppError> {
    if subject.trim().is_empty() {
        return Err(AppError::Validation(message.to_string()));
    }
    Ok(())
}

/// M6A analysis of a single player or team.
pub async fn analyze_entity(
    model: &dyn GenerativeModel,
    query: &str,
    sport: Sport,
) -> Result<AnalyzedEntity, AppError> {
    run_analysis(
        model,
        AnalysisRequest::Entity {
            query: query.to_string(),
        },
        sport,
    )
    .await
}

/// Head-to-head comparison of two players.
pub async fn compare_players(
    model: &dyn GenerativeModel,
    player_a: &str,
    player_b: &str,
    sport: Sport,
) -> Result<PlayerComparison, AppError> {
    require_subject(
        player_b,
        "Por favor, insira o nome do segundo jogador para comparar",
    )?;
    run_analysis(
        model,
        AnalysisRequest::Comparison {
            player_a: player_a.to_string(),
            player_b: player_b.to_string(),
        },
        sport,
    )
    .await
}

/// Predicted outcome of a hypothetical matchup between two teams.
pub async fn predict_matchup(
    model: &dyn GenerativeModel,
    team_a: &str,
    team_b: &str,
    sport: Sport,
) -> Result<MatchupPrediction, AppError> {
    require_subject(team_b, "Por favor, insira o segundo time/jogador")?;
    run_analysis(
        model,
        AnalysisRequest::Matchup {
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
        },
        sport,
    )
    .await
}

/// Scouting recommendation targeting a described weakness.
pub async fn scout_player(
    model: &dyn GenerativeModel,
    team: &str,
    problem_area: &str,
    sport: Sport,
) -> Result<ScoutSuggestion, AppError> {
    require_subject(
        problem_area,
        "Por favor, descreva a área problemática (Input 2)",
    )?;
    run_analysis(
        model,
        AnalysisRequest::Scout {
            team: team.to_string(),
            problem_area: problem_area.to_string(),
        },
        sport,
    )
    .await
}
