//! Domain model for the M6A (six-attribute) analysis framework.
//!
//! Wire names are camelCase because the prompt schema examples — and thus the
//! JSON the model returns — use them. Any field added here must also be added
//! to the matching example in `prompts.rs`, or the strict parse will reject
//! otherwise good replies.

use serde::{Deserialize, Serialize};

/// Closed set of sports the M6A rubric covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sport {
    Football,
    Basketball,
    Volleyball,
}

impl Sport {
    /// pt-BR label used inside prompt text, matching the rubric headings in
    /// the system instruction.
    pub fn label(self) -> &'static str {
        match self {
            Sport::Football => "Futebol",
            Sport::Basketball => "Basquete",
            Sport::Volleyball => "Vôlei",
        }
    }
}

/// The six-attribute score vector. Nominal range 0-100, not enforced —
/// values arrive from the model as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub defense: u32,
    pub attack: u32,
    pub physical: u32,
    pub mentality: u32,
    pub technique: u32,
    pub talent: u32,
}

/// A web citation sourced from grounding metadata, never from the JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub title: Option<String>,
    pub url: String,
}

/// A fully analyzed player or team.
///
/// The comparison and matchup prompts use trimmed-down schema examples, so
/// everything but the name, score, and attribute vector carries a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedEntity {
    pub entity_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub overall_score: u32,
    pub attributes: Attributes,
    /// Markdown prose justifying the scores.
    #[serde(default)]
    pub justification: String,
    #[serde(default)]
    pub key_metrics: Vec<String>,
    #[serde(default)]
    pub references: Option<Vec<Reference>>,
}

/// Head-to-head comparison of two players.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerComparison {
    pub player_a: AnalyzedEntity,
    pub player_b: AnalyzedEntity,
    pub winner: String,
    pub comparison_analysis: String,
    #[serde(default)]
    pub references: Option<Vec<Reference>>,
}

/// Predicted outcome of a hypothetical matchup between two teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupPrediction {
    pub team_a: AnalyzedEntity,
    pub team_b: AnalyzedEntity,
    pub predicted_score: String,
    pub analysis: String,
    #[serde(default)]
    pub references: Option<Vec<Reference>>,
}

/// A scouting recommendation fixing a team's weakness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoutSuggestion {
    pub target_attribute: String,
    pub suggested_player: String,
    pub current_team: String,
    /// Markdown reasoning for the pick.
    pub reasoning: String,
    pub viability_score: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub references: Option<Vec<Reference>>,
}

/// Implemented by every top-level analysis result so the gateway can attach
/// grounding references uniformly after parsing. References never come from
/// the JSON body — the model does not reliably place citations there.
pub trait WithReferences {
    fn set_references(&mut self, references: Vec<Reference>);
}

impl WithReferences for AnalyzedEntity {
    fn set_references(&mut self, references: Vec<Reference>) {
        self.references = Some(references);
    }
}

impl WithReferences for PlayerComparison {
    fn set_references(&mut self, references: Vec<Reference>) {
        self.references = Some(references);
    }
}

impl WithReferences for MatchupPrediction {
    fn set_references(&mut self, references: Vec<Reference>) {
        self.references = Some(references);
    }
}

impl WithReferences for ScoutSuggestion {
    fn set_references(&mut self, references: Vec<Reference>) {
        self.references = Some(references);
    }
}
