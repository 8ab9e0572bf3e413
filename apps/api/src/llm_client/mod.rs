/// Gemini client — the single point of entry for all model calls.
///
/// ARCHITECTURAL RULE: No other module may call the Generative Language API
/// directly. Every analysis mode goes through `GenerativeModel::generate`.
///
/// Web-search grounding is always enabled: the prompts ask the model to
/// verify rosters, form, and market values against current data, and the
/// grounding chunks it returns become the references shown to the user.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
    tools: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Grounding metadata the model attaches when web search was used.
/// Schema owned by the provider; only the web citations are read here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebSource {
    #[serde(default)]
    pub title: Option<String>,
    pub uri: String,
}

/// One settled model round trip: the candidate's concatenated text parts
/// (if any) plus whatever grounding metadata it carried.
#[derive(Debug, Default)]
pub struct ModelReply {
    pub text: Option<String>,
    pub grounding: Option<GroundingMetadata>,
}

impl GenerateContentResponse {
    /// Collapses the first candidate into a `ModelReply`.
    fn into_reply(self) -> ModelReply {
        let candidate = match self.candidates.into_iter().next() {
            Some(c) => c,
            None => return ModelReply::default(),
        };

        let text = candidate.content.and_then(|content| {
            let joined: String = content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect();
            (!joined.is_empty()).then_some(joined)
        });

        ModelReply {
            text,
            grounding: candidate.grounding_metadata,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Abstraction over the model provider so the gateway can be exercised with
/// a stub client in tests.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(&self, prompt: &str, system: &str) -> Result<ModelReply, LlmError>;
}

/// Production client for the Gemini `generateContent` endpoint.
/// One round trip per call; no retries — a failed call surfaces its error
/// immediately and the user re-triggers manually.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(&self, prompt: &str, system: &str) -> Result<ModelReply, LlmError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: Content {
                parts: vec![Part { text: system }],
            },
            tools: vec![json!({ "google_search": {} })],
        };

        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the provider's error message
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let reply: GenerateContentResponse = response.json().await?;
        let reply = reply.into_reply();

        debug!(
            "Model call succeeded: text_len={}, grounding_chunks={}",
            reply.text.as_deref().map_or(0, str::len),
            reply
                .grounding
                .as_ref()
                .map_or(0, |g| g.grounding_chunks.len())
        );

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_into_reply_joins_text_parts() {
        let json = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "{\"entity"},
                        {"text": "Name\": \"Test\"}"}
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let reply = response.into_reply();
        assert_eq!(reply.text.as_deref(), Some("{\"entityName\": \"Test\"}"));
        assert!(reply.grounding.is_none());
    }

    #[test]
    fn test_response_into_reply_carries_grounding_metadata() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "{}"}]},
                "groundingMetadata": {
                    "groundingChunks": [
                        {"web": {"title": "ESPN", "uri": "https://espn.com/a"}},
                        {"retrievedContext": {"uri": "ignored"}}
                    ]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let reply = response.into_reply();
        let grounding = reply.grounding.unwrap();
        assert_eq!(grounding.grounding_chunks.len(), 2);
        assert_eq!(
            grounding.grounding_chunks[0].web.as_ref().unwrap().uri,
            "https://espn.com/a"
        );
        assert!(grounding.grounding_chunks[1].web.is_none());
    }

    #[test]
    fn test_response_without_candidates_yields_empty_reply() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        let reply = response.into_reply();
        assert!(reply.text.is_none());
        assert!(reply.grounding.is_none());
    }
}
