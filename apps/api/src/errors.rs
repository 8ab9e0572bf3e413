use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Fixed user-facing message shown whenever the model's reply could not be
/// reduced to the expected JSON shape. Matches the product's pt-BR UI copy.
pub const MALFORMED_RESPONSE_MESSAGE: &str =
    "Erro ao processar dados da IA. A resposta não veio no formato JSON esperado. Tente novamente.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The three kinds the analysis pipeline distinguishes:
/// - `Validation` — a required input is missing; raised before any model call.
/// - `Upstream` — the model round trip itself failed (network, auth, quota).
/// - `MalformedResponse` — text came back but never became a valid object.
///
/// All of them propagate uncaught to the handler; there are no retries and a
/// failed call never yields a partially-populated result.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Model call failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("{}", MALFORMED_RESPONSE_MESSAGE)]
    MalformedResponse,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Upstream(e) => {
                tracing::error!("Model call failed: {e}");
                // Provider message passed through as-is; not classified further.
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", e.to_string())
            }
            AppError::MalformedResponse => (
                StatusCode::BAD_GATEWAY,
                "MALFORMED_MODEL_RESPONSE",
                MALFORMED_RESPONSE_MESSAGE.to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("query cannot be empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_malformed_response_maps_to_502_with_fixed_message() {
        let err = AppError::MalformedResponse;
        assert_eq!(err.to_string(), MALFORMED_RESPONSE_MESSAGE);
        assert!(!MALFORMED_RESPONSE_MESSAGE.is_empty());

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_upstream_maps_to_502() {
        let err = AppError::Upstream(LlmError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
