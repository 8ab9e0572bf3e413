//! Tolerant JSON extraction from raw model output.
//!
//! The model is instructed to answer with a single JSON object, but replies
//! routinely arrive wrapped in code fences or conversational filler. The
//! repair here is deliberately narrow: strip fence markers, slice to the
//! outermost brace pair, then parse strictly. Anything that still fails is a
//! malformed-response error — never a partial object, never defaults.

use serde::de::DeserializeOwned;
use tracing::error;

use crate::errors::AppError;

/// Parses `raw` into `T` after fence stripping and brace slicing.
/// At most one object is extracted per call; failure logs the offending raw
/// text and the underlying cause for diagnosis.
pub fn normalize<T: DeserializeOwned>(raw: &str) -> Result<T, AppError> {
    let sliced = slice_json(raw);
    serde_json::from_str(&sliced).map_err(|e| {
        error!("Failed to parse model response: {e}; raw text: {raw}");
        AppError::MalformedResponse
    })
}

/// Removes code-fence markers, then slices to
/// `text[first '{' ..= last '}']` to discard surrounding prose.
///
/// Slicing uses the outermost brace positions, not balanced matching: a
/// closing brace occurring only inside a trailing string value would
/// mis-slice. Accepted limitation, kept as-is.
fn slice_json(raw: &str) -> String {
    let cleaned = raw.replace("```json", "").replace("```", "");

    match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(open), Some(close)) if close > open => cleaned[open..=close].to_string(),
        _ => cleaned,
    }
}
