//! Maps the model's grounding metadata to ordered domain references.

use crate::analysis::models::Reference;
use crate::llm_client::GroundingMetadata;

/// Extracts web citations from grounding metadata, preserving order.
/// Chunks without a web citation are dropped. Absent metadata yields an
/// empty list, never an absence, so callers can always iterate the result.
pub fn extract_references(metadata: Option<&GroundingMetadata>) -> Vec<Reference> {
    metadata
        .map(|m| m.grounding_chunks.as_slice())
        .unwrap_or_default()
        .iter()
        .filter_map(|chunk| {
            chunk.web.as_ref().map(|web| Reference {
                title: web.title.clone(),
                url: web.uri.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{GroundingChunk, WebSource};

    fn web_chunk(title: &str, uri: &str) -> GroundingChunk {
        GroundingChunk {
            web: Some(WebSource {
                title: Some(title.to_string()),
                uri: uri.to_string(),
            }),
        }
    }

    #[test]
    fn test_absent_metadata_yields_empty_list() {
        assert!(extract_references(None).is_empty());
    }

    #[test]
    fn test_empty_chunk_list_yields_empty_list() {
        let metadata = GroundingMetadata {
            grounding_chunks: vec![],
        };
        assert!(extract_references(Some(&metadata)).is_empty());
    }

    #[test]
    fn test_mixed_chunks_keep_only_web_citations_in_order() {
        let metadata = GroundingMetadata {
            grounding_chunks: vec![
                web_chunk("ESPN", "https://espn.com/a"),
                GroundingChunk { web: None },
                web_chunk("Globo Esporte", "https://ge.globo.com/b"),
                GroundingChunk { web: None },
            ],
        };
        let references = extract_references(Some(&metadata));
        assert_eq!(references.len(), 2);
        assert_eq!(references[0].url, "https://espn.com/a");
        assert_eq!(references[1].url, "https://ge.globo.com/b");
        assert_eq!(references[1].title.as_deref(), Some("Globo Esporte"));
    }

    #[test]
    fn test_untitled_web_citation_is_kept() {
        let metadata = GroundingMetadata {
            grounding_chunks: vec![GroundingChunk {
                web: Some(WebSource {
                    title: None,
                    uri: "https://example.com".to_string(),
                }),
            }],
        };
        let references = extract_references(Some(&metadata));
        assert_eq!(references.len(), 1);
        assert!(references[0].title.is_none());
    }
}
