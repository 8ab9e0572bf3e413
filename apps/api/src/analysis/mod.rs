//! The M6A analysis pipeline: prompt construction, one model round trip per
//! mode, tolerant JSON normalization, and reference extraction.

pub mod gateway;
pub mod grounding;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
