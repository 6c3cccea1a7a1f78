//! Response normalizer: strips optional markdown code fences from model output
//! and parses the remainder as JSON.
//!
//! The stripper handles exactly one leading fence-open token (with an optional
//! language tag, not just `json`) and one trailing fence-close token, tolerant of
//! surrounding whitespace. Any other wrapping is left alone and surfaces as a
//! parse failure rather than being heuristically repaired.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// How much of the offending model output is kept in error messages.
const EXCERPT_CHARS: usize = 500;

/// Model output that failed to parse as JSON after fence stripping.
/// Carries a truncated excerpt of the raw text for diagnosis.
#[derive(Debug, Error)]
#[error("failed to parse model output as JSON: {source}; raw output: {excerpt}")]
pub struct MalformedResponse {
    #[source]
    pub source: serde_json::Error,
    pub excerpt: String,
}

/// Strips one optional leading ``` (with optional language tag) and one optional
/// trailing ``` from the text, trimming surrounding whitespace. Idempotent on
/// text that carries no fence markers.
pub fn strip_fences(text: &str) -> &str {
    let mut text = text.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // Drop an optional language tag sitting on the fence line.
        let rest = match rest.find('\n') {
            Some(i) if rest[..i].trim().chars().all(|c| c.is_ascii_alphanumeric()) => &rest[i + 1..],
            _ => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };
        text = rest.trim();
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }

    text.trim()
}

/// Fence-strips then deserializes model output. The caller decides whether a
/// `MalformedResponse` is fatal or defaulted.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, MalformedResponse> {
    let stripped = strip_fences(raw);
    serde_json::from_str(stripped).map_err(|source| MalformedResponse {
        source,
        excerpt: truncate_chars(raw.trim(), EXCERPT_CHARS).to_string(),
    })
}

/// Char-boundary-safe prefix of at most `max` characters.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}
