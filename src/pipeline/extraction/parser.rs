use serde::Deserialize;

use super::types::{Diagnosis, DiagnosisList};
use super::ExtractionError;

/// Parse the model's response into a validated diagnosis list.
///
/// The response is expected to be a bare JSON object (the request asks for
/// `application/json`), but a fenced ```json block is accepted too — models
/// fall back to it often enough. Individual records that fail to deserialize
/// or violate the non-empty term/context requirement are dropped with a
/// warning rather than failing the whole document.
pub fn parse_extraction_response(response: &str) -> Result<DiagnosisList, ExtractionError> {
    let json_str = strip_code_fences(response);
    if json_str.is_empty() {
        return Err(ExtractionError::MalformedResponse("Empty response".into()));
    }

    let raw_items = parse_raw_items(json_str)?;
    let candidates: Vec<Diagnosis> = parse_array_lenient(&raw_items);

    let parsed = candidates.len();
    let diagnostics: Vec<Diagnosis> = candidates
        .into_iter()
        .filter(|d| !d.term.trim().is_empty() && !d.context.trim().is_empty())
        .collect();

    let dropped = parsed - diagnostics.len();
    if dropped > 0 {
        tracing::warn!(dropped, "Dropped diagnosis records with empty term or context");
    }

    Ok(DiagnosisList { diagnostics })
}

/// Pull the `diagnostics` array out of the response. A bare top-level array
/// is accepted as the list itself.
fn parse_raw_items(json_str: &str) -> Result<Vec<serde_json::Value>, ExtractionError> {
    #[derive(Deserialize)]
    struct RawResponse {
        diagnostics: Option<Vec<serde_json::Value>>,
    }

    if json_str.starts_with('[') {
        return serde_json::from_str(json_str)
            .map_err(|e| ExtractionError::JsonParsing(e.to_string()));
    }

    let raw: RawResponse = serde_json::from_str(json_str)
        .map_err(|e| ExtractionError::JsonParsing(e.to_string()))?;
    Ok(raw.diagnostics.unwrap_or_default())
}

/// Accept both bare JSON and a ```json fenced block.
fn strip_code_fences(response: &str) -> &str {
    let trimmed = response.trim();
    if let Some(start) = trimmed.find("```json") {
        let content = &trimmed[start + 7..];
        if let Some(end) = content.find("```") {
            return content[..end].trim();
        }
    }
    trimmed
}

/// Parse an array leniently — skip items that fail to deserialize.
fn parse_array_lenient<T: for<'de> Deserialize<'de>>(items: &[serde_json::Value]) -> Vec<T> {
    items
        .iter()
        .filter_map(|v| serde_json::from_value(v.clone()).ok())
        .collect()
}
