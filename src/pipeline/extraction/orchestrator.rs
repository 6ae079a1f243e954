use super::parser::parse_extraction_response;
use super::prompt::{build_extraction_prompt, EXTRACTION_SYSTEM_PROMPT};
use super::types::{DiagnosisList, LlmClient};
use super::ExtractionError;

/// Orchestrates diagnosis extraction: prompt → model → parse.
///
/// The model is called exactly once per document; failures propagate to the
/// caller without retry. By the time this runs, normalization has already
/// completed — an extraction failure never affects the cleaned text.
pub struct DiagnosisExtractor {
    llm: Box<dyn LlmClient + Send + Sync>,
    model: String,
}

impl DiagnosisExtractor {
    pub fn new(llm: Box<dyn LlmClient + Send + Sync>, model: &str) -> Self {
        Self {
            llm,
            model: model.to_string(),
        }
    }

    pub fn extract(&self, cleaned_text: &str) -> Result<DiagnosisList, ExtractionError> {
        let _span = tracing::info_span!(
            "extract_diagnoses",
            model = %self.model,
            text_length = cleaned_text.len()
        )
        .entered();

        let prompt = build_extraction_prompt(cleaned_text);
        let response = self
            .llm
            .generate(&self.model, &prompt, EXTRACTION_SYSTEM_PROMPT)?;
        let list = parse_extraction_response(&response)?;

        tracing::info!(records = list.diagnostics.len(), "Diagnosis extraction complete");
        Ok(list)
    }
}
