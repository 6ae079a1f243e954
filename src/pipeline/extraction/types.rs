use serde::{Deserialize, Serialize};

use super::ExtractionError;

/// One diagnostic mention extracted from a clinical note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// The diagnostic term itself, e.g. "diabetes".
    pub term: String,
    /// The surrounding text the term appeared in, e.g. "patient has diabetes".
    pub context: String,
    /// Temporal aspect, e.g. "present", "past", "chronic". Free-form: the
    /// pipeline enforces no fixed vocabulary here.
    pub temporal: String,
}

/// The complete extraction result for one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosisList {
    pub diagnostics: Vec<Diagnosis>,
}

/// Generative model client abstraction (allows mocking).
pub trait LlmClient {
    fn generate(
        &self,
        model: &str,
        prompt: &str,
        system: &str,
    ) -> Result<String, ExtractionError>;
}
