pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"
You are a medical diagnosis extraction assistant. Your ONLY role is to list
the diagnoses mentioned in the clinical text you are given.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Extract ONLY diagnoses explicitly stated in the text.
2. NEVER add interpretation, new diagnoses, advice, or clinical opinion.
3. For each diagnosis, quote the surrounding context verbatim from the text.
4. Classify the temporal aspect in one or two words (e.g. "present", "past",
   "chronic", "resolved", "suspected").
5. Output MUST be a single valid JSON object and nothing else.
"#;

/// Build the extraction prompt for one normalized document.
pub fn build_extraction_prompt(cleaned_text: &str) -> String {
    format!(
        r#"Extract all medical diagnoses from the following text. Return a JSON
list of diagnoses with their context and temporal aspects.

<document>
{cleaned_text}
</document>

Use exactly this JSON structure:

{{
  "diagnostics": [
    {{
      "term": "the diagnostic term, e.g. diabetes",
      "context": "the sentence or clause the term appears in",
      "temporal": "present | past | chronic | ... (free text)"
    }}
  ]
}}
"#
    )
}
