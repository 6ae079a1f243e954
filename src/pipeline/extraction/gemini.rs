use serde::{Deserialize, Serialize};

use super::types::LlmClient;
use super::ExtractionError;

/// Default generative model for diagnosis extraction.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Hosted Generative Language API endpoint.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Near-deterministic sampling for extraction work.
const TEMPERATURE: f32 = 0.1;

/// Google Generative Language API client.
///
/// The API key is passed in explicitly; nothing here reads the environment
/// except [`GeminiClient::from_env`], so tests never need to mutate it.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GeminiClient {
    pub fn new(api_key: &str, base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client for the hosted endpoint with a 2-minute timeout, reading the
    /// key from `GEMINI_API_KEY` (then `GOOGLE_AI_API_KEY`). A missing key is
    /// fatal for extraction only — normalization has already completed by the
    /// time this is called.
    pub fn from_env() -> Result<Self, ExtractionError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_AI_API_KEY"))
            .map_err(|_| ExtractionError::MissingApiKey)?;
        Ok(Self::new(&api_key, DEFAULT_BASE_URL, 120))
    }
}

/// Request body for models/{model}:generateContent
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

/// Response body from models/{model}:generateContent
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

impl LlmClient for GeminiClient {
    fn generate(
        &self,
        model: &str,
        prompt: &str,
        system: &str,
    ) -> Result<String, ExtractionError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: Content {
                parts: vec![Part { text: system }],
            },
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                response_mime_type: "application/json",
            },
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ExtractionError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    ExtractionError::HttpClient(format!(
                        "Request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    ExtractionError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ExtractionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .map_err(|e| ExtractionError::ResponseParsing(e.to_string()))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .map(|c| {
                c.content
                    .parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<String>()
            })
            .ok_or_else(|| {
                ExtractionError::MalformedResponse("Response contains no candidates".into())
            })?;

        Ok(text)
    }
}

/// Mock model client for testing — returns a configurable response.
pub struct MockLlmClient {
    response: String,
    fail: bool,
}

impl MockLlmClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            response: String::new(),
            fail: true,
        }
    }
}

impl LlmClient for MockLlmClient {
    fn generate(
        &self,
        _model: &str,
        _prompt: &str,
        _system: &str,
    ) -> Result<String, ExtractionError> {
        if self.fail {
            return Err(ExtractionError::Connection("http://mock.invalid".into()));
        }
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_client_returns_configured_response() {
        let client = MockLlmClient::new("test response");
        let result = client.generate("model", "prompt", "system").unwrap();
        assert_eq!(result, "test response");
    }

    #[test]
    fn mock_client_propagates_failure() {
        let client = MockLlmClient::failing();
        let result = client.generate("model", "prompt", "system");
        assert!(matches!(result, Err(ExtractionError::Connection(_))));
    }

    #[test]
    fn client_trims_trailing_slash() {
        let client = GeminiClient::new("key", "https://example.test/v1beta/", 60);
        assert_eq!(client.base_url, "https://example.test/v1beta");
        assert_eq!(client.timeout_secs, 60);
    }

    #[test]
    fn request_body_uses_api_field_names() {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "doc" }],
            }],
            system_instruction: Content {
                parts: vec![Part { text: "sys" }],
            },
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                response_mime_type: "application/json",
            },
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"systemInstruction\""));
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"responseMimeType\":\"application/json\""));
    }

    #[test]
    fn response_with_parts_concatenates() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"{\"diagnostics\""},{"text":":[]}"}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        let text: String = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect();
        assert_eq!(text, r#"{"diagnostics":[]}"#);
    }

    #[test]
    fn response_without_candidates_deserializes() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
