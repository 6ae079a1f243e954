pub mod gemini;
pub mod orchestrator;
pub mod output;
pub mod parser;
pub mod prompt;
pub mod types;

pub use gemini::*;
pub use orchestrator::*;
pub use output::*;
pub use parser::*;
pub use prompt::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("No API key found: set GEMINI_API_KEY (or GOOGLE_AI_API_KEY)")]
    MissingApiKey,

    #[error("Cannot reach the generative API at {0}")]
    Connection(String),

    #[error("Generative API returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed model response: {0}")]
    MalformedResponse(String),

    #[error("JSON parsing error: {0}")]
    JsonParsing(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
