//! Source document loading.
//!
//! Clinical notes arrive as text files of unknown provenance: exports from
//! hospital systems, PDF text dumps, OCR output. Decoding tries UTF-8 first
//! and falls back to Latin-1, which cannot fail (every byte maps directly to
//! the code point with the same value). Only a missing or unreadable file is
//! an error, and it aborts the run before normalization starts.

use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a source document, decoding UTF-8 with a Latin-1 fallback.
pub fn load_document(path: &Path) -> Result<String, ImportError> {
    let bytes = std::fs::read(path)?;

    match String::from_utf8(bytes) {
        Ok(text) => {
            tracing::debug!(
                path = %path.display(),
                bytes = text.len(),
                "Source decoded as UTF-8"
            );
            Ok(text)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                "Source is not valid UTF-8, decoding as Latin-1"
            );
            Ok(decode_latin1(&e.into_bytes()))
        }
    }
}

/// Latin-1 is a 1:1 byte-to-code-point mapping.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
