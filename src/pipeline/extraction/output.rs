use std::path::Path;

use super::types::DiagnosisList;
use super::ExtractionError;

/// Write the extraction result as pretty-printed UTF-8 JSON.
///
/// Non-ASCII characters are preserved unescaped. Parent directories are
/// created as needed. Nothing is written if serialization fails, so a
/// partial or corrupt result file never appears.
pub fn write_result_file(path: &Path, result: &DiagnosisList) -> Result<(), ExtractionError> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| ExtractionError::JsonParsing(e.to_string()))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, json.as_bytes())?;

    tracing::info!(
        path = %path.display(),
        records = result.diagnostics.len(),
        "Extraction result written"
    );
    Ok(())
}
