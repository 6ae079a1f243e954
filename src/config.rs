use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "clinsift";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    format!("{APP_NAME}=info")
}

/// Default location of the extraction result file, relative to the
/// working directory.
pub fn default_output_path() -> PathBuf {
    PathBuf::from("output").join("diagnosis_extraction.json")
}
