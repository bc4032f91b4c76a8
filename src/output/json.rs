//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the run
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// When the plan was produced
    pub timestamp: String,

    /// orgplan version
    pub version: String,

    /// Whether import directives were attached
    pub import_mode: bool,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T, import_mode: bool) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                import_mode,
            },
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(
    data: &T,
    import_mode: bool,
) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(data, import_mode);
    serde_json::to_string_pretty(&output)
}
