//! Organization document loading and run settings

use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Directory holding organization documents when none is given
pub const DEFAULT_DATA_DIR: &str = "data";

/// Conventional file name of the organization document
pub const DOCUMENT_FILE: &str = "github.yaml";

/// Environment variable that switches every build into import mode
pub const IMPORT_ENV: &str = "ORGPLAN_IMPORT";

/// Settings for a single provisioning run.
///
/// Resolved once at startup and passed explicitly to everything that needs
/// it; nothing below the CLI reads the process environment.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Attach import directives to entities that declare an identifier
    pub import_mode: bool,
}

/// Parse the value of `--import` or [`IMPORT_ENV`].
///
/// Empty, `0` and `false` leave import mode off; any other value turns it on.
pub fn import_enabled(value: &str) -> std::result::Result<bool, String> {
    let value = value.trim();
    Ok(!(value.is_empty() || value == "0" || value.eq_ignore_ascii_case("false")))
}

/// Path of the organization document inside a data directory
pub fn default_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DOCUMENT_FILE)
}

/// Load an organization document as a generic YAML mapping
pub fn load_document(path: &Path) -> Result<Mapping> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()).into());
    }

    let contents = std::fs::read_to_string(path)?;
    parse_document(&contents)
}

/// Parse document text into a mapping. An empty document is an empty mapping.
pub fn parse_document(contents: &str) -> Result<Mapping> {
    let value: Value = serde_yaml::from_str(contents).map_err(ConfigError::from)?;

    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        other => Err(ConfigError::Invalid(format!(
            "expected a mapping at the top level, found {}",
            value_kind(&other)
        ))
        .into()),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
