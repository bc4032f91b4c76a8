//! Global CLI options shared across all commands
//!
//! Collects the global flags once after parsing so command handlers take a
//! single argument.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::{self, Settings};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > default. Import mode is on when either
/// `--import` is given or `ORGPLAN_IMPORT` is set to anything other than an
/// empty string, `0` or `false`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (pretty, table, json)
    pub format: OutputFormat,

    /// Directory holding `github.yaml`
    pub data_dir: PathBuf,

    /// Explicit document path, overrides `data_dir`
    pub file: Option<PathBuf>,

    /// Resolved run settings
    pub settings: Settings,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            data_dir: cli.data_dir.clone(),
            file: cli.file.clone(),
            settings: Settings {
                import_mode: cli.import,
            },
        }
    }

    /// Path of the organization document to load
    pub fn document_path(&self) -> PathBuf {
        match &self.file {
            Some(file) => file.clone(),
            None => config::default_path(&self.data_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_document_path_defaults_to_data_dir() {
        let cli = parse(&["orgplan", "plan", "--data-dir", "/srv/org"]);
        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.document_path(), PathBuf::from("/srv/org/github.yaml"));
        assert!(!opts.settings.import_mode);
    }

    #[test]
    fn test_file_overrides_data_dir() {
        let cli = parse(&["orgplan", "validate", "--data-dir", "/srv/org", "--file", "org.yaml"]);
        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.document_path(), PathBuf::from("org.yaml"));
    }

    #[test]
    fn test_import_mode_from_flag() {
        let flagged = GlobalOptions::from_cli(&parse(&["orgplan", "plan", "--import"]));
        assert!(flagged.settings.import_mode);

        let plain = GlobalOptions::from_cli(&parse(&["orgplan", "plan"]));
        assert!(!plain.settings.import_mode);
    }
}
