//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - grouped by resource kind with colors
    #[default]
    Pretty,
    /// Table format - one row per resource
    Table,
    /// JSON format - structured for scripts and the provisioning engine
    Json,
}
