//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod plan;
pub mod validate;

pub use args::{GlobalOptions, OutputFormat};
pub use context::BuildContext;

/// orgplan - Declarative GitHub organization provisioning
#[derive(Parser, Debug)]
#[command(name = "orgplan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "ORGPLAN_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Directory containing github.yaml
    #[arg(
        long,
        global = true,
        env = "ORGPLAN_DATA_DIR",
        default_value = crate::config::DEFAULT_DATA_DIR,
        hide_env = true
    )]
    pub data_dir: PathBuf,

    /// Organization document to load (overrides --data-dir)
    #[arg(long, short = 'f', global = true, env = "ORGPLAN_FILE", hide_env = true)]
    pub file: Option<PathBuf>,

    /// Attach import directives to entities declaring an import identifier
    #[arg(
        long,
        global = true,
        env = crate::config::IMPORT_ENV,
        hide_env = true,
        action = clap::ArgAction::SetTrue,
        value_parser = crate::config::import_enabled
    )]
    pub import: bool,

    /// Enable debug logging
    #[arg(long, global = true, env = "ORGPLAN_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the resource graph and print every resource
    #[command(after_help = "EXAMPLES:\n  \
            orgplan plan                          # data/github.yaml, pretty output\n  \
            orgplan plan --format table           # One row per resource\n  \
            orgplan plan -f org.yaml --format json  # Hand the graph to the engine\n  \
            ORGPLAN_IMPORT=1 orgplan plan         # Adopt existing GitHub objects")]
    Plan,

    /// Check the document and print a summary
    Validate,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   orgplan completion bash > /etc/bash_completion.d/orgplan
  zsh:    orgplan completion zsh > \"${fpath[1]}/_orgplan\"
  fish:   orgplan completion fish > ~/.config/fish/completions/orgplan.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
