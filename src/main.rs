//! orgplan - Declarative GitHub organization provisioning from YAML

use clap::Parser;

mod cli;
mod config;
mod declare;
mod error;
mod models;
mod options;
mod org;
mod output;
mod provider;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Plan => cli::plan::run(&opts),
        Commands::Validate => cli::validate::run(&opts),
        Commands::Version => {
            println!("orgplan version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
