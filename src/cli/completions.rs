//! Shell completion generation

use std::io;

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, Shell};

/// Write static completions for `shell` to stdout
pub fn run(shell: Shell) {
    write(shell, &mut io::stdout());
}

fn write(shell: Shell, out: &mut dyn io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}
