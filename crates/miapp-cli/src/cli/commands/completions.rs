//! `miapp completions <shell>` – emit a completion script to stdout.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

pub fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "miapp", &mut std::io::stdout());
}
