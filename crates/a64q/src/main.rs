//! a64q CLI - AArch64 opcode query tool

mod cli;
mod commands;
mod error;
mod terminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, EXIT_FAILURE, EXIT_SUCCESS};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; every other usage
            // error exits with EXIT_FAILURE rather than clap's default.
            let _ = e.print();
            std::process::exit(if e.use_stderr() {
                EXIT_FAILURE
            } else {
                EXIT_SUCCESS
            });
        }
    };

    let filter = match cli.log_directive().parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    std::process::exit(commands::run_command(&cli));
}
