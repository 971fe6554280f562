//! changeset CLI
//!
//! Compares two branches under a folder and writes the changed paths as
//! plain-text lists or spliced into a YAML deployment descriptor.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    tracing::debug!(?cli, "Parsed arguments");

    commands::run_generate(&cli)
}
