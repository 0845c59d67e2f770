//! Chipgen CLI - chipset matrix converter.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            matrix,
            output,
            deps_root,
        } => commands::generate::run(matrix, output, deps_root, cli.verbose),

        Commands::Check {
            matrix,
            deps_root,
            json,
        } => commands::check::run(matrix, deps_root, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
