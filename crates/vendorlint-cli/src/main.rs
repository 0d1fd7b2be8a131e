//! Vendorlint CLI: the `vendorlint` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    support::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { inputs, json } => commands::check::run(inputs, json),

        Commands::CrateIds { resolve, json } => commands::crate_ids::run(resolve, json),
    }
}
