//! Conform CLI: the `conform` command.

mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            paths,
            schema,
            format,
            strict_order,
            level,
            ext,
            jobs,
        } => commands::check::run(commands::check::Args {
            paths,
            schema,
            format,
            strict_order,
            level,
            ext,
            jobs,
        }),

        Commands::SchemaLint { schema, json } => commands::schema_lint::run(schema, json),
    }
}
