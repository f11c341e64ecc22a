use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "conform",
    about = "Conform: structural-conformance checks for sectioned text documents",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check documents against a canonical section schema
    Check {
        /// Files or directories holding documents to check
        #[arg(required = true)]
        paths: Vec<String>,

        /// Schema definition TOML path
        #[arg(long)]
        schema: String,

        /// Output format
        #[arg(long, default_value = "table")]
        format: FormatArg,

        /// Treat misordered sections as fatal
        #[arg(long)]
        strict_order: bool,

        /// Heading level checked against the schema
        #[arg(long, default_value_t = 1)]
        level: usize,

        /// File extension collected when walking directories
        #[arg(long, default_value = "md")]
        ext: String,

        /// Worker threads (0 = available parallelism)
        #[arg(long, default_value_t = 0)]
        jobs: usize,
    },

    /// Validate a schema definition file and print its entry table
    SchemaLint {
        /// Schema definition TOML path
        #[arg(long)]
        schema: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Human-readable status lines and summary
    #[value(name = "table")]
    Table,
    /// One finding per line, tab-separated
    #[value(name = "lines")]
    Lines,
    /// Structured JSON payload
    #[value(name = "json")]
    Json,
}
