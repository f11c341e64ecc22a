use std::path::PathBuf;

use conform_check::{RunOptions, run_checks};
use conform_outline::collect_paths;
use conform_schema::Schema;

use crate::cli::FormatArg;
use crate::render;

pub struct Args {
    pub paths: Vec<String>,
    pub schema: String,
    pub format: FormatArg,
    pub strict_order: bool,
    pub level: usize,
    pub ext: String,
    pub jobs: usize,
}

pub fn run(args: Args) {
    // Schema load failure is fatal: every comparison depends on it.
    let schema = Schema::load(&args.schema).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });

    let inputs: Vec<PathBuf> = args.paths.iter().map(PathBuf::from).collect();
    let work = collect_paths(&inputs, &args.ext).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });
    if work.is_empty() {
        eprintln!("error: no documents to check under the given paths");
        std::process::exit(2);
    }

    let report = run_checks(
        &work,
        &schema,
        &RunOptions {
            jobs: args.jobs,
            primary_level: args.level,
        },
    );

    match args.format {
        FormatArg::Table => render::table(&report, args.strict_order),
        FormatArg::Lines => render::lines(&report),
        FormatArg::Json => render::json(&report, args.strict_order),
    }

    let code = report.exit_code(args.strict_order);
    if code != 0 {
        std::process::exit(code);
    }
}
