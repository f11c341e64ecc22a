use conform_schema::Schema;
use serde_json::json;

const CHECK_KIND: &str = "conform.schema_lint.v1";

pub fn run(schema_path: String, json_output: bool) {
    let schema = Schema::load(&schema_path).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(2);
    });

    if json_output {
        let payload = json!({
            "schema": 1,
            "checkKind": CHECK_KIND,
            "result": "accepted",
            "failureClasses": Vec::<String>::new(),
            "path": schema_path,
            "entries": schema.entries(),
        });
        let rendered = serde_json::to_string_pretty(&payload).unwrap_or_else(|err| {
            eprintln!("error: failed to render schema-lint payload: {err}");
            std::process::exit(2);
        });
        println!("{rendered}");
    } else {
        println!("[schema-lint] OK {schema_path} (entries={})", schema.len());
        for entry in schema.entries() {
            if entry.aliases.is_empty() {
                println!("  {:>2}. {}", entry.rank, entry.name);
            } else {
                println!(
                    "  {:>2}. {} (aliases: {})",
                    entry.rank,
                    entry.name,
                    entry.aliases.join(", ")
                );
            }
        }
    }
}
