//! Report rendering: human table, machine lines, JSON payload.

use conform_check::{DocumentStatus, Finding, RunReport};
use serde_json::json;

const CHECK_KIND: &str = "conform.check.v1";

/// Human-readable rendering: one status line per document, findings and
/// warnings indented beneath, aggregate summary last.
pub fn table(report: &RunReport, strict_order: bool) {
    for doc in &report.documents {
        match doc.status {
            DocumentStatus::Ok => println!("[conform] OK {}", doc.path),
            DocumentStatus::Findings => {
                println!(
                    "[conform] FAIL {} (findings={}, warnings={})",
                    doc.path,
                    doc.findings.len(),
                    doc.warnings.len()
                );
                for finding in &doc.findings {
                    println!("  - {}", describe(finding));
                }
            }
            DocumentStatus::Error => println!(
                "[conform] ERROR {}: {}",
                doc.path,
                doc.error.as_deref().unwrap_or("unknown failure")
            ),
        }
        for warning in &doc.warnings {
            println!("  ~ warning line {}: {}", warning.line, warning.detail);
        }
    }

    let s = &report.summary;
    println!(
        "[conform] summary: checked={} passed={} with_findings={} errored={} warnings={}",
        s.checked, s.passed, s.with_findings, s.errored, s.warnings
    );
    let verdict = if report.accepted(strict_order) {
        "accepted"
    } else {
        "rejected"
    };
    println!("[conform] result: {verdict}");
}

/// Machine-parseable rendering: one tab-separated line per finding,
/// per-document error, or warning. No summary row.
pub fn lines(report: &RunReport) {
    for doc in &report.documents {
        if let Some(error) = &doc.error {
            println!("{}\terror\t-\t{error}", doc.path);
        }
        for finding in &doc.findings {
            println!(
                "{}\t{}\t{}\t{}",
                doc.path,
                finding.kind(),
                finding.subject(),
                positions(finding)
            );
        }
        for warning in &doc.warnings {
            println!(
                "{}\twarning\t-\tline {}: {}",
                doc.path, warning.line, warning.detail
            );
        }
    }
}

/// Structured payload in the witness style: schema/checkKind/result/
/// failureClasses plus the full document rows.
pub fn json(report: &RunReport, strict_order: bool) {
    let result = if report.accepted(strict_order) {
        "accepted"
    } else {
        "rejected"
    };
    let payload = json!({
        "schema": 1,
        "checkKind": CHECK_KIND,
        "result": result,
        "failureClasses": report.failure_classes(strict_order),
        "strictOrder": strict_order,
        "summary": report.summary,
        "documents": &report.documents,
    });
    let rendered = serde_json::to_string_pretty(&payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render check payload: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

fn describe(finding: &Finding) -> String {
    match finding {
        Finding::Missing { name, rank } => format!("missing: {name:?} (rank {rank})"),
        Finding::Duplicate {
            name,
            rank,
            position,
            line,
        } => format!("duplicate: {name:?} (rank {rank}, position {position}, line {line})"),
        Finding::Misordered {
            name,
            expected_rank,
            actual_position,
            line,
        } => format!(
            "misordered: {name:?} (expected rank {expected_rank}, actual position {actual_position}, line {line})"
        ),
        Finding::Extra {
            title,
            position,
            line,
        } => format!("extra: {title:?} (position {position}, line {line})"),
    }
}

fn positions(finding: &Finding) -> String {
    match finding {
        Finding::Missing { rank, .. } => format!("expected={rank}"),
        Finding::Duplicate { rank, position, .. } => format!("rank={rank} actual={position}"),
        Finding::Misordered {
            expected_rank,
            actual_position,
            ..
        } => format!("expected={expected_rank} actual={actual_position}"),
        Finding::Extra { position, .. } => format!("actual={position}"),
    }
}
