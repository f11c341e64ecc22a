//! Parallel per-document runner.
//!
//! One load → extract → compare pipeline per document over a bounded
//! worker pool. Workers pull indices from a shared counter and send
//! finished rows over a channel; the collector reassembles them in input
//! order, so output is deterministic regardless of completion order. A
//! failed document becomes an error row and never aborts the others.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use conform_outline::Document;
use conform_schema::Schema;

use crate::compare::{CompareOptions, compare_document};
use crate::report::{DocumentReport, RunReport};

/// Runner configuration.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Worker thread count; 0 means available parallelism. Always capped
    /// by the document count.
    pub jobs: usize,
    /// Heading level checked against the schema.
    pub primary_level: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            jobs: 0,
            primary_level: 1,
        }
    }
}

/// Check every path against the schema and assemble the run report.
///
/// `paths` is expected pre-sorted (the walker sorts); rows come back in
/// the same order.
pub fn run_checks(paths: &[PathBuf], schema: &Schema, opts: &RunOptions) -> RunReport {
    let compare_opts = CompareOptions {
        primary_level: opts.primary_level,
    };
    let jobs = effective_jobs(opts.jobs, paths.len());

    if jobs <= 1 {
        let rows = paths
            .iter()
            .map(|path| check_one(path, schema, &compare_opts))
            .collect();
        return RunReport::new(rows);
    }

    let next = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<(usize, DocumentReport)>();
    thread::scope(|scope| {
        for _ in 0..jobs {
            let tx = tx.clone();
            let next = &next;
            scope.spawn(move || {
                loop {
                    let idx = next.fetch_add(1, Ordering::SeqCst);
                    let Some(path) = paths.get(idx) else {
                        break;
                    };
                    let row = check_one(path, schema, &compare_opts);
                    if tx.send((idx, row)).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(tx);

    let mut rows: Vec<(usize, DocumentReport)> = rx.into_iter().collect();
    rows.sort_by_key(|(idx, _)| *idx);
    RunReport::new(rows.into_iter().map(|(_, row)| row).collect())
}

fn check_one(path: &Path, schema: &Schema, opts: &CompareOptions) -> DocumentReport {
    let display = path.display().to_string();
    match Document::load(path) {
        Ok(doc) => {
            let findings = compare_document(&doc, schema, opts);
            DocumentReport::checked(display, doc.digest, findings, doc.warnings)
        }
        Err(err) => DocumentReport::errored(display, err.to_string()),
    }
}

fn effective_jobs(requested: usize, work: usize) -> usize {
    let base = if requested == 0 {
        thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
    } else {
        requested
    };
    base.min(work).max(1)
}
