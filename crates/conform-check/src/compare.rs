//! The conformance comparator.

use std::collections::BTreeSet;

use conform_outline::Document;
use conform_schema::Schema;

use crate::align::lcs_keep_mask;
use crate::report::Finding;

/// Comparator configuration.
#[derive(Debug, Clone, Copy)]
pub struct CompareOptions {
    /// Heading level checked against the schema. Deeper levels are part of
    /// their enclosing section's body and are never schema-checked.
    pub primary_level: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { primary_level: 1 }
    }
}

/// Compare one document's primary-level outline against the schema.
///
/// Findings come back in canonical order: missing entries by rank, then
/// duplicates, misordered sections, and extras, each by document position.
/// The output is a pure function of the inputs; comparing twice yields
/// identical findings.
pub fn compare_document(doc: &Document, schema: &Schema, opts: &CompareOptions) -> Vec<Finding> {
    let mut extras = Vec::new();
    let mut duplicates = Vec::new();
    let mut matched = Vec::new();
    let mut seen_ranks = BTreeSet::new();

    for (idx, section) in doc.sections_at_level(opts.primary_level).enumerate() {
        let position = idx + 1;
        match schema.lookup(&section.title) {
            None => extras.push(Finding::Extra {
                title: section.title.clone(),
                position,
                line: section.line,
            }),
            Some(entry) => {
                if seen_ranks.insert(entry.rank) {
                    matched.push((position, section.line, entry));
                } else {
                    duplicates.push(Finding::Duplicate {
                        name: entry.name.clone(),
                        rank: entry.rank,
                        position,
                        line: section.line,
                    });
                }
            }
        }
    }

    let ranks: Vec<usize> = matched.iter().map(|(_, _, entry)| entry.rank).collect();
    let keep = lcs_keep_mask(&ranks);
    let misordered: Vec<Finding> = matched
        .iter()
        .zip(keep.iter())
        .filter(|&(_, &kept)| !kept)
        .map(|(&(position, line, entry), _)| Finding::Misordered {
            name: entry.name.clone(),
            expected_rank: entry.rank,
            actual_position: position,
            line,
        })
        .collect();

    let missing: Vec<Finding> = schema
        .entries()
        .iter()
        .filter(|entry| !seen_ranks.contains(&entry.rank))
        .map(|entry| Finding::Missing {
            name: entry.name.clone(),
            rank: entry.rank,
        })
        .collect();

    let mut findings = missing;
    findings.extend(duplicates);
    findings.extend(misordered);
    findings.extend(extras);
    findings
}
