//! Findings and report rows.
//!
//! A report is created fresh per run, never mutated after comparison, and
//! consumed once by the reporter. Nothing here carries timestamps or
//! generated ids: the same documents and schema must serialize to
//! byte-identical reports on every run.

use conform_outline::ParseWarning;

pub const FAILURE_CLASS_NONCONFORMANCE: &str = "structural_nonconformance";
pub const FAILURE_CLASS_UNREADABLE: &str = "document_unreadable";

/// One detected deviation between a document outline and the schema.
///
/// Positions are 1-based among the document's primary-level sections;
/// ranks are the schema's canonical 1-based order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum Finding {
    /// A required schema entry never matched any section.
    Missing { name: String, rank: usize },

    /// A schema entry matched a second or later time. The first match is
    /// canonical; duplicates are excluded from alignment.
    Duplicate {
        name: String,
        rank: usize,
        position: usize,
        line: usize,
    },

    /// A matched section sits off the canonical-order alignment.
    Misordered {
        name: String,
        expected_rank: usize,
        actual_position: usize,
        line: usize,
    },

    /// A section whose title matches no schema entry.
    Extra {
        title: String,
        position: usize,
        line: usize,
    },
}

impl Finding {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing",
            Self::Duplicate { .. } => "duplicate",
            Self::Misordered { .. } => "misordered",
            Self::Extra { .. } => "extra",
        }
    }

    /// The section or entry name the finding is about.
    pub fn subject(&self) -> &str {
        match self {
            Self::Missing { name, .. }
            | Self::Duplicate { name, .. }
            | Self::Misordered { name, .. } => name,
            Self::Extra { title, .. } => title,
        }
    }

    /// Whether this finding fails the run. Misordered findings are
    /// reported but non-fatal unless strict ordering is requested.
    pub fn is_fatal(&self, strict_order: bool) -> bool {
        match self {
            Self::Misordered { .. } => strict_order,
            _ => true,
        }
    }
}

/// Per-document outcome class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Ok,
    Findings,
    Error,
}

/// One document's report row.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentReport {
    pub path: String,
    pub status: DocumentStatus,
    /// Content digest (`doc1_…`); absent when the document failed to load.
    pub digest: Option<String>,
    pub findings: Vec<Finding>,
    pub warnings: Vec<ParseWarning>,
    /// Load failure, rendered; present iff status is `error`.
    pub error: Option<String>,
}

impl DocumentReport {
    pub fn checked(
        path: String,
        digest: String,
        findings: Vec<Finding>,
        warnings: Vec<ParseWarning>,
    ) -> Self {
        let status = if findings.is_empty() {
            DocumentStatus::Ok
        } else {
            DocumentStatus::Findings
        };
        Self {
            path,
            status,
            digest: Some(digest),
            findings,
            warnings,
            error: None,
        }
    }

    pub fn errored(path: String, error: String) -> Self {
        Self {
            path,
            status: DocumentStatus::Error,
            digest: None,
            findings: Vec::new(),
            warnings: Vec::new(),
            error: Some(error),
        }
    }

    /// Whether this row fails the run under the given ordering policy.
    pub fn has_fatal(&self, strict_order: bool) -> bool {
        self.error.is_some() || self.findings.iter().any(|f| f.is_fatal(strict_order))
    }
}

/// Aggregate counts over all document rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub checked: usize,
    pub passed: usize,
    pub with_findings: usize,
    pub errored: usize,
    pub warnings: usize,
}

/// The whole run's report: document rows in path-sorted order plus the
/// aggregate summary.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub documents: Vec<DocumentReport>,
    pub summary: RunSummary,
}

impl RunReport {
    pub fn new(documents: Vec<DocumentReport>) -> Self {
        let summary = RunSummary {
            checked: documents.len(),
            passed: documents
                .iter()
                .filter(|d| d.status == DocumentStatus::Ok)
                .count(),
            with_findings: documents
                .iter()
                .filter(|d| d.status == DocumentStatus::Findings)
                .count(),
            errored: documents
                .iter()
                .filter(|d| d.status == DocumentStatus::Error)
                .count(),
            warnings: documents.iter().map(|d| d.warnings.len()).sum(),
        };
        Self { documents, summary }
    }

    /// Failure classes for the witness payload, in stable order.
    pub fn failure_classes(&self, strict_order: bool) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self
            .documents
            .iter()
            .any(|d| d.error.is_none() && d.has_fatal(strict_order))
        {
            classes.push(FAILURE_CLASS_NONCONFORMANCE);
        }
        if self.documents.iter().any(|d| d.error.is_some()) {
            classes.push(FAILURE_CLASS_UNREADABLE);
        }
        classes
    }

    pub fn accepted(&self, strict_order: bool) -> bool {
        !self.documents.iter().any(|d| d.has_fatal(strict_order))
    }

    /// Process exit code: 0 all conformant, 1 one or more fatal findings
    /// or unreadable documents. (Exit 2 is decided at the CLI boundary,
    /// before any report exists.)
    pub fn exit_code(&self, strict_order: bool) -> i32 {
        if self.accepted(strict_order) { 0 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn misordered() -> Finding {
        Finding::Misordered {
            name: "Quick Start".to_string(),
            expected_rank: 1,
            actual_position: 2,
            line: 5,
        }
    }

    #[test]
    fn misordered_fatality_follows_strictness() {
        assert!(!misordered().is_fatal(false));
        assert!(misordered().is_fatal(true));
        let missing = Finding::Missing {
            name: "Phase 0".to_string(),
            rank: 2,
        };
        assert!(missing.is_fatal(false));
    }

    #[test]
    fn misordered_only_report_is_accepted_by_default() {
        let doc = DocumentReport::checked(
            "a.md".to_string(),
            "doc1_x".to_string(),
            vec![misordered()],
            Vec::new(),
        );
        let report = RunReport::new(vec![doc]);
        assert_eq!(report.summary.with_findings, 1);
        assert_eq!(report.exit_code(false), 0);
        assert_eq!(report.exit_code(true), 1);
        assert_eq!(
            report.failure_classes(true),
            vec![FAILURE_CLASS_NONCONFORMANCE]
        );
        assert!(report.failure_classes(false).is_empty());
    }

    #[test]
    fn errored_document_fails_the_run() {
        let report = RunReport::new(vec![DocumentReport::errored(
            "gone.md".to_string(),
            "read error: gone.md: no such file".to_string(),
        )]);
        assert_eq!(report.summary.errored, 1);
        assert_eq!(report.exit_code(false), 1);
        assert_eq!(report.failure_classes(false), vec![FAILURE_CLASS_UNREADABLE]);
    }

    #[test]
    fn finding_serialization_shape() {
        let row = serde_json::to_value(misordered()).expect("finding should serialize");
        assert_eq!(row["kind"], "misordered");
        assert_eq!(row["expectedRank"], 1);
        assert_eq!(row["actualPosition"], 2);
    }
}
