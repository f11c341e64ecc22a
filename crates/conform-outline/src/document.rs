//! Core document value types.

use std::path::{Path, PathBuf};

use crate::extract::{Outline, extract_outline};
use crate::loader::{LoadError, load_text};

/// One heading node of a document outline.
///
/// The body span runs from the line after the heading to the line before
/// the next heading of the same or shallower level (or document end), so a
/// section's body includes the text of its nested subsections but not
/// their headings' sections.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Title exactly as written, with only the ATX marker and closing
    /// hashes removed. Matching normalization happens in the schema layer;
    /// reports always show this raw form.
    pub title: String,
    /// Heading level: the `#` marker count, >= 1.
    pub level: usize,
    /// 0-based position among all extracted sections of the document.
    pub ordinal: usize,
    /// 1-based line number of the heading line.
    pub line: usize,
    /// Byte offset of the first body byte (start of the line after the
    /// heading), in the normalized text.
    pub body_start: usize,
    /// Byte offset one past the last body byte.
    pub body_end: usize,
}

/// A non-fatal irregularity noticed during extraction.
///
/// Warnings are surfaced in reports but never affect the exit code.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseWarning {
    /// 1-based line number the warning anchors to.
    pub line: usize,
    pub detail: String,
}

/// A loaded document with its extracted outline.
///
/// Immutable after construction. The text is newline-normalized (all line
/// endings become `\n`) and all section byte offsets index into it.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    /// Content digest of the normalized text, `doc1_<sha256-hex>`.
    pub digest: String,
    pub text: String,
    pub sections: Vec<Section>,
    pub warnings: Vec<ParseWarning>,
}

impl Document {
    /// Load a document from disk and extract its outline.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (text, digest) = load_text(path)?;
        let Outline { sections, warnings } = extract_outline(&text);
        Ok(Self {
            path: path.to_path_buf(),
            digest,
            text,
            sections,
            warnings,
        })
    }

    /// Sections at one heading level, in document order.
    pub fn sections_at_level(&self, level: usize) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.level == level)
    }

    /// Body text of a section, sliced from the normalized document text.
    pub fn body_of(&self, section: &Section) -> &str {
        &self.text[section.body_start..section.body_end]
    }
}
