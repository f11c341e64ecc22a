//! File loading: substrate validation, newline normalization, digesting.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Per-document load failures.
///
/// Both variants are recoverable at the run level: the document is skipped
/// and the failure recorded in its report row.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("read error: {path}: {detail}")]
    Read { path: String, detail: String },

    #[error("encoding error: {path}: {detail}")]
    Encoding { path: String, detail: String },
}

/// Read a document, returning its normalized text and content digest.
///
/// All line endings (CRLF, lone CR) become `\n` before the digest is taken,
/// so the same content checked out with different line-ending conventions
/// gets the same digest and the same section byte offsets.
pub fn load_text(path: &Path) -> Result<(String, String), LoadError> {
    let bytes = fs::read(path).map_err(|e| LoadError::Read {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    if bytes.contains(&0) {
        return Err(LoadError::Encoding {
            path: path.display().to_string(),
            detail: "contains NUL byte(s)".to_string(),
        });
    }
    let raw = String::from_utf8(bytes).map_err(|e| LoadError::Encoding {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;

    let text = normalize_newlines(&raw);
    let digest = format!("doc1_{:x}", Sha256::digest(text.as_bytes()));
    Ok((text, digest))
}

fn normalize_newlines(raw: &str) -> String {
    if !raw.contains('\r') {
        return raw.to_string();
    }
    raw.replace("\r\n", "\n").replace('\r', "\n")
}
