//! Document loading and outline extraction.
//!
//! The leaf layer of the conform pipeline. A [`Document`] is loaded from
//! disk (line endings normalized, content digested), then its outline is
//! extracted as an ordered list of [`Section`]s. Everything downstream —
//! schema matching, alignment, reporting — consumes the types defined here
//! and never touches the filesystem again.

mod document;
mod extract;
mod loader;
mod walk;

pub use document::{Document, ParseWarning, Section};
pub use extract::{Outline, extract_outline};
pub use loader::{LoadError, load_text};
pub use walk::{WalkError, collect_paths};
