//! The canonical section schema.
//!
//! One ordered list of required section names, loaded once per run from a
//! TOML definition file and immutable afterwards. Lookup is by normalized
//! title, so cosmetic heading variants (case, punctuation, emoji, numeric
//! prefixes) all resolve to the same entry.

mod normalize;
mod registry;

pub use normalize::normalize_title;
pub use registry::{Schema, SchemaEntry, SchemaError};
