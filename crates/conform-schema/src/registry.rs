//! Schema definition loading and lookup.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::normalize::normalize_title;

const SCHEMA_VERSION: u64 = 1;

/// One required section of the canonical schema.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaEntry {
    /// Canonical name, shown in reports.
    pub name: String,
    /// 1-based position in the canonical order.
    pub rank: usize,
    /// Accepted heading variants beyond the canonical name.
    pub aliases: Vec<String>,
}

/// The canonical ordered schema, immutable after load.
///
/// Ranks are the 1-based entry positions in the definition file, so they
/// are unique and contiguous by construction. Validation concentrates on
/// the failure modes that remain: empty definitions, empty names, and two
/// entries claiming the same normalized key.
#[derive(Debug, Clone)]
pub struct Schema {
    entries: Vec<SchemaEntry>,
    index: BTreeMap<String, usize>,
}

/// Fatal schema definition failures. The whole run aborts on any of these,
/// since every comparison depends on the schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to read schema {path}: {detail}")]
    Io { path: String, detail: String },

    #[error("failed to parse schema {path}: {detail}")]
    Parse { path: String, detail: String },

    #[error("schema version must equal 1, got {found:?}")]
    Version { found: Option<u64> },

    #[error("schema defines no sections")]
    Empty,

    #[error("section {rank}: name is empty after normalization: {name:?}")]
    EmptyName { rank: usize, name: String },

    #[error("section {rank}: alias {alias:?} is empty after normalization")]
    EmptyAlias { rank: usize, alias: String },

    #[error(
        "section {rank}: {key:?} (from {source_key:?}) collides with section {other_rank} {other_name:?}"
    )]
    KeyCollision {
        rank: usize,
        key: String,
        source_key: String,
        other_rank: usize,
        other_name: String,
    },
}

#[derive(Debug, serde::Deserialize)]
struct SchemaFile {
    schema: Option<u64>,
    #[serde(default, rename = "section")]
    sections: Vec<SectionRow>,
}

#[derive(Debug, serde::Deserialize)]
struct SectionRow {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
}

impl Schema {
    /// Load and validate a schema definition from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| SchemaError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }

    /// Parse and validate a schema definition from TOML text.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, SchemaError> {
        let file: SchemaFile = toml::from_str(text).map_err(|e| SchemaError::Parse {
            path: origin.to_string(),
            detail: e.to_string(),
        })?;
        if file.schema != Some(SCHEMA_VERSION) {
            return Err(SchemaError::Version { found: file.schema });
        }
        if file.sections.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut entries = Vec::with_capacity(file.sections.len());
        let mut index = BTreeMap::new();
        for (pos, row) in file.sections.into_iter().enumerate() {
            let rank = pos + 1;
            let name_key = normalize_title(&row.name);
            if name_key.is_empty() {
                return Err(SchemaError::EmptyName {
                    rank,
                    name: row.name,
                });
            }
            claim_key(&mut index, &entries, name_key, &row.name, rank, pos)?;
            for alias in &row.aliases {
                let alias_key = normalize_title(alias);
                if alias_key.is_empty() {
                    return Err(SchemaError::EmptyAlias {
                        rank,
                        alias: alias.clone(),
                    });
                }
                claim_key(&mut index, &entries, alias_key, alias, rank, pos)?;
            }
            entries.push(SchemaEntry {
                name: row.name,
                rank,
                aliases: row.aliases,
            });
        }

        Ok(Self { entries, index })
    }

    /// Resolve a candidate heading title to its schema entry, if any.
    pub fn lookup(&self, title: &str) -> Option<&SchemaEntry> {
        let key = normalize_title(title);
        if key.is_empty() {
            return None;
        }
        self.index.get(&key).map(|&pos| &self.entries[pos])
    }

    /// Entries in canonical rank order.
    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn claim_key(
    index: &mut BTreeMap<String, usize>,
    entries: &[SchemaEntry],
    key: String,
    source: &str,
    rank: usize,
    pos: usize,
) -> Result<(), SchemaError> {
    match index.get(&key) {
        // An alias restating its own entry's name is redundant, not a conflict.
        Some(&existing) if existing == pos => Ok(()),
        Some(&existing) => Err(SchemaError::KeyCollision {
            rank,
            key,
            source_key: source.to_string(),
            other_rank: existing + 1,
            other_name: entries[existing].name.clone(),
        }),
        None => {
            index.insert(key, pos);
            Ok(())
        }
    }
}
