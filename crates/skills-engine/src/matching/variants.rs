//! Variant normalization — maps alternate spellings of a skill to every
//! equivalent form for matching purposes.
//!
//! The table is a data asset, not code: a YAML list of equivalence groups
//! (see `assets/variants.yaml`). The built-in table ships with the crate;
//! callers can load a replacement from disk to extend it without touching
//! the matcher.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use once_cell::sync::Lazy;

use crate::errors::EngineError;

const BUILTIN_TABLE: &str = include_str!("../../assets/variants.yaml");

// Panics only if the embedded asset is malformed, which tests rule out.
static BUILTIN: Lazy<VariantTable> = Lazy::new(|| {
    VariantTable::from_yaml_str(BUILTIN_TABLE)
        .unwrap_or_else(|e| panic!("built-in variant table is malformed: {e}"))
});

/// Bidirectional table of skill-name equivalence groups.
#[derive(Debug, Clone, Default)]
pub struct VariantTable {
    groups: Vec<Vec<String>>,
    index: HashMap<String, Vec<usize>>,
}

impl VariantTable {
    /// Parses a table from YAML: a list of groups, each a list of
    /// equivalent spellings. Terms are case-folded and trimmed.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EngineError> {
        let raw: Vec<Vec<String>> = serde_yaml::from_str(yaml)?;

        let mut table = VariantTable::default();
        for group in raw {
            let group: Vec<String> = group
                .into_iter()
                .map(|term| term.trim().to_lowercase())
                .filter(|term| !term.is_empty())
                .collect();
            if group.len() < 2 {
                continue; // a group of one maps nothing
            }
            let group_id = table.groups.len();
            for term in &group {
                table.index.entry(term.clone()).or_default().push(group_id);
            }
            table.groups.push(group);
        }
        Ok(table)
    }

    /// Loads a table from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| EngineError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// The table embedded in the crate.
    pub fn builtin() -> &'static VariantTable {
        &BUILTIN
    }

    /// Returns the case-folded, trimmed term plus every equivalent form.
    ///
    /// Unknown terms normalize to themselves alone. Pure and deterministic;
    /// the result's ordering is the `BTreeSet` ordering.
    pub fn normalize(&self, term: &str) -> BTreeSet<String> {
        let folded = term.trim().to_lowercase();
        let mut forms = BTreeSet::new();
        if folded.is_empty() {
            return forms;
        }

        if let Some(group_ids) = self.index.get(&folded) {
            for &group_id in group_ids {
                forms.extend(self.groups[group_id].iter().cloned());
            }
        }
        forms.insert(folded);
        forms
    }
}
