//! Flat-file persistence for the skill inventory.
//!
//! The file is a YAML mapping of category → skill list. A plain string is
//! an unconditional skill; a `{name, condition}` mapping attaches a usage
//! condition:
//!
//! ```yaml
//! programming_languages:
//!   - Python
//!   - Rust
//! mobile_development:
//!   - name: React Native
//!     condition:
//!       requires_keyword_in_job: [mobile, React Native]
//! ```
//!
//! Category and skill order in the file is the inventory's insertion order,
//! and saving writes it back unchanged.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::EngineError;
use crate::inventory::conditions::ConditionField;
use crate::inventory::model::{Inventory, SkillEntry};

/// On-disk shape of one skill within a category list.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSkill {
    Name(String),
    Detailed {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<ConditionField>,
    },
}

type RawInventory = IndexMap<String, Vec<RawSkill>>;

/// Loads an inventory file, enforcing the model invariants
/// (non-empty names, no case-insensitive duplicates per category).
pub fn load_inventory(path: impl AsRef<Path>) -> Result<Inventory, EngineError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| EngineError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: RawInventory =
        serde_yaml::from_str(&content).map_err(|source| EngineError::ParseInventory {
            path: path.to_path_buf(),
            source,
        })?;

    let mut inventory = Inventory::new();
    for (category, skills) in raw {
        for raw_skill in skills {
            let entry = match raw_skill {
                RawSkill::Name(name) => SkillEntry::new(name, &category),
                RawSkill::Detailed { name, condition } => SkillEntry {
                    name,
                    category: category.clone(),
                    condition,
                },
            };
            inventory.add(entry)?;
        }
    }

    debug!(
        skills = inventory.len(),
        categories = inventory.category_count(),
        "loaded skills inventory from {}",
        path.display()
    );
    Ok(inventory)
}

/// Saves an inventory back to disk in the flat category → list format.
/// Unconditional skills are written as plain strings.
pub fn save_inventory(path: impl AsRef<Path>, inventory: &Inventory) -> Result<(), EngineError> {
    let path = path.as_ref();

    let mut raw: RawInventory = IndexMap::new();
    for category in inventory.categories() {
        let skills = inventory
            .category(category)
            .unwrap_or(&[])
            .iter()
            .map(|entry| match &entry.condition {
                None => RawSkill::Name(entry.name.clone()),
                Some(condition) => RawSkill::Detailed {
                    name: entry.name.clone(),
                    condition: Some(condition.clone()),
                },
            })
            .collect();
        raw.insert(category.to_string(), skills);
    }

    let content = serde_yaml::to_string(&raw).map_err(EngineError::SerializeInventory)?;
    std::fs::write(path, content).map_err(|source| EngineError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}
