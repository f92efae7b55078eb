//! In-memory inventory model: categorized skill entries with optional
//! usage conditions.
//!
//! The inventory is an explicit value owned by the caller. Nothing here
//! retains state between calls, and matching never mutates it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::inventory::conditions::ConditionField;

/// A single skill in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<ConditionField>,
}

impl SkillEntry {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Into<ConditionField>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

/// Categorized master list of skills.
///
/// Categories and the entries within them keep insertion order, so listing
/// and match tie-breaking are deterministic. Skill names are unique within
/// a category (case-insensitive); the same name may appear in several
/// categories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    categories: IndexMap<String, Vec<SkillEntry>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry under its own `category` field.
    ///
    /// Rejects empty names/categories and case-insensitive duplicates
    /// within the category.
    pub fn add(&mut self, entry: SkillEntry) -> Result<(), EngineError> {
        if entry.name.trim().is_empty() {
            return Err(EngineError::InvalidInventory(format!(
                "empty skill name in category '{}'",
                entry.category
            )));
        }
        if entry.category.trim().is_empty() {
            return Err(EngineError::InvalidInventory(format!(
                "skill '{}' has an empty category",
                entry.name
            )));
        }

        let bucket = self.categories.entry(entry.category.clone()).or_default();
        if bucket
            .iter()
            .any(|existing| existing.name.eq_ignore_ascii_case(&entry.name))
        {
            return Err(EngineError::InvalidInventory(format!(
                "duplicate skill '{}' in category '{}'",
                entry.name, entry.category
            )));
        }

        bucket.push(entry);
        Ok(())
    }

    /// Convenience for adding an unconditional skill.
    pub fn add_skill(&mut self, category: &str, name: &str) -> Result<(), EngineError> {
        self.add(SkillEntry::new(name, category))
    }

    /// Entries of one category, in insertion order.
    pub fn category(&self, name: &str) -> Option<&[SkillEntry]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    /// Category names in insertion order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// All entries, first by category order, then by entry order.
    pub fn entries(&self) -> impl Iterator<Item = &SkillEntry> {
        self.categories.values().flatten()
    }

    /// Case-insensitive substring search across every category.
    pub fn find(&self, query: &str) -> Vec<&SkillEntry> {
        let query_lower = query.to_lowercase();
        self.entries()
            .filter(|entry| entry.name.to_lowercase().contains(&query_lower))
            .collect()
    }

    /// Removes a skill (case-insensitive name) from a category.
    /// Returns the removed entry; a category emptied by removal is dropped.
    pub fn remove(&mut self, category: &str, name: &str) -> Option<SkillEntry> {
        let bucket = self.categories.get_mut(category)?;
        let index = bucket
            .iter()
            .position(|entry| entry.name.eq_ignore_ascii_case(name))?;
        let removed = bucket.remove(index);
        if bucket.is_empty() {
            self.categories.shift_remove(category);
        }
        Some(removed)
    }

    /// Renames a skill in place, preserving its position and condition.
    ///
    /// Returns `Ok(false)` when no entry matched `from`. Renaming onto an
    /// existing name in the same category is rejected.
    pub fn rename(&mut self, category: &str, from: &str, to: &str) -> Result<bool, EngineError> {
        if to.trim().is_empty() {
            return Err(EngineError::InvalidInventory(format!(
                "cannot rename '{from}' to an empty name"
            )));
        }
        let Some(bucket) = self.categories.get_mut(category) else {
            return Ok(false);
        };
        if bucket
            .iter()
            .any(|entry| entry.name.eq_ignore_ascii_case(to) && !entry.name.eq_ignore_ascii_case(from))
        {
            return Err(EngineError::InvalidInventory(format!(
                "duplicate skill '{to}' in category '{category}'"
            )));
        }
        match bucket
            .iter_mut()
            .find(|entry| entry.name.eq_ignore_ascii_case(from))
        {
            Some(entry) => {
                entry.name = to.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}
