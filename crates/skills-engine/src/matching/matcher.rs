//! Relevance matcher — ranks inventory skills against a job description.
//!
//! Pure function over the inventory and the job text. Occurrence counting
//! is whole-word/phrase only, variants count toward their skill, and ties
//! keep inventory order so results are deterministic.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::inventory::categories::display_name;
use crate::inventory::merge::ResumeSkills;
use crate::inventory::model::{Inventory, SkillEntry};
use crate::matching::text::count_occurrences;
use crate::matching::variants::VariantTable;

/// Occurrence count at which relevance saturates at 1.0.
/// One mention scores 0.2; five or more score 1.0.
pub const SATURATION_OCCURRENCES: f64 = 5.0;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A skill deemed relevant to the job text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub skill: SkillEntry,
    /// Relevance in [0, 1]; zero-occurrence skills are never reported.
    pub score: f64,
    pub category_display_name: String,
}

/// Caller-tunable matching knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Result cap applied after ranking.
    pub max_results: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self { max_results: 8 }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Matching
// ────────────────────────────────────────────────────────────────────────────

/// Ranks inventory skills by relevance to `job_text`, best first.
///
/// Uses the built-in variant table. Empty inventory or blank job text
/// produce an empty result, not an error.
pub fn match_skills(
    inventory: &Inventory,
    job_text: &str,
    options: &MatchOptions,
) -> Vec<MatchResult> {
    match_skills_with_table(VariantTable::builtin(), inventory, job_text, options)
}

/// As [`match_skills`], with an explicit variant table.
pub fn match_skills_with_table(
    table: &VariantTable,
    inventory: &Inventory,
    job_text: &str,
    options: &MatchOptions,
) -> Vec<MatchResult> {
    rank_entries(table, inventory.entries(), job_text, options)
}

/// Ranks only the inventory skills not already present on the resume.
///
/// Presence is variant-aware: a resume listing "JS" hides an inventory
/// entry named "JavaScript".
pub fn match_missing_skills(
    inventory: &Inventory,
    resume_skills: &ResumeSkills,
    job_text: &str,
    options: &MatchOptions,
) -> Vec<MatchResult> {
    let table = VariantTable::builtin();

    let mut present: BTreeSet<String> = BTreeSet::new();
    for skill in resume_skills.values().flatten() {
        present.extend(table.normalize(skill));
    }

    let candidates = inventory
        .entries()
        .filter(|entry| table.normalize(&entry.name).is_disjoint(&present));
    rank_entries(table, candidates, job_text, options)
}

fn rank_entries<'a>(
    table: &VariantTable,
    entries: impl Iterator<Item = &'a SkillEntry>,
    job_text: &str,
    options: &MatchOptions,
) -> Vec<MatchResult> {
    if job_text.trim().is_empty() {
        return Vec::new();
    }

    let mut results: Vec<MatchResult> = Vec::new();
    for entry in entries {
        // Best searchable form wins; listing more aliases must not inflate
        // the score.
        let occurrences = table
            .normalize(&entry.name)
            .iter()
            .map(|form| count_occurrences(job_text, form))
            .max()
            .unwrap_or(0);
        if occurrences == 0 {
            continue;
        }

        results.push(MatchResult {
            skill: entry.clone(),
            score: (occurrences as f64 / SATURATION_OCCURRENCES).min(1.0),
            category_display_name: display_name(&entry.category),
        });
    }

    // Stable sort: equal scores keep inventory insertion order.
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    results.truncate(options.max_results);

    debug!(matched = results.len(), "ranked inventory against job text");
    results
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
