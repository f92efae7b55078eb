//! Prompt-facing rendering of match results and decisions.
//!
//! The text-generation collaborator receives these blocks verbatim inside
//! its prompt, so the output is deterministic and plain: grouped lists,
//! no timestamps, no randomness.

use crate::evaluation::evaluator::{EvidenceDecision, Outcome};
use crate::matching::matcher::MatchResult;

/// Renders ranked matches grouped by category, in match order.
///
/// With `include_scores`, each skill carries its relevance percentage.
pub fn format_suggestions(matches: &[MatchResult], include_scores: bool) -> String {
    if matches.is_empty() {
        return "No additional skills from the inventory match this job description.".to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut seen_categories: Vec<&str> = Vec::new();

    // Group by category, keeping the order categories first appear in the
    // ranked results.
    for result in matches {
        let category = result.skill.category.as_str();
        if seen_categories.contains(&category) {
            continue;
        }
        seen_categories.push(category);

        lines.push(format!("\n**{}:**", result.category_display_name));
        for grouped in matches.iter().filter(|m| m.skill.category == category) {
            if include_scores {
                let pct = (grouped.score * 100.0).round() as u32;
                lines.push(format!("  - {} (relevance: {pct}%)", grouped.skill.name));
            } else {
                lines.push(format!("  - {}", grouped.skill.name));
            }
        }
    }

    lines.join("\n")
}

/// Renders the decision list as a hard constraint block for the generator:
/// only ADD skills may be written into the resume.
pub fn format_decisions(decisions: &[EvidenceDecision]) -> String {
    if decisions.is_empty() {
        return "No skill decisions for this job.".to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    for (heading, outcome) in [
        ("Approved additions (may be added):", Outcome::Add),
        ("Gaps (do NOT add; surface as documented gaps):", Outcome::Gap),
        ("Skipped (condition not met; do NOT add):", Outcome::Skip),
    ] {
        let group: Vec<&EvidenceDecision> = decisions
            .iter()
            .filter(|decision| decision.outcome == outcome)
            .collect();
        if group.is_empty() {
            continue;
        }
        lines.push(format!("\n**{heading}**"));
        for decision in group {
            lines.push(format!("  - {}: {}", decision.skill.name, decision.reason));
        }
    }

    lines.join("\n")
}
