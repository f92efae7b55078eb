//! Merging matched skills into an existing resume skills section.

use indexmap::IndexMap;

use crate::inventory::categories::resume_heading;
use crate::matching::matcher::MatchResult;

/// Resume skills as the renderer sees them: heading → skill names.
pub type ResumeSkills = IndexMap<String, Vec<String>>;

/// Merges matched skills into the resume's skills map.
///
/// Each match lands under an existing heading when one aliases its
/// inventory category, otherwise under a new Title Case heading. A skill
/// already present anywhere on the resume (case-insensitive) is left alone.
pub fn merge_into_resume(current: &ResumeSkills, matches: &[MatchResult]) -> ResumeSkills {
    let mut merged = current.clone();

    for result in matches {
        let already_present = merged
            .values()
            .flatten()
            .any(|existing| existing.eq_ignore_ascii_case(&result.skill.name));
        if already_present {
            continue;
        }

        let heading = resume_heading(
            &result.skill.category,
            merged.keys().map(String::as_str),
        );
        merged
            .entry(heading)
            .or_default()
            .push(result.skill.name.clone());
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::model::SkillEntry;

    fn make_match(name: &str, category: &str, score: f64) -> MatchResult {
        MatchResult {
            skill: SkillEntry::new(name, category),
            score,
            category_display_name: crate::inventory::categories::display_name(category),
        }
    }

    fn resume(headings: &[(&str, &[&str])]) -> ResumeSkills {
        headings
            .iter()
            .map(|(heading, skills)| {
                (
                    heading.to_string(),
                    skills.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_merge_into_aliased_existing_heading() {
        let current = resume(&[("Languages", &["Python"])]);
        let matches = vec![make_match("Rust", "programming_languages", 0.8)];

        let merged = merge_into_resume(&current, &matches);
        assert_eq!(merged["Languages"], vec!["Python", "Rust"]);
        assert_eq!(merged.len(), 1, "no new heading should be created");
    }

    #[test]
    fn test_merge_creates_heading_for_unmapped_category() {
        let current = resume(&[("Languages", &["Python"])]);
        let matches = vec![make_match("React Native", "mobile_development", 0.6)];

        let merged = merge_into_resume(&current, &matches);
        assert_eq!(merged["Mobile Development"], vec!["React Native"]);
    }

    #[test]
    fn test_merge_skips_skill_already_on_resume() {
        let current = resume(&[("Languages", &["python"])]);
        let matches = vec![make_match("Python", "programming_languages", 1.0)];

        let merged = merge_into_resume(&current, &matches);
        assert_eq!(merged["Languages"], vec!["python"], "no duplicate added");
    }

    #[test]
    fn test_merge_preserves_existing_order_and_content() {
        let current = resume(&[
            ("Languages", &["Python", "Go"]),
            ("Databases", &["PostgreSQL"]),
        ]);
        let matches = vec![make_match("Redis", "databases", 0.4)];

        let merged = merge_into_resume(&current, &matches);
        let headings: Vec<&String> = merged.keys().collect();
        assert_eq!(headings, vec!["Languages", "Databases"]);
        assert_eq!(merged["Databases"], vec!["PostgreSQL", "Redis"]);
    }
}
