//! Category display naming and resume-heading mapping.

/// Resume headings that commonly correspond to each inventory category.
/// Checked in order; first hit against the resume's existing headings wins.
const CATEGORY_ALIASES: &[(&str, &[&str])] = &[
    ("programming_languages", &["Languages", "Programming Languages", "Core Languages"]),
    ("web_frameworks", &["Frameworks", "Web Technologies", "Backend"]),
    ("cloud_platforms", &["Cloud", "Cloud & Infrastructure", "Infrastructure"]),
    ("containers_orchestration", &["DevOps", "Infrastructure", "Cloud"]),
    ("databases", &["Databases", "Data Storage"]),
    ("ai_machine_learning", &["AI/ML", "Machine Learning", "AI & ML"]),
    ("devops_ci_cd", &["DevOps", "CI/CD", "Development Tools"]),
    ("version_control", &["Tools", "Development Tools"]),
    ("testing", &["Testing", "Quality Assurance"]),
    ("api_development", &["Backend", "API Development"]),
];

/// Formats an inventory category key for display: snake_case → Title Case.
pub fn display_name(category: &str) -> String {
    category
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Picks the resume heading a matched skill should be merged under.
///
/// Prefers an existing resume heading that aliases the inventory category
/// (exact first, then case-insensitive partial overlap); otherwise returns
/// the Title Case form of the inventory category as a new heading.
pub fn resume_heading<'a>(
    inventory_category: &str,
    resume_categories: impl Iterator<Item = &'a str> + Clone,
) -> String {
    let aliases: &[&str] = CATEGORY_ALIASES
        .iter()
        .find(|(key, _)| *key == inventory_category)
        .map(|(_, aliases)| *aliases)
        .unwrap_or(&[]);

    for resume_category in resume_categories.clone() {
        if aliases.contains(&resume_category) {
            return resume_category.to_string();
        }
    }
    for resume_category in resume_categories {
        let resume_lower = resume_category.to_lowercase();
        for alias in aliases {
            let alias_lower = alias.to_lowercase();
            if alias_lower.contains(&resume_lower) || resume_lower.contains(&alias_lower) {
                return resume_category.to_string();
            }
        }
    }

    display_name(inventory_category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_title_cases_snake_case() {
        assert_eq!(display_name("programming_languages"), "Programming Languages");
        assert_eq!(display_name("ai_machine_learning"), "Ai Machine Learning");
        assert_eq!(display_name("testing"), "Testing");
    }

    #[test]
    fn test_display_name_ignores_stray_underscores() {
        assert_eq!(display_name("web__frameworks_"), "Web Frameworks");
    }

    #[test]
    fn test_resume_heading_prefers_exact_alias() {
        let resume = ["Summary", "Languages", "Experience"];
        assert_eq!(
            resume_heading("programming_languages", resume.iter().copied()),
            "Languages"
        );
    }

    #[test]
    fn test_resume_heading_falls_back_to_partial_overlap() {
        let resume = ["Cloud & DevOps Tooling"];
        // "DevOps" is an alias of devops_ci_cd and appears inside the heading.
        assert_eq!(
            resume_heading("devops_ci_cd", resume.iter().copied()),
            "Cloud & DevOps Tooling"
        );
    }

    #[test]
    fn test_resume_heading_creates_title_case_heading_when_unmapped() {
        let resume = ["Experience", "Education"];
        assert_eq!(
            resume_heading("mobile_development", resume.iter().copied()),
            "Mobile Development"
        );
    }
}
