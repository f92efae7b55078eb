//! Structured usage conditions attached to inventory skills.
//!
//! A condition gates when a skill may be surfaced for a job. Conditions are
//! authored as one of a closed set of kinds, never interpreted from prose:
//!
//! ```yaml
//! - name: React Native
//!   condition:
//!     requires_keyword_in_job: [mobile, React Native]
//! - name: Team Leadership
//!   condition: requires_management_context
//! - name: Payment Systems
//!   condition:
//!     requires_industry_mention: [fintech, payments, banking]
//! ```

use serde::{Deserialize, Serialize};

/// The closed set of condition kinds the evaluator understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCondition {
    /// Include only when any of the keywords appears in the job text.
    RequiresKeywordInJob(Vec<String>),
    /// Include only for roles with management signals in the job text.
    RequiresManagementContext,
    /// Include only when the job text mentions one of these industry terms.
    RequiresIndustryMention(Vec<String>),
}

/// The condition field as stored on a skill entry.
///
/// Inventories written before conditions were structured carry prose here.
/// Such text is preserved on load so the entry round-trips, but it cannot be
/// evaluated: the evaluator reports it as an unclassifiable condition and
/// the skill falls back to a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionField {
    // singleton_map keeps the YAML form `requires_keyword_in_job: [..]`
    // instead of serde_yaml 0.9's `!tag` notation.
    Structured(#[serde(with = "serde_yaml::with::singleton_map")] SkillCondition),
    FreeText(String),
}

impl ConditionField {
    /// Returns the structured condition, if this field holds one.
    pub fn as_structured(&self) -> Option<&SkillCondition> {
        match self {
            ConditionField::Structured(condition) => Some(condition),
            ConditionField::FreeText(_) => None,
        }
    }
}

impl From<SkillCondition> for ConditionField {
    fn from(condition: SkillCondition) -> Self {
        ConditionField::Structured(condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_condition_parses_from_mapping() {
        let yaml = "requires_keyword_in_job: [mobile, React Native]";
        let field: ConditionField = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            field,
            ConditionField::Structured(SkillCondition::RequiresKeywordInJob(vec![
                "mobile".to_string(),
                "React Native".to_string(),
            ]))
        );
    }

    #[test]
    fn test_management_condition_parses_from_bare_string() {
        let field: ConditionField = serde_yaml::from_str("requires_management_context").unwrap();
        assert_eq!(
            field,
            ConditionField::Structured(SkillCondition::RequiresManagementContext)
        );
    }

    #[test]
    fn test_industry_condition_parses_from_mapping() {
        let yaml = "requires_industry_mention: [fintech, banking]";
        let field: ConditionField = serde_yaml::from_str(yaml).unwrap();
        let SkillCondition::RequiresIndustryMention(terms) =
            field.as_structured().unwrap().clone()
        else {
            panic!("expected RequiresIndustryMention, got {field:?}");
        };
        assert_eq!(terms, vec!["fintech".to_string(), "banking".to_string()]);
    }

    #[test]
    fn test_prose_condition_is_retained_as_free_text() {
        let field: ConditionField =
            serde_yaml::from_str("\"only add this if the job is mobile-focused\"").unwrap();
        assert_eq!(
            field,
            ConditionField::FreeText("only add this if the job is mobile-focused".to_string())
        );
        assert!(field.as_structured().is_none());
    }

    #[test]
    fn test_structured_condition_round_trips() {
        let field = ConditionField::from(SkillCondition::RequiresKeywordInJob(vec![
            "mobile".to_string(),
        ]));
        let yaml = serde_yaml::to_string(&field).unwrap();
        let back: ConditionField = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, field);
    }
}
