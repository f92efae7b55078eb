//! Conditional evidence evaluator — decides, per skill, whether the
//! text-generation step may add it to the resume.
//!
//! The decision is a hard constraint for the generator: a skill is ADDed
//! only when the provided experience text actually references it (or, for
//! management-gated skills, describes management work). Anything else is a
//! GAP or SKIP — a skill is never fabricated.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::EngineError;
use crate::inventory::conditions::{ConditionField, SkillCondition};
use crate::inventory::model::SkillEntry;
use crate::matching::text::contains_term;
use crate::matching::variants::VariantTable;

/// Job-text and evidence phrases that signal a management role.
const MANAGEMENT_SIGNALS: &[&str] = &[
    "manage",
    "manages",
    "managed",
    "managing",
    "management",
    "manager",
    "lead team",
    "leads team",
    "led team",
    "leading team",
    "lead a team",
    "led a team",
    "leading a team",
    "team lead",
    "team leadership",
    "oversee",
    "oversees",
    "oversaw",
    "overseeing",
    "direct reports",
    "people manager",
    "head of",
];

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Terminal outcome of evaluating one skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Evidence supports the skill; the generator may add it.
    Add,
    /// Relevant but unsupported by evidence; surface as a documented gap.
    Gap,
    /// The skill's condition is not met by this job; leave it out entirely.
    Skip,
}

/// Per-skill decision handed to the text-generation collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceDecision {
    pub skill: SkillEntry,
    pub outcome: Outcome,
    pub reason: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Decision procedure
// ────────────────────────────────────────────────────────────────────────────

/// Evaluates one skill against the job text and the evidence text.
///
/// Stateless and idempotent. Fails only when the skill carries a condition
/// that is not one of the structured kinds; batch callers should log that
/// and record the skill as a gap (see [`evaluate_batch`]).
pub fn evaluate(
    skill: &SkillEntry,
    job_text: &str,
    evidence_text: &str,
) -> Result<EvidenceDecision, EngineError> {
    let condition = match &skill.condition {
        None => return Ok(decide_on_evidence(skill, evidence_text, false)),
        Some(ConditionField::FreeText(text)) => {
            return Err(EngineError::UnclassifiableCondition {
                skill: skill.name.clone(),
                condition: text.clone(),
            })
        }
        Some(ConditionField::Structured(condition)) => condition,
    };

    if !condition_is_met(condition, job_text) {
        return Ok(EvidenceDecision {
            skill: skill.clone(),
            outcome: Outcome::Skip,
            reason: condition_unmet_reason(condition),
        });
    }

    let accept_management_evidence =
        matches!(condition, SkillCondition::RequiresManagementContext);
    Ok(decide_on_evidence(skill, evidence_text, accept_management_evidence))
}

/// Evaluates a batch of skills, never aborting on a single bad entry.
///
/// An unclassifiable condition is logged and recorded as a GAP — the one
/// safe default, since an unchecked ADD could put an unearned skill on the
/// resume.
pub fn evaluate_batch<'a>(
    skills: impl IntoIterator<Item = &'a SkillEntry>,
    job_text: &str,
    evidence_text: &str,
) -> Vec<EvidenceDecision> {
    skills
        .into_iter()
        .map(|skill| match evaluate(skill, job_text, evidence_text) {
            Ok(decision) => decision,
            Err(error) => {
                warn!(skill = %skill.name, %error, "recording skill as gap");
                EvidenceDecision {
                    skill: skill.clone(),
                    outcome: Outcome::Gap,
                    reason: "condition could not be classified; kept as gap pending inventory fix"
                        .to_string(),
                }
            }
        })
        .collect()
}

fn condition_is_met(condition: &SkillCondition, job_text: &str) -> bool {
    match condition {
        SkillCondition::RequiresKeywordInJob(keywords) => keywords
            .iter()
            .any(|keyword| contains_term(job_text, keyword)),
        SkillCondition::RequiresManagementContext => has_management_signal(job_text),
        SkillCondition::RequiresIndustryMention(terms) => {
            terms.iter().any(|term| contains_term(job_text, term))
        }
    }
}

fn condition_unmet_reason(condition: &SkillCondition) -> String {
    match condition {
        SkillCondition::RequiresKeywordInJob(keywords) => format!(
            "condition not met: job text mentions none of [{}]",
            keywords.join(", ")
        ),
        SkillCondition::RequiresManagementContext => {
            "condition not met: job text has no management signals".to_string()
        }
        SkillCondition::RequiresIndustryMention(terms) => format!(
            "condition not met: job text mentions no industry among [{}]",
            terms.join(", ")
        ),
    }
}

fn has_management_signal(text: &str) -> bool {
    MANAGEMENT_SIGNALS
        .iter()
        .any(|signal| contains_term(text, signal))
}

/// Shared evidence check: the skill (or a variant spelling) must appear in
/// the evidence text. Management-gated skills also accept evidence that
/// describes management work without naming the skill itself.
fn decide_on_evidence(
    skill: &SkillEntry,
    evidence_text: &str,
    accept_management_evidence: bool,
) -> EvidenceDecision {
    let table = VariantTable::builtin();
    let named_form = table
        .normalize(&skill.name)
        .into_iter()
        .find(|form| contains_term(evidence_text, form));

    let (outcome, reason) = match named_form {
        Some(form) => (Outcome::Add, format!("evidence mentions '{form}'")),
        None if accept_management_evidence && has_management_signal(evidence_text) => (
            Outcome::Add,
            format!("management-context evidence supports '{}'", skill.name),
        ),
        None => (
            Outcome::Gap,
            format!("no evidence of '{}' in the provided experience", skill.name),
        ),
    };

    EvidenceDecision {
        skill: skill.clone(),
        outcome,
        reason,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
