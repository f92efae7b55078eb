//! Skills matching and conditional-inclusion engine for resume tailoring.
//!
//! Given a job description and a categorized skill inventory, the engine
//! ranks the skills relevant to the job and decides, per skill, whether the
//! downstream text-generation step may add it to the resume. Decisions are
//! evidence-gated: a skill the experience text does not support is reported
//! as a gap, never written onto the resume.
//!
//! # Inventory format
//!
//! The inventory is a flat YAML file of category → skill list. A plain
//! string is an unconditional skill; a mapping attaches a usage condition:
//!
//! ```yaml
//! programming_languages:
//!   - Python
//!   - Rust
//! mobile_development:
//!   - name: React Native
//!     condition:
//!       requires_keyword_in_job: [mobile, React Native]
//! leadership:
//!   - name: Team Leadership
//!     condition: requires_management_context
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use skills_engine::{evaluate_batch, load_inventory, match_skills, MatchOptions};
//!
//! let inventory = load_inventory("config/skills_inventory.yaml")?;
//! let matches = match_skills(&inventory, &job_text, &MatchOptions::default());
//!
//! let candidates: Vec<_> = matches.iter().map(|m| m.skill.clone()).collect();
//! let decisions = evaluate_batch(&candidates, &job_text, &resume_text);
//!
//! let prompt_block = skills_engine::report::format_decisions(&decisions);
//! ```
//!
//! All three core operations (`normalize`, `match_skills`, `evaluate`) are
//! pure, synchronous, and free of shared state; they can run concurrently
//! over independent inputs. The only I/O in the crate is the inventory
//! store and the variant-table loader.

pub mod errors;
pub mod evaluation;
pub mod inventory;
pub mod matching;
pub mod report;

pub use errors::EngineError;
pub use evaluation::{evaluate, evaluate_batch, EvidenceDecision, Outcome};
pub use inventory::{
    load_inventory, merge_into_resume, save_inventory, ConditionField, Inventory, ResumeSkills,
    SkillCondition, SkillEntry,
};
pub use matching::{
    match_missing_skills, match_skills, match_skills_with_table, MatchOptions, MatchResult,
    VariantTable,
};
