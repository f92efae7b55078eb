// Relevance matching: whole-word text search, variant normalization,
// and the ranked matcher itself.

pub mod matcher;
pub mod text;
pub mod variants;

pub use matcher::{
    match_missing_skills, match_skills, match_skills_with_table, MatchOptions, MatchResult,
    SATURATION_OCCURRENCES,
};
pub use text::{contains_term, count_occurrences};
pub use variants::VariantTable;
