use std::path::PathBuf;

use thiserror::Error;

/// Engine-level error type.
///
/// Load-boundary failures (`InvalidInventory`, file errors) are fatal to the
/// load that produced them. `UnclassifiableCondition` is per-skill: batch
/// callers log it and record the skill as a gap instead of aborting.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid inventory: {0}")]
    InvalidInventory(String),

    #[error("skill '{skill}' has an unclassifiable condition: {condition:?}")]
    UnclassifiableCondition { skill: String, condition: String },

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse inventory at {path}: {source}")]
    ParseInventory {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to parse variant table: {0}")]
    ParseVariants(#[from] serde_yaml::Error),

    #[error("failed to serialize inventory: {0}")]
    SerializeInventory(#[source] serde_yaml::Error),
}
