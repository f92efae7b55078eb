// Skill inventory: data model, usage conditions, flat-file store,
// and resume-facing category helpers.

pub mod categories;
pub mod conditions;
pub mod merge;
pub mod model;
pub mod store;

pub use conditions::{ConditionField, SkillCondition};
pub use merge::{merge_into_resume, ResumeSkills};
pub use model::{Inventory, SkillEntry};
pub use store::{load_inventory, save_inventory};
