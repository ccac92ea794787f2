//! Normalization and indexing engine.
//!
//! This module turns the six loosely structured export tables into one
//! cross-referenced model: registries keyed by derived identities, a join
//! pass producing per-role skill entries and the unique-skill reverse index,
//! and summary rollups. Callers use [`normalize`] for the whole pipeline;
//! the individual passes are exposed for targeted use and tests.

pub mod identity;
pub mod join;
pub mod record;
pub mod registry;
pub mod snapshot;
pub mod summary;

pub use identity::{PairKey, RoleKey};
pub use join::{JoinOutput, collect_work_functions, join_role_skills};
pub use record::{
    CompetencyDetail, CwfEntry, KnowledgeEntry, Role, RoleSkillEntry, RoleSummary, SkillUsage,
    UniqueSkillDetail,
};
pub use registry::{
    CompetencyIndex, index_competencies, index_pair_skills, index_roles, index_skill_catalog,
};
pub use snapshot::{FrameworkModel, normalize};
pub use summary::summarize_roles;
