//! Normalization and cross-reference engine for occupational
//! skills-framework exports.
//!
//! The crate ingests six loosely structured tables (role descriptions,
//! per-role competencies, knowledge/ability breakdowns, the competency to
//! unique-skill mapping, the unique-skill catalog, and critical-work-function
//! tasks) and builds one browsable model: sorted role summaries, per-role
//! skill entries enriched with denormalized detail, and a reverse index from
//! unique skill to every (role, competency, proficiency) triple that uses it.
//!
//! [`engine::normalize`] is the pure core; [`store::FrameworkStore`] wraps it
//! in the load lifecycle the UI layer observes, and [`loader`] holds the
//! archive and workbook front ends that produce raw payloads.

pub mod engine;
pub mod fields;
pub mod loader;
pub mod payload;
pub mod store;

pub use engine::{
    CompetencyDetail, CwfEntry, FrameworkModel, KnowledgeEntry, PairKey, Role, RoleKey,
    RoleSkillEntry, RoleSummary, SkillUsage, UniqueSkillDetail, normalize,
};
pub use loader::{Extraction, WorkbookKind, classify_sheets, extract_payload, load_archive_payload};
pub use payload::{RawRow, TablePayload};
pub use store::{FrameworkStore, LoadState};
