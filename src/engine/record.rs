//! Record types produced by the indexing and join passes.
//!
//! These mirror what the browsing UI consumes, so optional attributes stay
//! `Option`s rather than defaulting: a missing competency description and an
//! empty one are different states to a renderer. Everything serializes, the
//! inspect binary prints model fragments as JSON.

use crate::engine::identity::RoleKey;
use serde::{Deserialize, Serialize};

/// A registered job role from the role-description table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub key: RoleKey,
    pub sector: String,
    pub track: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// First-seen detail for a competency code (title, description, grouping).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompetencyDetail {
    pub title: String,
    pub description: String,
    pub category: String,
    pub sector: String,
}

/// Knowledge and ability content for one competency-proficiency pair.
///
/// Item lists are append-only in source row order; duplicates are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub code: String,
    pub proficiency_level: String,
    pub proficiency_description: String,
    pub knowledge_items: Vec<String>,
    pub ability_items: Vec<String>,
}

/// Catalog detail for a unique skill, keyed by its trimmed title.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniqueSkillDetail {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
}

/// One competency held by one role, denormalized for display.
///
/// Shared data (competency detail, knowledge entry, unique-skill list) is
/// copied in rather than referenced; entries are owned by exactly one role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleSkillEntry {
    pub code: String,
    pub title: String,
    pub proficiency: String,
    pub unique_skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsc_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proficiency_description: Option<String>,
    pub knowledge_items: Vec<String>,
    pub ability_items: Vec<String>,
}

/// One edge in the reverse index: a (role, competency, proficiency) triple
/// that references a unique skill. Never deduplicated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillUsage {
    pub role_key: RoleKey,
    pub role_title: String,
    pub track: String,
    pub sector: String,
    pub tsc_code: String,
    pub tsc_title: String,
    pub proficiency: String,
}

/// A critical-work-function row for a role: duty grouping plus key task.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CwfEntry {
    pub work_function: String,
    pub key_task: String,
}

/// Read-only per-role rollup: identity plus the three browsing counts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleSummary {
    pub key: RoleKey,
    pub sector: String,
    pub track: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub tsc_count: usize,
    pub unique_skill_count: usize,
    pub cwf_count: usize,
}
