//! The assembled, read-only framework model.
//!
//! `normalize` runs the full pipeline (indexers → join → rollup) and bundles
//! the outputs into one snapshot. Nothing here computes beyond composition
//! except the on-demand aggregate accessors, which are derived from the maps
//! at call time rather than cached.

use crate::engine::identity::{PairKey, RoleKey};
use crate::engine::join::{collect_work_functions, join_role_skills};
use crate::engine::record::{
    CompetencyDetail, CwfEntry, KnowledgeEntry, RoleSkillEntry, RoleSummary, SkillUsage,
    UniqueSkillDetail,
};
use crate::engine::registry::{
    index_competencies, index_pair_skills, index_roles, index_skill_catalog,
};
use crate::engine::summary::summarize_roles;
use crate::payload::TablePayload;
use anyhow::{Result, bail};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Fully cross-referenced framework model for interactive browsing.
///
/// Built in one shot by [`normalize`] and immutable afterwards; a reload
/// produces a new snapshot rather than mutating this one.
#[derive(Clone, Debug, Default, Serialize)]
pub struct FrameworkModel {
    /// Role summaries sorted by sector, track, title.
    pub role_summaries: Vec<RoleSummary>,
    /// The same summaries keyed by role identity.
    pub summary_lookup: BTreeMap<RoleKey, RoleSummary>,
    /// Per-role skill entries in source row order.
    pub skills_by_role: BTreeMap<RoleKey, Vec<RoleSkillEntry>>,
    /// Competency detail keyed by code.
    pub competency_details: BTreeMap<String, CompetencyDetail>,
    /// Knowledge/ability content keyed by competency-proficiency pair.
    pub knowledge_by_pair: BTreeMap<PairKey, KnowledgeEntry>,
    /// Unique-skill catalog keyed by title.
    pub skill_catalog: BTreeMap<String, UniqueSkillDetail>,
    /// Reverse index: unique-skill title to every referencing triple.
    pub skill_usage: BTreeMap<String, Vec<SkillUsage>>,
    /// Critical-work-function entries keyed by role identity.
    pub work_functions_by_role: BTreeMap<RoleKey, Vec<CwfEntry>>,
}

/// Normalize one raw payload into a [`FrameworkModel`].
///
/// Pure: equal payloads yield structurally equal models. The only structural
/// requirement is a non-empty role-description table; every other table
/// degrades to empty lookups and zero counts when absent. Row-level problems
/// (missing identity, orphaned references, empty required fields) skip the
/// row silently.
pub fn normalize(payload: &TablePayload) -> Result<FrameworkModel> {
    if payload.job_role_descriptions.is_empty() {
        bail!(
            "no role descriptions found; the framework export must include the Job Role_Description table"
        );
    }

    let roles = index_roles(&payload.job_role_descriptions);
    let competencies = index_competencies(&payload.tsc_k_and_a);
    let pair_skills = index_pair_skills(&payload.tsc_to_unique);
    let skill_catalog = index_skill_catalog(&payload.unique_skills_list);

    let joined = join_role_skills(
        &payload.job_role_tsc_ccs,
        &roles,
        &competencies,
        &pair_skills,
    );
    let work_functions_by_role = collect_work_functions(&payload.job_role_cwf_kt);

    let role_summaries = summarize_roles(&roles, &joined.skills_by_role, &work_functions_by_role);
    let summary_lookup = role_summaries
        .iter()
        .map(|summary| (summary.key.clone(), summary.clone()))
        .collect();

    Ok(FrameworkModel {
        role_summaries,
        summary_lookup,
        skills_by_role: joined.skills_by_role,
        competency_details: competencies.details,
        knowledge_by_pair: competencies.knowledge,
        skill_catalog,
        skill_usage: joined.skill_usage,
        work_functions_by_role,
    })
}

impl FrameworkModel {
    /// Number of registered roles.
    pub fn role_count(&self) -> usize {
        self.role_summaries.len()
    }

    /// Total distinct unique skills.
    ///
    /// The catalog is authoritative when supplied; without one, falls back
    /// to the union of skills referenced across all role entries.
    pub fn unique_skill_count(&self) -> usize {
        if !self.skill_catalog.is_empty() {
            return self.skill_catalog.len();
        }
        self.skills_by_role
            .values()
            .flatten()
            .flat_map(|entry| entry.unique_skills.iter())
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Sorted distinct sectors across registered roles.
    pub fn sectors(&self) -> Vec<String> {
        let sectors: BTreeSet<&str> = self
            .role_summaries
            .iter()
            .map(|summary| summary.sector.as_str())
            .collect();
        sectors.into_iter().map(str::to_string).collect()
    }

    /// Sorted union of skill titles from the usage index and the catalog.
    ///
    /// Catalog-only skills appear here even though they carry no usage
    /// records; the usage index itself stays an exact image of the join.
    pub fn unique_skill_titles(&self) -> Vec<String> {
        let titles: BTreeSet<&str> = self
            .skill_usage
            .keys()
            .chain(self.skill_catalog.keys())
            .map(String::as_str)
            .collect();
        titles.into_iter().map(str::to_string).collect()
    }
}
