//! Role summary rollups and the canonical display ordering.

use crate::engine::identity::RoleKey;
use crate::engine::record::{CwfEntry, Role, RoleSkillEntry, RoleSummary};
use std::collections::{BTreeMap, BTreeSet};

/// Compute one summary per registered role and sort the result.
///
/// Iterates the role registry, not the competency table, so roles with no
/// competency rows still surface with zero counts. The distinct unique-skill
/// count unions the entry lists; shared skills across entries collapse.
/// Ordering is an explicit sector → track → title chain (code-point
/// comparison); `sort_by` is stable, so the should-not-occur case of equal
/// tuples retains encounter order.
pub fn summarize_roles(
    roles: &BTreeMap<RoleKey, Role>,
    skills_by_role: &BTreeMap<RoleKey, Vec<RoleSkillEntry>>,
    work_functions: &BTreeMap<RoleKey, Vec<CwfEntry>>,
) -> Vec<RoleSummary> {
    let mut summaries: Vec<RoleSummary> = roles
        .values()
        .map(|role| {
            let entries = skills_by_role.get(&role.key).map(Vec::as_slice).unwrap_or(&[]);
            let distinct: BTreeSet<&str> = entries
                .iter()
                .flat_map(|entry| entry.unique_skills.iter())
                .map(String::as_str)
                .collect();
            RoleSummary {
                key: role.key.clone(),
                sector: role.sector.clone(),
                track: role.track.clone(),
                title: role.title.clone(),
                description: role.description.clone(),
                tsc_count: entries.len(),
                unique_skill_count: distinct.len(),
                cwf_count: work_functions.get(&role.key).map_or(0, Vec::len),
            }
        })
        .collect();

    summaries.sort_by(|a, b| {
        a.sector
            .cmp(&b.sector)
            .then_with(|| a.track.cmp(&b.track))
            .then_with(|| a.title.cmp(&b.title))
    });
    summaries
}
