//! The join pass over the per-role competency table.
//!
//! Every surviving row becomes one denormalized [`RoleSkillEntry`] plus one
//! usage record per unique skill it names. Lookups go through the registries
//! built in `registry`, so the whole pass stays linear in the row count.

use crate::engine::identity::{PairKey, RoleKey};
use crate::engine::record::{CwfEntry, Role, RoleSkillEntry, SkillUsage};
use crate::engine::registry::CompetencyIndex;
use crate::fields::{aliases, resolve};
use crate::payload::RawRow;
use std::collections::BTreeMap;

/// Per-role skill entries plus the reverse usage index, built together in
/// one pass so both views always describe the same set of rows.
pub struct JoinOutput {
    pub skills_by_role: BTreeMap<RoleKey, Vec<RoleSkillEntry>>,
    pub skill_usage: BTreeMap<String, Vec<SkillUsage>>,
}

/// Join the role-competency table against the registries.
///
/// Rows are dropped silently when they carry no role identity, reference a
/// role that was never registered, or resolve neither a code nor a title.
/// Competency detail, knowledge entry, and unique-skill list are all
/// optional; a row joining against nothing still yields an entry with empty
/// denormalized fields. Usage records are never deduplicated: each surviving
/// row contributes one record per unique skill it maps to.
pub fn join_role_skills(
    rows: &[RawRow],
    roles: &BTreeMap<RoleKey, Role>,
    competencies: &CompetencyIndex,
    pair_skills: &BTreeMap<PairKey, Vec<String>>,
) -> JoinOutput {
    let mut skills_by_role: BTreeMap<RoleKey, Vec<RoleSkillEntry>> = BTreeMap::new();
    let mut skill_usage: BTreeMap<String, Vec<SkillUsage>> = BTreeMap::new();

    for row in rows {
        let Some(role_key) = RoleKey::from_row(row) else {
            continue;
        };
        let Some(role) = roles.get(&role_key) else {
            // Orphan rows referencing an unregistered role are dropped.
            continue;
        };

        let code = resolve(row, aliases::TSC_CODE);
        let title = resolve(row, aliases::TSC_TITLE);
        let proficiency = resolve(row, aliases::PROFICIENCY_LEVEL);
        if code.is_empty() && title.is_empty() {
            continue;
        }

        let pair = PairKey::new(&code, &proficiency);
        let unique_skills = pair_skills.get(&pair).cloned().unwrap_or_default();
        let knowledge = competencies.knowledge.get(&pair);
        let detail = competencies.details.get(&code);

        for unique_title in &unique_skills {
            skill_usage
                .entry(unique_title.clone())
                .or_default()
                .push(SkillUsage {
                    role_key: role_key.clone(),
                    role_title: role.title.clone(),
                    track: role.track.clone(),
                    sector: role.sector.clone(),
                    tsc_code: code.clone(),
                    tsc_title: title.clone(),
                    proficiency: proficiency.clone(),
                });
        }

        skills_by_role
            .entry(role_key)
            .or_default()
            .push(RoleSkillEntry {
                code,
                title,
                proficiency,
                unique_skills,
                category: detail.map(|d| d.category.clone()),
                tsc_description: detail.map(|d| d.description.clone()),
                proficiency_description: knowledge.map(|k| k.proficiency_description.clone()),
                knowledge_items: knowledge.map(|k| k.knowledge_items.clone()).unwrap_or_default(),
                ability_items: knowledge.map(|k| k.ability_items.clone()).unwrap_or_default(),
            });
    }

    JoinOutput {
        skills_by_role,
        skill_usage,
    }
}

/// Collect critical-work-function rows per role key.
///
/// Runs parallel to the join pass and keys rows the same way, but does not
/// require the role to be registered; orphan entries are inert because the
/// aggregator only reads counts for registered roles. Rows where both the
/// work function and the key task resolve empty are skipped.
pub fn collect_work_functions(rows: &[RawRow]) -> BTreeMap<RoleKey, Vec<CwfEntry>> {
    let mut by_role: BTreeMap<RoleKey, Vec<CwfEntry>> = BTreeMap::new();
    for row in rows {
        let Some(role_key) = RoleKey::from_row(row) else {
            continue;
        };
        let work_function = resolve(row, aliases::WORK_FUNCTION);
        let key_task = resolve(row, aliases::KEY_TASK);
        if work_function.is_empty() && key_task.is_empty() {
            continue;
        }
        by_role.entry(role_key).or_default().push(CwfEntry {
            work_function,
            key_task,
        });
    }
    by_role
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::registry::{index_competencies, index_pair_skills, index_roles};
    use serde_json::json;

    fn rows(value: serde_json::Value) -> Vec<RawRow> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row.as_object().unwrap().clone())
            .collect()
    }

    fn fixture_roles() -> BTreeMap<RoleKey, Role> {
        index_roles(&rows(json!([
            {"Sector": "ICT", "Track": "Ops", "Job Role": "Engineer"}
        ])))
    }

    #[test]
    fn orphan_rows_produce_nothing() {
        let roles = fixture_roles();
        let output = join_role_skills(
            &rows(json!([
                {"Sector": "Tech", "Track": "IT", "Job Role": "Engineer", "TSC_CCS Code": "SK001"}
            ])),
            &roles,
            &index_competencies(&[]),
            &index_pair_skills(&[]),
        );
        assert!(output.skills_by_role.is_empty());
        assert!(output.skill_usage.is_empty());
    }

    #[test]
    fn rows_without_code_or_title_are_skipped() {
        let roles = fixture_roles();
        let output = join_role_skills(
            &rows(json!([
                {"Sector": "ICT", "Track": "Ops", "Job Role": "Engineer", "Proficiency Level": "Basic"}
            ])),
            &roles,
            &index_competencies(&[]),
            &index_pair_skills(&[]),
        );
        assert!(output.skills_by_role.is_empty());
    }

    #[test]
    fn entries_denormalize_registry_detail() {
        let roles = fixture_roles();
        let competencies = index_competencies(&rows(json!([
            {
                "TSC_CCS Code": "SK001", "Proficiency Level": "Basic",
                "TSC_CCS Description": "Plan networks", "TSC_CCS Category": "Technical",
                "Proficiency Description": "Entry level",
                "Knowledge / Ability Items": "Topologies",
                "Knowledge / Ability Classification": "Knowledge"
            }
        ])));
        let pair_skills = index_pair_skills(&rows(json!([
            {"TSC_CCS Code": "SK001", "Proficiency Level": "Basic", "Unique Skills Title": "Communication"}
        ])));
        let output = join_role_skills(
            &rows(json!([
                {
                    "Sector": "ICT", "Track": "Ops", "Job Role": "Engineer",
                    "TSC_CCS Code": "SK001", "TSC_CCS Title": "Networking",
                    "Proficiency Level": "Basic"
                }
            ])),
            &roles,
            &competencies,
            &pair_skills,
        );

        let entries = output.skills_by_role.values().next().unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.category.as_deref(), Some("Technical"));
        assert_eq!(entry.tsc_description.as_deref(), Some("Plan networks"));
        assert_eq!(entry.proficiency_description.as_deref(), Some("Entry level"));
        assert_eq!(entry.knowledge_items, ["Topologies"]);
        assert_eq!(entry.unique_skills, ["Communication"]);

        let usage = &output.skill_usage["Communication"];
        assert_eq!(usage.len(), 1);
        assert_eq!(usage[0].role_title, "Engineer");
        assert_eq!(usage[0].tsc_code, "SK001");
    }

    #[test]
    fn same_code_at_two_proficiencies_is_two_entries() {
        let roles = fixture_roles();
        let output = join_role_skills(
            &rows(json!([
                {"Sector": "ICT", "Track": "Ops", "Job Role": "Engineer",
                 "TSC_CCS Code": "SK001", "Proficiency Level": "Basic"},
                {"Sector": "ICT", "Track": "Ops", "Job Role": "Engineer",
                 "TSC_CCS Code": "SK001", "Proficiency Level": "Advanced"}
            ])),
            &roles,
            &index_competencies(&[]),
            &index_pair_skills(&[]),
        );
        assert_eq!(output.skills_by_role.values().next().unwrap().len(), 2);
    }

    #[test]
    fn usage_records_are_not_deduplicated() {
        let roles = fixture_roles();
        let pair_skills = index_pair_skills(&rows(json!([
            {"TSC_CCS Code": "SK001", "Proficiency Level": "Basic", "Unique Skills Title": "Communication"}
        ])));
        let competency_rows = rows(json!([
            {"Sector": "ICT", "Track": "Ops", "Job Role": "Engineer",
             "TSC_CCS Code": "SK001", "Proficiency Level": "Basic"},
            {"Sector": "ICT", "Track": "Ops", "Job Role": "Engineer",
             "TSC_CCS Code": "SK001", "Proficiency Level": "Basic"}
        ]));
        let output = join_role_skills(
            &competency_rows,
            &roles,
            &index_competencies(&[]),
            &pair_skills,
        );
        assert_eq!(output.skill_usage["Communication"].len(), 2);
    }

    #[test]
    fn work_functions_keep_orphans_and_skip_empty_rows() {
        let by_role = collect_work_functions(&rows(json!([
            {"Sector": "ICT", "Track": "Ops", "Job Role": "Engineer",
             "Critical Work Function": "Maintain networks", "Key Tasks": "Patch switches"},
            {"Sector": "ICT", "Track": "Ops", "Job Role": "Engineer",
             "Key Tasks": "Audit firewall rules"},
            {"Sector": "ICT", "Track": "Ops", "Job Role": "Engineer"},
            {"Sector": "Other", "Job Role": "Unregistered", "CWF": "Something"}
        ])));
        let engineer = &by_role[&RoleKey("ICT|||Ops|||Engineer".into())];
        assert_eq!(engineer.len(), 2);
        assert_eq!(engineer[1].work_function, "");
        assert!(by_role.contains_key(&RoleKey("Other|||Unregistered".into())));
    }
}
