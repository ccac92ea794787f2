//! Tolerant column access for externally authored tables.
//!
//! The framework exports rename columns between revisions ("TSC_CCS Code" vs
//! "TSC/CCS Code" vs "Skill Code"), so every semantic field is read through an
//! ordered alias list. The lists live in [`aliases`] as static configuration;
//! adding a newly observed spelling means appending to one constant.

use crate::payload::RawRow;
use serde_json::Value;

/// Resolve a semantic field from a row by trying each alias in order.
///
/// Returns the first candidate whose value coerces to a non-empty trimmed
/// string, otherwise the empty string. Absent columns, `null`s, and
/// non-scalar values never error; the exports are imperfect by contract.
pub fn resolve(row: &RawRow, candidates: &[&str]) -> String {
    for name in candidates {
        if let Some(value) = row.get(*name) {
            let text = scalar_to_string(value);
            if !text.is_empty() {
                return text;
            }
        }
    }
    String::new()
}

/// Coerce a JSON scalar to a trimmed string; anything else yields `""`.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Per-field alias lists, ordered by preference.
///
/// These track the column spellings observed across export revisions; keep
/// the canonical spelling first.
pub mod aliases {
    pub const SECTOR: &[&str] = &["Sector"];
    pub const TRACK: &[&str] = &["Track"];
    pub const ROLE_TITLE: &[&str] = &["Job Role", "Job Role Title"];
    pub const ROLE_DESCRIPTION: &[&str] = &["Job Role Description", "Description"];

    pub const TSC_CODE: &[&str] = &["TSC_CCS Code", "TSC/CCS Code", "Skill Code", "TSC Code"];
    pub const TSC_TITLE: &[&str] = &["TSC_CCS Title", "TSC/CCS Title", "Skill Title"];
    pub const TSC_DESCRIPTION: &[&str] = &[
        "TSC_CCS Description",
        "TSC/CCS Description",
        "Skill Description",
        "Description",
    ];
    pub const TSC_CATEGORY: &[&str] = &["TSC_CCS Category", "Category"];

    pub const PROFICIENCY_LEVEL: &[&str] = &["Proficiency Level"];
    pub const PROFICIENCY_DESCRIPTION: &[&str] = &["Proficiency Description"];
    pub const KA_ITEM: &[&str] = &["Knowledge / Ability Items"];
    pub const KA_CLASSIFICATION: &[&str] = &["Knowledge / Ability Classification"];

    pub const UNIQUE_SKILL_TITLE: &[&str] = &[
        "Unique Skills Title",
        "Unique Skill Title",
        "Unique Skills",
        "Unique Skills Name",
    ];
    pub const UNIQUE_SKILL_DESCRIPTION: &[&str] = &["Unique Skills Description", "Description"];
    pub const UNIQUE_SKILL_TYPE: &[&str] = &["Type"];
    pub const UNIQUE_SKILL_CATEGORY: &[&str] = &["Category"];

    pub const WORK_FUNCTION: &[&str] = &[
        "Critical Work Function",
        "Job Role_Critical Work Function",
        "CWF",
    ];
    pub const KEY_TASK: &[&str] = &["Key Tasks", "Key Task", "Tasks"];
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: serde_json::Value) -> RawRow {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn first_nonempty_alias_wins() {
        let row = row(json!({
            "TSC_CCS Code": "  ",
            "TSC/CCS Code": "ICT-SNA-4001",
            "Skill Code": "ignored"
        }));
        assert_eq!(resolve(&row, aliases::TSC_CODE), "ICT-SNA-4001");
    }

    #[test]
    fn missing_and_null_yield_empty() {
        let row = row(json!({"TSC_CCS Code": null}));
        assert_eq!(resolve(&row, aliases::TSC_CODE), "");
        assert_eq!(resolve(&row, aliases::TSC_TITLE), "");
    }

    #[test]
    fn scalars_are_stringified_and_trimmed() {
        let row = row(json!({"Proficiency Level": 3, "Track": "  Operations  "}));
        assert_eq!(resolve(&row, aliases::PROFICIENCY_LEVEL), "3");
        assert_eq!(resolve(&row, aliases::TRACK), "Operations");
    }

    #[test]
    fn arrays_and_objects_do_not_resolve() {
        let row = row(json!({"Sector": ["ICT"]}));
        assert_eq!(resolve(&row, aliases::SECTOR), "");
    }
}
