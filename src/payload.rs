//! Raw table payload as produced by the bulk loaders.
//!
//! The six tables mirror the sheet layout of the upstream skills-framework
//! exports. Rows are kept as untyped column→value maps because the exports
//! rename columns between revisions; `crate::fields` handles the aliasing.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One row of a source table: column name to scalar value.
pub type RawRow = Map<String, Value>;

/// The six named table collections of one framework export.
///
/// Any table may be absent or `null` in the source JSON; both deserialize to
/// an empty sequence so downstream passes degrade to empty lookups instead of
/// failing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TablePayload {
    #[serde(rename = "jobRoleDescriptions", deserialize_with = "null_as_empty")]
    pub job_role_descriptions: Vec<RawRow>,
    #[serde(rename = "jobRoleTcsCcs", deserialize_with = "null_as_empty")]
    pub job_role_tsc_ccs: Vec<RawRow>,
    #[serde(rename = "tscKAndA", deserialize_with = "null_as_empty")]
    pub tsc_k_and_a: Vec<RawRow>,
    #[serde(rename = "tscToUnique", deserialize_with = "null_as_empty")]
    pub tsc_to_unique: Vec<RawRow>,
    #[serde(rename = "uniqueSkillsList", deserialize_with = "null_as_empty")]
    pub unique_skills_list: Vec<RawRow>,
    #[serde(rename = "jobRoleCwfKt", deserialize_with = "null_as_empty")]
    pub job_role_cwf_kt: Vec<RawRow>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<RawRow>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = Option::<Vec<RawRow>>::deserialize(deserializer)?;
    Ok(rows.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_and_null_tables_become_empty() {
        let payload: TablePayload = serde_json::from_value(json!({
            "jobRoleDescriptions": [{"Sector": "ICT"}],
            "tscToUnique": null
        }))
        .unwrap();
        assert_eq!(payload.job_role_descriptions.len(), 1);
        assert!(payload.tsc_to_unique.is_empty());
        assert!(payload.job_role_cwf_kt.is_empty());
    }

    #[test]
    fn unknown_columns_survive_untouched() {
        let payload: TablePayload = serde_json::from_value(json!({
            "jobRoleDescriptions": [{"Sector": "ICT", "Internal Ref": 42}]
        }))
        .unwrap();
        let row = &payload.job_role_descriptions[0];
        assert_eq!(row.get("Internal Ref"), Some(&json!(42)));
    }
}
