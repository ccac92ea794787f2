use serde_json::{Value, json};
use skillframe::TablePayload;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub fn payload(value: Value) -> TablePayload {
    serde_json::from_value(value).expect("fixture payload must deserialize")
}

/// A small but fully populated export: two roles, two competencies at one
/// proficiency each, a shared unique skill, and one CWF row.
pub fn fixture_tables() -> Value {
    json!({
        "jobRoleDescriptions": [
            {"Sector": "Infocomm", "Track": "Operations", "Job Role": "Network Engineer",
             "Job Role Description": "Keeps the network alive"},
            {"Sector": "Infocomm", "Track": "Data", "Job Role": "Data Analyst"}
        ],
        "jobRoleTcsCcs": [
            {"Sector": "Infocomm", "Track": "Operations", "Job Role": "Network Engineer",
             "TSC_CCS Code": "ICT-SNA-4001", "TSC_CCS Title": "Network Administration",
             "Proficiency Level": "Level 4"},
            {"Sector": "Infocomm", "Track": "Data", "Job Role": "Data Analyst",
             "TSC_CCS Code": "ICT-DAT-3001", "TSC_CCS Title": "Data Visualisation",
             "Proficiency Level": "Level 3"}
        ],
        "tscKAndA": [
            {"TSC_CCS Code": "ICT-SNA-4001", "TSC_CCS Title": "Network Administration",
             "TSC_CCS Description": "Administer enterprise networks",
             "TSC_CCS Category": "Technical Skills", "Sector": "Infocomm",
             "Proficiency Level": "Level 4", "Proficiency Description": "Independent operation",
             "Knowledge / Ability Items": "Routing protocols",
             "Knowledge / Ability Classification": "Knowledge"},
            {"TSC_CCS Code": "ICT-SNA-4001", "Proficiency Level": "Level 4",
             "Knowledge / Ability Items": "Configure VLANs",
             "Knowledge / Ability Classification": "Ability"}
        ],
        "tscToUnique": [
            {"TSC_CCS Code": "ICT-SNA-4001", "Proficiency Level": "Level 4",
             "Unique Skills Title": "Communication"},
            {"TSC_CCS Code": "ICT-SNA-4001", "Proficiency Level": "Level 4",
             "Unique Skills Title": "Problem Solving"},
            {"TSC_CCS Code": "ICT-DAT-3001", "Proficiency Level": "Level 3",
             "Unique Skills Title": "Communication"}
        ],
        "uniqueSkillsList": [
            {"Unique Skills Title": "Communication", "Unique Skills Description": "Convey ideas"},
            {"Unique Skills Title": "Problem Solving", "Unique Skills Description": "Resolve issues"}
        ],
        "jobRoleCwfKt": [
            {"Sector": "Infocomm", "Track": "Operations", "Job Role": "Network Engineer",
             "Critical Work Function": "Maintain infrastructure",
             "Key Tasks": "Patch network equipment"}
        ]
    })
}

/// Write a zip archive containing one named member with the given content.
pub fn write_archive(dir: &Path, archive_name: &str, member: &str, content: &str) -> PathBuf {
    let path = dir.join(archive_name);
    let file = File::create(&path).expect("create archive file");
    let mut writer = ZipWriter::new(file);
    writer
        .start_file(member, SimpleFileOptions::default())
        .expect("start archive member");
    writer
        .write_all(content.as_bytes())
        .expect("write archive member");
    writer.finish().expect("finish archive");
    path
}
