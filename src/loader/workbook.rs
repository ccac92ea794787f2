//! File-backed workbook loader.
//!
//! Uploaded spreadsheets are classified by which known sheets they contain,
//! then the six tables are extracted from fixed sheet names. An unreadable
//! file is skipped with a warning rather than failing the whole load; the
//! caller decides whether the surviving tables are sufficient.

use crate::payload::{RawRow, TablePayload};
use calamine::{Data, Reader, open_workbook_auto};
use serde_json::{Number, Value};
use std::path::Path;

const SHEET_ROLE_DESCRIPTION: &str = "Job Role_Description";
const SHEET_ROLE_TSC_CCS: &str = "Job Role_TCS_CCS";
const SHEET_K_AND_A: &str = "TSC_CCS_K&A";
const SHEET_CWF_KT: &str = "Job Role_CWF_KT";
const SHEET_TSC_TO_UNIQUE: &str = "TSC to Unique Skill Mapping";
const SHEET_UNIQUE_SKILLS: &str = "Unique Skills List";

/// Which of the three expected upload files a workbook is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WorkbookKind {
    /// Carries role descriptions, role-competency rows, K&A, and CWF sheets.
    Framework,
    /// Carries the competency-to-unique-skill mapping sheet.
    SkillMapping,
    /// Carries the unique-skill catalog sheet.
    SkillCatalog,
    Unrecognized,
}

/// Classify a workbook by its sheet names.
///
/// The framework file must carry both the role-description and the
/// role-competency sheet; checked first so a combined export wins over the
/// narrower classifications.
pub fn classify_sheets<S: AsRef<str>>(sheet_names: &[S]) -> WorkbookKind {
    let has = |wanted: &str| sheet_names.iter().any(|name| name.as_ref() == wanted);
    if has(SHEET_ROLE_DESCRIPTION) && has(SHEET_ROLE_TSC_CCS) {
        WorkbookKind::Framework
    } else if has(SHEET_TSC_TO_UNIQUE) {
        WorkbookKind::SkillMapping
    } else if has(SHEET_UNIQUE_SKILLS) {
        WorkbookKind::SkillCatalog
    } else {
        WorkbookKind::Unrecognized
    }
}

/// Tables extracted from a set of workbooks plus per-file warnings.
#[derive(Debug, Default)]
pub struct Extraction {
    pub payload: TablePayload,
    pub warnings: Vec<String>,
}

/// Classify each workbook and pull the six tables out of the known sheets.
///
/// A file that cannot be opened as tabular data contributes a warning and is
/// skipped. When two files classify the same way the later one wins, and a
/// table whose sheet is absent stays empty.
pub fn extract_payload(paths: &[&Path]) -> Extraction {
    let mut extraction = Extraction::default();

    for path in paths {
        let mut workbook = match open_workbook_auto(path) {
            Ok(workbook) => workbook,
            Err(err) => {
                extraction
                    .warnings
                    .push(format!("skipping {}: {err}", path.display()));
                continue;
            }
        };

        match classify_sheets(&workbook.sheet_names()) {
            WorkbookKind::Framework => {
                extraction.payload.job_role_descriptions =
                    read_sheet(&mut workbook, SHEET_ROLE_DESCRIPTION);
                extraction.payload.job_role_tsc_ccs = read_sheet(&mut workbook, SHEET_ROLE_TSC_CCS);
                extraction.payload.tsc_k_and_a = read_sheet(&mut workbook, SHEET_K_AND_A);
                extraction.payload.job_role_cwf_kt = read_sheet(&mut workbook, SHEET_CWF_KT);
            }
            WorkbookKind::SkillMapping => {
                extraction.payload.tsc_to_unique = read_sheet(&mut workbook, SHEET_TSC_TO_UNIQUE);
            }
            WorkbookKind::SkillCatalog => {
                extraction.payload.unique_skills_list =
                    read_sheet(&mut workbook, SHEET_UNIQUE_SKILLS);
            }
            WorkbookKind::Unrecognized => {
                extraction.warnings.push(format!(
                    "skipping {}: no recognized framework sheets",
                    path.display()
                ));
            }
        }
    }

    extraction
}

/// Read a sheet into raw rows: first row is the header row, blank headers
/// are dropped, and empty cells become explicit nulls so alias resolution
/// sees them as absent values rather than missing columns.
fn read_sheet<R: Reader<std::io::BufReader<std::fs::File>>>(
    workbook: &mut R,
    sheet_name: &str,
) -> Vec<RawRow> {
    let Ok(range) = workbook.worksheet_range(sheet_name) else {
        return Vec::new();
    };

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    rows.map(|cells| {
        let mut row = RawRow::new();
        for (header, cell) in headers.iter().zip(cells) {
            if header.is_empty() {
                continue;
            }
            row.insert(header.clone(), cell_to_value(cell));
        }
        row
    })
    .collect()
}

fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::String(s) => Value::String(s.clone()),
        Data::Int(i) => Value::Number((*i).into()),
        Data::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::DateTime(dt) => Number::from_f64(dt.as_f64())
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::Empty | Data::Error(_) => Value::Null,
    }
}
