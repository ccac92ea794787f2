//! Archive-backed bulk loader.
//!
//! The preloaded dataset ships as a zip archive containing one JSON payload
//! with the six named tables. Any structural problem (missing file, no JSON
//! member, unparseable payload) is a contextual error; no partial payload is
//! ever produced.

use crate::payload::TablePayload;
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use zip::ZipArchive;

/// Extract the table payload from the first `.json` member of the archive.
pub fn load_archive_payload(path: &Path) -> Result<TablePayload> {
    let file =
        File::open(path).with_context(|| format!("opening archive {}", path.display()))?;
    let mut archive = ZipArchive::new(BufReader::new(file))
        .with_context(|| format!("reading archive {}", path.display()))?;

    let Some(member_name) = archive
        .file_names()
        .find(|name| name.ends_with(".json"))
        .map(str::to_string)
    else {
        bail!("archive {} contains no JSON payload", path.display());
    };

    let mut content = String::new();
    archive
        .by_name(&member_name)
        .with_context(|| format!("extracting {member_name} from {}", path.display()))?
        .read_to_string(&mut content)
        .with_context(|| format!("reading {member_name} from {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("parsing {member_name} from {}", path.display()))
}
