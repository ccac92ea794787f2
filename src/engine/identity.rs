//! Composite keys used throughout the indexing passes.

use crate::fields::{aliases, resolve};
use crate::payload::RawRow;
use serde::{Deserialize, Serialize};
use std::fmt;

// Multi-character delimiters so keys survive titles containing '|'.
const ROLE_KEY_DELIMITER: &str = "|||";
const PAIR_KEY_DELIMITER: &str = "||";

/// Stable identity of a job role: sector, track, and title joined by `|||`.
///
/// Derived wherever a table carries role columns, so independently keyed
/// tables join on the same string without a shared surrogate id.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleKey(pub String);

/// Identity of a competency at one proficiency level: `code||level`.
///
/// Knowledge/ability content and unique-skill mappings anchor here, not at
/// the bare code; the same competency at two levels is two distinct entries.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairKey(pub String);

impl RoleKey {
    /// Derive the role identity from a raw row.
    ///
    /// The title resolves from the primary column with a fallback spelling;
    /// an empty title means the row carries no identity and must be skipped,
    /// even when sector or track are present. Empty components are dropped
    /// from the join so `("ICT", "", "Engineer")` and a row missing the track
    /// column entirely produce the same key.
    pub fn from_row(row: &RawRow) -> Option<Self> {
        let sector = resolve(row, aliases::SECTOR);
        let track = resolve(row, aliases::TRACK);
        let title = resolve(row, aliases::ROLE_TITLE);
        if title.is_empty() {
            return None;
        }
        let key = [sector, track, title]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(ROLE_KEY_DELIMITER);
        Some(RoleKey(key))
    }
}

impl PairKey {
    /// Join a competency code and proficiency level; both are pre-resolved
    /// (trimmed) by the caller, so no fallback handling happens here.
    pub fn new(code: &str, proficiency: &str) -> Self {
        PairKey(format!("{code}{PAIR_KEY_DELIMITER}{proficiency}"))
    }
}

impl fmt::Display for RoleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
