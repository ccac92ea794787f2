//! Single-pass table indexers.
//!
//! Each builder makes one linear scan over its source table and folds rows
//! into a keyed lookup. Duplicate policy is first-occurrence-wins across the
//! board; rows without a usable identity are skipped, never errors, because
//! the tables are externally authored.

use crate::engine::identity::{PairKey, RoleKey};
use crate::engine::record::{CompetencyDetail, KnowledgeEntry, Role, UniqueSkillDetail};
use crate::fields::{aliases, resolve};
use crate::payload::RawRow;
use std::collections::BTreeMap;

/// Both lookups derived from the knowledge-and-ability table.
///
/// The table carries competency detail columns on every row, so one scan
/// feeds two maps: details keyed by bare code, knowledge/ability content
/// keyed by the (code, proficiency) pair.
pub struct CompetencyIndex {
    pub details: BTreeMap<String, CompetencyDetail>,
    pub knowledge: BTreeMap<PairKey, KnowledgeEntry>,
}

/// Index the role-description table by role identity.
///
/// Later rows with an already-registered key are ignored, not merged.
pub fn index_roles(rows: &[RawRow]) -> BTreeMap<RoleKey, Role> {
    let mut registry = BTreeMap::new();
    for row in rows {
        let Some(key) = RoleKey::from_row(row) else {
            continue;
        };
        registry.entry(key.clone()).or_insert_with(|| {
            let description = resolve(row, aliases::ROLE_DESCRIPTION);
            Role {
                key,
                sector: resolve(row, aliases::SECTOR),
                track: resolve(row, aliases::TRACK),
                title: resolve(row, aliases::ROLE_TITLE),
                description: (!description.is_empty()).then_some(description),
            }
        });
    }
    registry
}

/// Index the knowledge-and-ability table.
///
/// Per code: first-seen detail wins. Per pair: the entry is created on first
/// sight, the proficiency description is the first non-empty one seen, and
/// each row's single item is routed by a case-insensitive "ability" substring
/// check on the classification column (everything else counts as knowledge).
pub fn index_competencies(rows: &[RawRow]) -> CompetencyIndex {
    let mut details: BTreeMap<String, CompetencyDetail> = BTreeMap::new();
    let mut knowledge: BTreeMap<PairKey, KnowledgeEntry> = BTreeMap::new();

    for row in rows {
        let code = resolve(row, aliases::TSC_CODE);
        if code.is_empty() {
            continue;
        }

        details.entry(code.clone()).or_insert_with(|| CompetencyDetail {
            title: resolve(row, aliases::TSC_TITLE),
            description: resolve(row, aliases::TSC_DESCRIPTION),
            category: resolve(row, aliases::TSC_CATEGORY),
            sector: resolve(row, aliases::SECTOR),
        });

        let proficiency = resolve(row, aliases::PROFICIENCY_LEVEL);
        let pair = PairKey::new(&code, &proficiency);
        let entry = knowledge.entry(pair).or_insert_with(|| KnowledgeEntry {
            code: code.clone(),
            proficiency_level: proficiency.clone(),
            proficiency_description: String::new(),
            knowledge_items: Vec::new(),
            ability_items: Vec::new(),
        });

        let proficiency_description = resolve(row, aliases::PROFICIENCY_DESCRIPTION);
        if entry.proficiency_description.is_empty() && !proficiency_description.is_empty() {
            entry.proficiency_description = proficiency_description;
        }

        let item = resolve(row, aliases::KA_ITEM);
        if !item.is_empty() {
            let classification = resolve(row, aliases::KA_CLASSIFICATION).to_lowercase();
            if classification.contains("ability") {
                entry.ability_items.push(item);
            } else {
                entry.knowledge_items.push(item);
            }
        }
    }

    CompetencyIndex { details, knowledge }
}

/// Index the unique-skill catalog by trimmed title, first occurrence wins.
pub fn index_skill_catalog(rows: &[RawRow]) -> BTreeMap<String, UniqueSkillDetail> {
    let mut catalog = BTreeMap::new();
    for row in rows {
        let title = resolve(row, aliases::UNIQUE_SKILL_TITLE);
        if title.is_empty() {
            continue;
        }
        catalog.entry(title.clone()).or_insert_with(|| {
            let skill_type = resolve(row, aliases::UNIQUE_SKILL_TYPE);
            let category = resolve(row, aliases::UNIQUE_SKILL_CATEGORY);
            let sector = resolve(row, aliases::SECTOR);
            UniqueSkillDetail {
                title,
                description: resolve(row, aliases::UNIQUE_SKILL_DESCRIPTION),
                skill_type: (!skill_type.is_empty()).then_some(skill_type),
                category: (!category.is_empty()).then_some(category),
                sector: (!sector.is_empty()).then_some(sector),
            }
        });
    }
    catalog
}

/// Build the reverse index from competency-proficiency pair to the ordered,
/// deduplicated list of unique-skill titles mapped to it.
///
/// A row is skipped only when both the code and the skill title resolve
/// empty; a bare code still claims its (possibly empty) bucket. The lists
/// here are the canonical unique-skill sets the join engine consumes.
pub fn index_pair_skills(rows: &[RawRow]) -> BTreeMap<PairKey, Vec<String>> {
    let mut index: BTreeMap<PairKey, Vec<String>> = BTreeMap::new();
    for row in rows {
        let code = resolve(row, aliases::TSC_CODE);
        let title = resolve(row, aliases::UNIQUE_SKILL_TITLE);
        if code.is_empty() && title.is_empty() {
            continue;
        }
        let proficiency = resolve(row, aliases::PROFICIENCY_LEVEL);
        let bucket = index.entry(PairKey::new(&code, &proficiency)).or_default();
        if !title.is_empty() && !bucket.contains(&title) {
            bucket.push(title);
        }
    }
    index
}
