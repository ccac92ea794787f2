//! Thin I/O collaborators that produce raw table payloads.
//!
//! Both loaders stop at the payload boundary; all interpretation of the
//! tables happens in `crate::engine`.

pub mod archive;
pub mod workbook;

pub use archive::load_archive_payload;
pub use workbook::{Extraction, WorkbookKind, classify_sheets, extract_payload};
