//! Load lifecycle around the normalization engine.
//!
//! The store owns the current model snapshot and the load status the UI
//! layer observes. A load either completes and replaces the snapshot in one
//! assignment, or fails and leaves the previous snapshot untouched; readers
//! never see a partially populated model.

use crate::engine::{FrameworkModel, normalize};
use crate::loader::{archive, workbook};
use crate::payload::TablePayload;
use std::path::Path;

/// Observable status of the most recent load request.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// Holds the current snapshot plus load status and last error message.
///
/// All mutation goes through the `load_*` entry points; the indexing maps
/// themselves are scoped inside `normalize`, so two loads can never share
/// mutable state. The `Loading` guard makes reentrant requests (a UI
/// double-fire) no-ops instead of interleaved passes.
#[derive(Default)]
pub struct FrameworkStore {
    state: LoadState,
    error: String,
    model: FrameworkModel,
}

impl FrameworkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Last failure message; empty unless `state() == Error`.
    pub fn error(&self) -> &str {
        &self.error
    }

    /// The current snapshot. Empty until the first successful load, and
    /// keeps the previous contents across a failed reload.
    pub fn model(&self) -> &FrameworkModel {
        &self.model
    }

    /// Normalize a payload and install the resulting snapshot.
    pub fn load(&mut self, payload: &TablePayload) {
        if self.state == LoadState::Loading {
            return;
        }
        self.state = LoadState::Loading;
        self.error.clear();

        match normalize(payload) {
            Ok(model) => {
                self.model = model;
                self.state = LoadState::Ready;
            }
            Err(err) => {
                self.error = format!("{err:#}");
                self.state = LoadState::Error;
            }
        }
    }

    /// Load the bundled JSON payload out of a zip archive.
    pub fn load_archive(&mut self, path: &Path) {
        if self.state == LoadState::Loading {
            return;
        }
        self.state = LoadState::Loading;
        self.error.clear();

        match archive::load_archive_payload(path).and_then(|payload| normalize(&payload)) {
            Ok(model) => {
                self.model = model;
                self.state = LoadState::Ready;
            }
            Err(err) => {
                self.error = format!("{err:#}");
                self.state = LoadState::Error;
            }
        }
    }

    /// Classify and load a set of uploaded workbooks.
    ///
    /// Unreadable files are skipped and reported in the returned warnings;
    /// the load fails only if the required role-description table is still
    /// empty after the readable files are extracted.
    pub fn load_workbooks(&mut self, paths: &[&Path]) -> Vec<String> {
        if self.state == LoadState::Loading {
            return Vec::new();
        }
        self.state = LoadState::Loading;
        self.error.clear();

        let extraction = workbook::extract_payload(paths);
        if extraction.payload.job_role_descriptions.is_empty() {
            self.error = String::from(
                "could not find the required sheets; upload the three Skills Framework files",
            );
            self.state = LoadState::Error;
            return extraction.warnings;
        }

        match normalize(&extraction.payload) {
            Ok(model) => {
                self.model = model;
                self.state = LoadState::Ready;
            }
            Err(err) => {
                self.error = format!("{err:#}");
                self.state = LoadState::Error;
            }
        }
        extraction.warnings
    }
}
