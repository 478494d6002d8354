//! Manifest loader.
//!
//! Reads JSON manifests from a sources directory and produces collections
//! plus structured, non-fatal warnings. A broken file never aborts the
//! batch; the loader always degrades to "what could be loaded".

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::domain::Collection;

/// File name of the designated primary (multiplayer-only) source.
pub const PRIMARY_SOURCE_FILE: &str = "onlinefix.json";

/// Which manifests a load should consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// Every `.json` file under the sources directory.
    #[default]
    AllSources,
    /// Only the designated [`PRIMARY_SOURCE_FILE`].
    PrimaryOnly,
}

/// Non-fatal diagnostics produced while loading.
///
/// Every variant means a source was excluded from the aggregate, never that
/// the load as a whole failed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadWarning {
    /// The sources directory itself does not exist.
    #[error("Sources directory {path} not found")]
    DirectoryMissing { path: PathBuf },

    /// Primary-only mode was requested but the designated file is absent.
    #[error("Primary source {path} not found; no multiplayer data loaded")]
    PrimarySourceMissing { path: PathBuf },

    /// A manifest file could not be read.
    #[error("Failed to read {path}: {reason}")]
    FileUnreadable { path: PathBuf, reason: String },

    /// A manifest file was read but is not valid manifest JSON.
    #[error("Failed to parse {path}: {reason}")]
    FileUnparseable { path: PathBuf, reason: String },
}

/// Result of a load: whatever parsed, plus whatever went wrong.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Successfully parsed collections, in deterministic (sorted-path) order.
    pub collections: Vec<Collection>,
    /// Non-fatal diagnostics accumulated along the way.
    pub warnings: Vec<LoadWarning>,
}

/// Load manifest collections from `dir` according to `mode`.
///
/// All failure modes degrade to fewer collections plus warnings; this
/// function has no error return. Warnings are also emitted on the `tracing`
/// channel for operators.
pub fn load_sources(dir: &Path, mode: SourceMode) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    if !dir.is_dir() {
        warn(
            &mut outcome,
            LoadWarning::DirectoryMissing {
                path: dir.to_path_buf(),
            },
        );
        return outcome;
    }

    match mode {
        SourceMode::PrimaryOnly => {
            let path = dir.join(PRIMARY_SOURCE_FILE);
            if !path.is_file() {
                warn(&mut outcome, LoadWarning::PrimarySourceMissing { path });
                return outcome;
            }
            load_file(&path, &mut outcome);
        }
        SourceMode::AllSources => {
            // Sort paths so collection order never depends on filesystem
            // iteration order.
            let mut paths: Vec<PathBuf> = WalkDir::new(dir)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file())
                .map(|entry| entry.into_path())
                .filter(|path| is_manifest_name(path))
                .collect();
            paths.sort();

            for path in paths {
                load_file(&path, &mut outcome);
            }
        }
    }

    outcome
}

/// Case-insensitive `.json` name check.
fn is_manifest_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_lowercase().ends_with(".json"))
}

/// Parse one manifest file into `outcome`, downgrading failures to warnings.
fn load_file(path: &Path, outcome: &mut LoadOutcome) {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            warn(
                outcome,
                LoadWarning::FileUnreadable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                },
            );
            return;
        }
    };

    let mut collection: Collection = match serde_json::from_str(&data) {
        Ok(collection) => collection,
        Err(e) => {
            warn(
                outcome,
                LoadWarning::FileUnparseable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                },
            );
            return;
        }
    };

    if collection.name.is_empty() {
        collection.name = file_stem(path);
    }
    outcome.collections.push(collection);
}

/// Record a warning and mirror it onto the operator log channel.
fn warn(outcome: &mut LoadOutcome, warning: LoadWarning) {
    tracing::warn!(warning = %warning, "manifest load degraded");
    outcome.warnings.push(warning);
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
