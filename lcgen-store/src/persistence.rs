//! JSON persistence for the changelog snapshot.
//!
//! The persisted value is the changelog itself, encoded with the model's
//! serde shape. There is no versioning or migration: the file is read and
//! written as-is, and anything unreadable falls back to the default
//! changelog.

use lcgen_core::ChangeLog;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

/// Persistence failures surfaced to the caller. Only writes report
/// errors; reads always fall back.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to write changelog to {path}: {source}")]
    Write { path: String, source: io::Error },

    #[error("Failed to encode changelog: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Loads the persisted changelog from `path`. A missing file, an
/// unreadable file, or malformed JSON all yield the default changelog;
/// a malformed store is logged and abandoned rather than surfaced as an
/// error to the user.
pub fn load(path: &Path) -> ChangeLog {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no persisted changelog, starting from default");
            return ChangeLog::default();
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read persisted changelog");
            return ChangeLog::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(change_log) => change_log,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "malformed persisted changelog, falling back to default");
            ChangeLog::default()
        }
    }
}

/// Writes the snapshot as pretty-printed JSON, in exactly the shape
/// [`load`] reads back.
pub fn save(path: &Path, change_log: &ChangeLog) -> Result<(), PersistenceError> {
    let encoded = serde_json::to_string_pretty(change_log)?;
    fs::write(path, encoded).map_err(|source| PersistenceError::Write {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcgen_core::DmlVariant;

    // Entity ids are freshly generated per default changelog, so fallback
    // results are compared by shape, not by equality with a new default.
    fn assert_default_shape(change_log: &ChangeLog) {
        assert_eq!(change_log.metadata.author, "");
        assert_eq!(change_log.metadata.logical_file_path, "");
        assert_eq!(change_log.change_sets.len(), 1);

        let change_set = &change_log.change_sets[0];
        assert_eq!(change_set.table_operation_variant, DmlVariant::Insert);
        assert!(change_set.comment.is_none());
        assert!(change_set.tables.is_empty());
    }

    #[test]
    fn round_trip_preserves_the_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changelog.json");

        let mut change_log = ChangeLog::new();
        change_log.metadata.author = "jdoe".to_string();
        change_log.metadata.logical_file_path = "db/refdata.xml".to_string();
        change_log.change_sets[0].comment = Some("seed users".to_string());
        change_log.change_sets[0].add_table();

        save(&path, &change_log).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded, change_log);
    }

    #[test]
    fn missing_file_loads_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        assert_default_shape(&load(&path));
    }

    #[test]
    fn malformed_json_loads_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changelog.json");
        fs::write(&path, "{ not json").unwrap();

        assert_default_shape(&load(&path));
    }

    #[test]
    fn unknown_operation_variants_are_rejected_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("changelog.json");

        let mut change_log = ChangeLog::new();
        change_log.change_sets[0].add_table();
        let encoded = serde_json::to_string_pretty(&change_log)
            .unwrap()
            .replace("\"insert\"", "\"truncate\"");
        fs::write(&path, encoded).unwrap();

        assert_default_shape(&load(&path));
    }
}
