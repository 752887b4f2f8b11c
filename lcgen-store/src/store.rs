//! The store owning the current changelog snapshot.

use crate::edit::{self, Edit, EditError};
use crate::persistence::{self, PersistenceError};
use lcgen_core::ChangeLog;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Store-level failures: either the edit was rejected (snapshot
/// unchanged) or the accepted snapshot could not be written out.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Owns the single changelog instance and funnels every mutation through
/// the reducer. Readers always observe a fully-consistent snapshot: an
/// edit is applied to a copy and only swapped in once it succeeded as a
/// whole.
pub struct ChangeLogStore {
    change_log: ChangeLog,
    path: PathBuf,
}

impl ChangeLogStore {
    /// Opens a store backed by `path`, loading the persisted changelog or
    /// falling back to the default one.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let change_log = persistence::load(&path);
        ChangeLogStore { change_log, path }
    }

    /// The current snapshot.
    pub fn change_log(&self) -> &ChangeLog {
        &self.change_log
    }

    /// Applies one edit. On success the new snapshot replaces the old one
    /// and is persisted immediately; on a rejected edit the snapshot is
    /// left untouched.
    pub fn apply(&mut self, edit: &Edit) -> Result<&ChangeLog, StoreError> {
        let next = edit::apply(&self.change_log, edit)?;
        self.change_log = next;
        persistence::save(&self.path, &self.change_log)?;
        debug!(?edit, "applied changelog edit");
        Ok(&self.change_log)
    }
}
