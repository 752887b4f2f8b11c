//! lcgen Store - Snapshot Ownership, Edits, and Persistence
//!
//! Explicit state-passing around the single changelog instance: a closed
//! [`Edit`] type naming every supported mutation, a pure reducer applying
//! one edit to one snapshot, and a [`ChangeLogStore`] that owns the
//! current snapshot and persists every accepted edit as JSON.

pub mod edit;
pub mod persistence;
pub mod store;

pub use edit::{apply, Edit, EditError};
pub use persistence::{load, save, PersistenceError};
pub use store::{ChangeLogStore, StoreError};
