//! lcgen XML - Serialization Engine
//!
//! Pure functions from a [`ChangeLog`](lcgen_core::ChangeLog) snapshot to
//! the Liquibase changelog document text. There is no incremental state:
//! the model is the single source of truth and every call re-derives the
//! full document, so serialization is idempotent and safely re-runnable
//! after any edit.

mod audit_fields;
mod change_set;
mod characters;
mod document;
mod insert;
mod value;

pub use document::serialize;
