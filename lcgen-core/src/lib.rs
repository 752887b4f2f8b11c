//! lcgen Core - Changelog Model
//!
//! Pure data structures and model operations for the changelog builder.
//! This crate holds the entity graph (changelog, change-sets, database
//! tables, DMLs, value grids), the grid edit operations, the change-set
//! id/label derivation, and the audit-field naming policy. No I/O and no
//! rendering live here; the XML engine and the store build on this crate.

pub mod audit;
pub mod display_table;
pub mod entities;
pub mod enums;
pub mod error;
pub mod identity;
pub mod labels;

pub use audit::AuditFieldNames;
pub use display_table::{Cell, Column, DisplayTable, Row};
pub use entities::{ChangeLog, ChangeLogMetadata, ChangeSet, DatabaseTable, Dml, DmlKind};
pub use enums::{AuditFieldVariant, CellTarget, DmlVariant};
pub use error::GridError;
pub use identity::{new_entity_id, EntityId};
pub use labels::{
    change_set_id, change_set_label, display_change_set_id, LOGICAL_FILE_PATH_PLACEHOLDER,
};
