//! Error types for lcgen model operations

use crate::EntityId;
use thiserror::Error;

/// Grid-level lookup failures.
///
/// A failed lookup leaves the grid untouched; callers see the error and
/// decide what to surface (the store treats it as a visible no-op).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Column not found: {column_id}")]
    ColumnNotFound { column_id: EntityId },

    #[error("Row not found: {row_id}")]
    RowNotFound { row_id: EntityId },

    #[error("No column or cell matches id {target_id}")]
    TargetNotFound { target_id: EntityId },
}
