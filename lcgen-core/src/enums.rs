//! Enum types for lcgen entities

use serde::{Deserialize, Serialize};

/// DML operation kind shared by all tables of a change-set.
///
/// Every [`DatabaseTable`](crate::DatabaseTable) owned by a change-set
/// carries a DML whose kind matches the change-set's
/// `table_operation_variant`; the invariant is established when the table
/// is created and never re-checked (variant switching post-creation is
/// unsupported).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DmlVariant {
    #[default]
    Insert,
    Update,
    Delete,
}

/// Naming scheme for the four audit bookkeeping columns appended to
/// insert operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditFieldVariant {
    #[default]
    Underscore,
    NoUnderscore,
}

impl AuditFieldVariant {
    /// The other naming scheme.
    pub fn toggled(self) -> Self {
        match self {
            AuditFieldVariant::Underscore => AuditFieldVariant::NoUnderscore,
            AuditFieldVariant::NoUnderscore => AuditFieldVariant::Underscore,
        }
    }
}

/// Which kind of entity an `update_cell` call edited: a column header
/// rename or a row-cell edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTarget {
    Column,
    Cell,
}
