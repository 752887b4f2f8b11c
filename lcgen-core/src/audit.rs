//! Audit field policy: the four bookkeeping columns appended to insert
//! operations.

use crate::enums::AuditFieldVariant;

/// Concrete column names for the four audit roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditFieldNames {
    pub inserted_by: &'static str,
    pub inserted_timestamp: &'static str,
    pub last_updated_by: &'static str,
    pub last_updated_timestamp: &'static str,
}

const UNDERSCORE_NAMES: AuditFieldNames = AuditFieldNames {
    inserted_by: "INSERTED_BY",
    inserted_timestamp: "INSERTED_TIMESTAMP",
    last_updated_by: "LAST_UPDATED_BY",
    last_updated_timestamp: "LAST_UPDATED_TIMESTAMP",
};

const NO_UNDERSCORE_NAMES: AuditFieldNames = AuditFieldNames {
    inserted_by: "INSERTEDBY",
    inserted_timestamp: "INSERTEDTIMESTAMP",
    last_updated_by: "LASTUPDATEDBY",
    last_updated_timestamp: "LASTUPDATEDTIMESTAMP",
};

impl AuditFieldVariant {
    /// Column names for this naming scheme. Total over the enum: a new
    /// variant without a name table fails to compile here.
    pub fn names(self) -> AuditFieldNames {
        match self {
            AuditFieldVariant::Underscore => UNDERSCORE_NAMES,
            AuditFieldVariant::NoUnderscore => NO_UNDERSCORE_NAMES,
        }
    }
}
