//! Core entity structures: the changelog, its change-sets, and their
//! table operations.

use crate::display_table::DisplayTable;
use crate::enums::{AuditFieldVariant, DmlVariant};
use crate::identity::{new_entity_id, EntityId};
use serde::{Deserialize, Serialize};

/// Changelog-level metadata rendered into the document preamble and the
/// change-set ids. Blank values are legal user input and render as
/// empty-string attributes, never omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLogMetadata {
    pub author: String,
    pub logical_file_path: String,
}

/// The grids carried by a DML, keyed by operation kind.
///
/// Exactly the grids of the active variant exist. Update and Delete are
/// reserved: the model holds their grids, but the XML engine currently
/// generates bodies for Insert only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum DmlKind {
    #[serde(rename_all = "camelCase")]
    Insert { values_to_insert: DisplayTable },
    #[serde(rename_all = "camelCase")]
    Update {
        values_to_update: DisplayTable,
        old_values_to_rollback: DisplayTable,
        where_clause: DisplayTable,
    },
    #[serde(rename_all = "camelCase")]
    Delete {
        where_clause: DisplayTable,
        old_values_to_insert: DisplayTable,
    },
}

impl DmlKind {
    /// The discriminant without the payload.
    pub fn variant(&self) -> DmlVariant {
        match self {
            DmlKind::Insert { .. } => DmlVariant::Insert,
            DmlKind::Update { .. } => DmlVariant::Update,
            DmlKind::Delete { .. } => DmlVariant::Delete,
        }
    }
}

/// One INSERT/UPDATE/DELETE intent against a database table, carrying the
/// value grids relevant to its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dml {
    pub id: EntityId,
    pub audit_field_variant: AuditFieldVariant,
    #[serde(flatten)]
    pub kind: DmlKind,
}

impl Dml {
    /// A DML with the empty grid set matching `variant`.
    pub fn new(variant: DmlVariant) -> Self {
        let kind = match variant {
            DmlVariant::Insert => DmlKind::Insert {
                values_to_insert: DisplayTable::new(),
            },
            DmlVariant::Update => DmlKind::Update {
                values_to_update: DisplayTable::new(),
                old_values_to_rollback: DisplayTable::new(),
                where_clause: DisplayTable::new(),
            },
            DmlVariant::Delete => DmlKind::Delete {
                where_clause: DisplayTable::new(),
                old_values_to_insert: DisplayTable::new(),
            },
        };

        Dml {
            id: new_entity_id(),
            audit_field_variant: AuditFieldVariant::default(),
            kind,
        }
    }

    pub fn variant(&self) -> DmlVariant {
        self.kind.variant()
    }

    /// All grids of the active variant, in declaration order.
    pub fn display_tables(&self) -> Vec<&DisplayTable> {
        match &self.kind {
            DmlKind::Insert { values_to_insert } => vec![values_to_insert],
            DmlKind::Update {
                values_to_update,
                old_values_to_rollback,
                where_clause,
            } => vec![values_to_update, old_values_to_rollback, where_clause],
            DmlKind::Delete {
                where_clause,
                old_values_to_insert,
            } => vec![where_clause, old_values_to_insert],
        }
    }

    fn display_tables_mut(&mut self) -> Vec<&mut DisplayTable> {
        match &mut self.kind {
            DmlKind::Insert { values_to_insert } => vec![values_to_insert],
            DmlKind::Update {
                values_to_update,
                old_values_to_rollback,
                where_clause,
            } => vec![values_to_update, old_values_to_rollback, where_clause],
            DmlKind::Delete {
                where_clause,
                old_values_to_insert,
            } => vec![where_clause, old_values_to_insert],
        }
    }

    /// Resolves one of this DML's grids by id. `None` when the id belongs
    /// to no grid of the active variant.
    pub fn display_table(&self, display_table_id: EntityId) -> Option<&DisplayTable> {
        self.display_tables()
            .into_iter()
            .find(|table| table.id == display_table_id)
    }

    /// Mutable variant of [`Dml::display_table`].
    pub fn display_table_mut(&mut self, display_table_id: EntityId) -> Option<&mut DisplayTable> {
        self.display_tables_mut()
            .into_iter()
            .find(|table| table.id == display_table_id)
    }
}

/// A database table affected by one DML operation. Owned by exactly one
/// change-set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseTable {
    pub id: EntityId,
    pub name: String,
    pub operation: Dml,
}

impl DatabaseTable {
    /// A new unnamed table carrying an empty DML of the given variant.
    pub fn new(variant: DmlVariant) -> Self {
        DatabaseTable {
            id: new_entity_id(),
            name: String::new(),
            operation: Dml::new(variant),
        }
    }
}

/// An atomic unit of migration work: an ordered list of tables sharing
/// one operation kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeSet {
    pub id: EntityId,
    pub comment: Option<String>,
    pub table_operation_variant: DmlVariant,
    pub tables: Vec<DatabaseTable>,
}

impl ChangeSet {
    /// An empty change-set whose future tables will all carry `variant`.
    pub fn new(variant: DmlVariant) -> Self {
        ChangeSet {
            id: new_entity_id(),
            comment: None,
            table_operation_variant: variant,
            tables: Vec::new(),
        }
    }

    /// Appends a new table. The operation kind is inherited from this
    /// change-set, which is what keeps the shared-variant invariant.
    pub fn add_table(&mut self) -> EntityId {
        let table = DatabaseTable::new(self.table_operation_variant);
        let table_id = table.id;
        self.tables.push(table);
        table_id
    }
}

/// The root of the model: metadata plus the ordered change-sets. The XML
/// document is a pure function of one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeLog {
    pub metadata: ChangeLogMetadata,
    pub change_sets: Vec<ChangeSet>,
}

impl ChangeLog {
    /// A fresh changelog: blank metadata and one empty change-set with
    /// the default operation variant.
    pub fn new() -> Self {
        ChangeLog {
            metadata: ChangeLogMetadata::default(),
            change_sets: vec![ChangeSet::new(DmlVariant::default())],
        }
    }
}

impl Default for ChangeLog {
    fn default() -> Self {
        Self::new()
    }
}
