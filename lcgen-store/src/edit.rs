//! Edit operations over the changelog, and the pure reducer applying
//! them.

use lcgen_core::{
    CellTarget, ChangeLog, ChangeSet, DatabaseTable, DisplayTable, Dml, DmlVariant, EntityId,
    GridError,
};
use thiserror::Error;

/// One user-visible mutation of the changelog. Each edit addresses its
/// targets by entity id; the reducer either produces a fully-updated
/// snapshot or rejects the edit with the reason.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    AddChangeSet,
    RemoveChangeSet {
        change_set_id: EntityId,
    },
    UpdateChangeSetComment {
        change_set_id: EntityId,
        comment: String,
    },
    AddTable {
        change_set_id: EntityId,
    },
    RemoveTable {
        change_set_id: EntityId,
        table_id: EntityId,
    },
    RenameTable {
        table_id: EntityId,
        name: String,
    },
    AddColumn {
        dml_id: EntityId,
        display_table_id: EntityId,
    },
    RemoveColumn {
        dml_id: EntityId,
        display_table_id: EntityId,
        column_id: EntityId,
    },
    AddRow {
        dml_id: EntityId,
        display_table_id: EntityId,
    },
    RemoveRow {
        dml_id: EntityId,
        display_table_id: EntityId,
        row_id: EntityId,
    },
    UpdateCell {
        dml_id: EntityId,
        display_table_id: EntityId,
        target_id: EntityId,
        text: String,
    },
    SetAuthor {
        author: String,
    },
    SetLogicalFilePath {
        logical_file_path: String,
    },
    ToggleAuditFieldVariant {
        dml_id: EntityId,
    },
    Reset,
}

/// Reducer failures. Every one of them leaves the caller's snapshot
/// unchanged; the store surfaces them as visible no-ops.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("Change-set not found: {change_set_id}")]
    ChangeSetNotFound { change_set_id: EntityId },

    #[error("Table not found: {table_id}")]
    TableNotFound { table_id: EntityId },

    #[error("DML not found: {dml_id}")]
    DmlNotFound { dml_id: EntityId },

    #[error("DML {dml_id} has no display table {display_table_id}")]
    DisplayTableNotFound {
        dml_id: EntityId,
        display_table_id: EntityId,
    },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Applies one edit to a changelog snapshot, producing the next snapshot.
///
/// Pure: the input snapshot is never mutated, and the same (snapshot,
/// edit) pair always produces the same result up to the freshly generated
/// entity ids.
pub fn apply(change_log: &ChangeLog, edit: &Edit) -> Result<ChangeLog, EditError> {
    let mut next = change_log.clone();

    match edit {
        Edit::AddChangeSet => {
            next.change_sets.push(ChangeSet::new(DmlVariant::default()));
        }
        Edit::RemoveChangeSet { change_set_id } => {
            change_set_mut(&mut next, *change_set_id)?;
            next.change_sets
                .retain(|change_set| change_set.id != *change_set_id);
        }
        Edit::UpdateChangeSetComment {
            change_set_id,
            comment,
        } => {
            change_set_mut(&mut next, *change_set_id)?.comment = Some(comment.clone());
        }
        Edit::AddTable { change_set_id } => {
            change_set_mut(&mut next, *change_set_id)?.add_table();
        }
        Edit::RemoveTable {
            change_set_id,
            table_id,
        } => {
            let change_set = change_set_mut(&mut next, *change_set_id)?;
            if !change_set.tables.iter().any(|table| table.id == *table_id) {
                return Err(EditError::TableNotFound { table_id: *table_id });
            }
            change_set.tables.retain(|table| table.id != *table_id);
        }
        Edit::RenameTable { table_id, name } => {
            table_mut(&mut next, *table_id)?.name = name.clone();
        }
        Edit::AddColumn {
            dml_id,
            display_table_id,
        } => {
            display_table_mut(&mut next, *dml_id, *display_table_id)?.add_column();
        }
        Edit::RemoveColumn {
            dml_id,
            display_table_id,
            column_id,
        } => {
            display_table_mut(&mut next, *dml_id, *display_table_id)?
                .remove_column(*column_id)?;
        }
        Edit::AddRow {
            dml_id,
            display_table_id,
        } => {
            display_table_mut(&mut next, *dml_id, *display_table_id)?.add_row();
        }
        Edit::RemoveRow {
            dml_id,
            display_table_id,
            row_id,
        } => {
            display_table_mut(&mut next, *dml_id, *display_table_id)?.remove_row(*row_id)?;
        }
        Edit::UpdateCell {
            dml_id,
            display_table_id,
            target_id,
            text,
        } => {
            let _: CellTarget = display_table_mut(&mut next, *dml_id, *display_table_id)?
                .update_cell(*target_id, text)?;
        }
        Edit::SetAuthor { author } => {
            next.metadata.author = author.clone();
        }
        Edit::SetLogicalFilePath { logical_file_path } => {
            next.metadata.logical_file_path = logical_file_path.clone();
        }
        Edit::ToggleAuditFieldVariant { dml_id } => {
            let dml = dml_mut(&mut next, *dml_id)?;
            dml.audit_field_variant = dml.audit_field_variant.toggled();
        }
        Edit::Reset => {
            next = ChangeLog::default();
        }
    }

    Ok(next)
}

fn change_set_mut(
    change_log: &mut ChangeLog,
    change_set_id: EntityId,
) -> Result<&mut ChangeSet, EditError> {
    change_log
        .change_sets
        .iter_mut()
        .find(|change_set| change_set.id == change_set_id)
        .ok_or(EditError::ChangeSetNotFound { change_set_id })
}

fn table_mut(
    change_log: &mut ChangeLog,
    table_id: EntityId,
) -> Result<&mut DatabaseTable, EditError> {
    change_log
        .change_sets
        .iter_mut()
        .flat_map(|change_set| change_set.tables.iter_mut())
        .find(|table| table.id == table_id)
        .ok_or(EditError::TableNotFound { table_id })
}

fn dml_mut(change_log: &mut ChangeLog, dml_id: EntityId) -> Result<&mut Dml, EditError> {
    change_log
        .change_sets
        .iter_mut()
        .flat_map(|change_set| change_set.tables.iter_mut())
        .map(|table| &mut table.operation)
        .find(|dml| dml.id == dml_id)
        .ok_or(EditError::DmlNotFound { dml_id })
}

fn display_table_mut(
    change_log: &mut ChangeLog,
    dml_id: EntityId,
    display_table_id: EntityId,
) -> Result<&mut DisplayTable, EditError> {
    dml_mut(change_log, dml_id)?
        .display_table_mut(display_table_id)
        .ok_or(EditError::DisplayTableNotFound {
            dml_id,
            display_table_id,
        })
}
