//! Grid model: the column/row value editor backing one data role of a DML.

use crate::enums::CellTarget;
use crate::error::GridError;
use crate::identity::{new_entity_id, EntityId};
use serde::{Deserialize, Serialize};

/// A named grid column. `text` is the database column name and may be
/// blank while the user is still typing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: EntityId,
    pub text: String,
}

impl Column {
    /// A fresh column with a blank name.
    pub fn new() -> Self {
        Column {
            id: new_entity_id(),
            text: String::new(),
        }
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

/// One value cell. `column_id` references a [`Column`] in the same grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub id: EntityId,
    pub column_id: EntityId,
    pub text: String,
}

impl Cell {
    /// A fresh blank cell belonging to the given column.
    pub fn new(column_id: EntityId) -> Self {
        Cell {
            id: new_entity_id(),
            column_id,
            text: String::new(),
        }
    }
}

/// One grid row, holding exactly one cell per column of its grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: EntityId,
    pub cells: Vec<Cell>,
}

/// A two-dimensional grid of named columns and text rows.
///
/// Invariant: every row holds exactly one cell per column, in column
/// order, with `cell.column_id` matching the column at the same position.
/// Columns, rows, and cells are ordered sequences; "last element" is
/// meaningful and preserved by every operation here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTable {
    pub id: EntityId,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

impl DisplayTable {
    /// An empty grid: no columns, no rows.
    pub fn new() -> Self {
        DisplayTable {
            id: new_entity_id(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Whether the grid holds at least one row. The serializer suppresses
    /// whole operation blocks for grids where this is false.
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Appends a blank-named column, and one blank cell referencing it to
    /// every existing row so no row is left with a cell gap.
    pub fn add_column(&mut self) -> EntityId {
        let column = Column::new();
        let column_id = column.id;
        for row in &mut self.rows {
            row.cells.push(Cell::new(column_id));
        }
        self.columns.push(column);
        column_id
    }

    /// Removes a column and the matching cell from every row. A grid
    /// cannot hold rows without columns, so removing the last column also
    /// clears all rows.
    pub fn remove_column(&mut self, column_id: EntityId) -> Result<(), GridError> {
        if !self.columns.iter().any(|column| column.id == column_id) {
            return Err(GridError::ColumnNotFound { column_id });
        }

        self.columns.retain(|column| column.id != column_id);

        if self.columns.is_empty() {
            self.rows.clear();
            return Ok(());
        }

        for row in &mut self.rows {
            row.cells.retain(|cell| cell.column_id != column_id);
        }
        Ok(())
    }

    /// Appends a row with one blank cell per column, in column order. An
    /// empty grid first gets a single synthesized column so the new row
    /// has a column to belong to.
    pub fn add_row(&mut self) -> EntityId {
        if self.columns.is_empty() && self.rows.is_empty() {
            self.columns.push(Column::new());
        }

        let row = Row {
            id: new_entity_id(),
            cells: self
                .columns
                .iter()
                .map(|column| Cell::new(column.id))
                .collect(),
        };
        let row_id = row.id;
        self.rows.push(row);
        row_id
    }

    /// Removes the row with that id; no other state changes.
    pub fn remove_row(&mut self, row_id: EntityId) -> Result<(), GridError> {
        if !self.rows.iter().any(|row| row.id == row_id) {
            return Err(GridError::RowNotFound { row_id });
        }
        self.rows.retain(|row| row.id != row_id);
        Ok(())
    }

    /// Replaces the text of the entity matching `target_id`. Column ids
    /// are checked first (header rename), then cell ids across all rows
    /// (row-cell edit); at most one entity is updated per call.
    pub fn update_cell(&mut self, target_id: EntityId, text: &str) -> Result<CellTarget, GridError> {
        if let Some(column) = self.columns.iter_mut().find(|column| column.id == target_id) {
            column.text = text.to_string();
            return Ok(CellTarget::Column);
        }

        for row in &mut self.rows {
            if let Some(cell) = row.cells.iter_mut().find(|cell| cell.id == target_id) {
                cell.text = text.to_string();
                return Ok(CellTarget::Cell);
            }
        }

        Err(GridError::TargetNotFound { target_id })
    }
}

impl Default for DisplayTable {
    fn default() -> Self {
        Self::new()
    }
}
