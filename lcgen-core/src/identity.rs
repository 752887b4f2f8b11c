//! Identity types for lcgen entities

use uuid::Uuid;

/// Entity identifier. Every model entity (change-set, table, DML, grid,
/// column, row, cell) receives one at creation time; ids are opaque,
/// globally unique, and never reused or recycled.
pub type EntityId = Uuid;

/// Generate a new random EntityId.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4()
}
