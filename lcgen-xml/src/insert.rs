//! Insert DML body and rollback generation.

use crate::audit_fields::audit_fields_xml;
use crate::characters::{new_line, tab};
use crate::value::column_xml;
use lcgen_core::{AuditFieldVariant, DatabaseTable, DisplayTable, DmlKind, EntityId};
use std::collections::HashMap;

/// Renders one `<insert>` block per grid row. Cell values resolve their
/// column name through the cell's column id; the grid alignment invariant
/// makes the lookup total for models built through the edit operations
/// (a dangling column id renders a blank name rather than aborting the
/// whole document).
pub(crate) fn insert_xml(
    audit_field_variant: AuditFieldVariant,
    values_to_insert: &DisplayTable,
    table_name: &str,
    change_set_id: &str,
) -> String {
    let column_names: HashMap<EntityId, &str> = values_to_insert
        .columns
        .iter()
        .map(|column| (column.id, column.text.as_str()))
        .collect();

    values_to_insert
        .rows
        .iter()
        .map(|row| {
            let column_values = row
                .cells
                .iter()
                .map(|cell| {
                    let column_name = column_names.get(&cell.column_id).copied().unwrap_or_default();
                    column_xml(column_name, &cell.text)
                })
                .collect::<Vec<_>>()
                .join(&format!("{}{}", new_line(1), tab(3)));
            let audit_field_values = audit_fields_xml(audit_field_variant, change_set_id);

            let opening_tag =
                format!(r#"<insert schemaName="${{schema}}" tableName="{table_name}">"#);
            let body = [column_values, audit_field_values].join(&new_line(1));
            let closing_tag = "</insert>";

            [
                format!("{}{}", tab(2), opening_tag),
                format!("{}{}", tab(3), body),
                format!("{}{}", tab(2), closing_tag),
            ]
            .join(&new_line(1))
        })
        .collect::<Vec<_>>()
        .join(&new_line(2))
}

/// Renders the `<rollback>` block undoing a change-set's inserts. Tables
/// are processed in reverse declaration order: rows inserted into child
/// tables (declared after their parents) must be deleted before the
/// parent rows or the referential constraints would reject the rollback.
/// Each delete matches on the audit inserted-by stamp, parameterized with
/// the change-set id.
pub(crate) fn insert_rollback_xml(tables: &[DatabaseTable], change_set_id: &str) -> String {
    let opening_tag = format!("{}<rollback>", tab(2));
    let body = tables
        .iter()
        .rev()
        .filter(|table| insert_table_has_rows(table))
        .map(|table| {
            let names = table.operation.audit_field_variant.names();

            let delete_opening_tag = format!(
                r#"{}<delete schemaName="${{schema}}" tableName="{}">"#,
                tab(3),
                table.name
            );
            let delete_body = [
                format!("{}<where>{}=:value</where>", tab(4), names.inserted_by),
                format!("{}<whereParams>", tab(4)),
                format!(r#"{}<param value="{}"/>"#, tab(5), change_set_id),
                format!("{}</whereParams>", tab(4)),
            ]
            .join(&new_line(1));
            let delete_closing_tag = format!("{}</delete>", tab(3));

            [delete_opening_tag, delete_body, delete_closing_tag].join(&new_line(1))
        })
        .collect::<Vec<_>>()
        .join(&new_line(2));
    let closing_tag = format!("{}</rollback>", tab(2));

    [opening_tag, body, closing_tag].join(&new_line(1))
}

/// True for an insert operation whose grid holds at least one row. Tables
/// failing this contribute nothing, forward or rollback.
pub(crate) fn insert_table_has_rows(table: &DatabaseTable) -> bool {
    match &table.operation.kind {
        DmlKind::Insert { values_to_insert } => values_to_insert.has_rows(),
        DmlKind::Update { .. } | DmlKind::Delete { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcgen_core::DmlVariant;

    fn insert_table(name: &str, rows: usize) -> DatabaseTable {
        let mut table = DatabaseTable::new(DmlVariant::Insert);
        table.name = name.to_string();
        if let DmlKind::Insert { values_to_insert } = &mut table.operation.kind {
            let column_id = values_to_insert.add_column();
            values_to_insert.update_cell(column_id, "NAME").unwrap();
            for i in 0..rows {
                values_to_insert.add_row();
                let cell_id = values_to_insert.rows[i].cells[0].id;
                values_to_insert.update_cell(cell_id, "Smith").unwrap();
            }
        }
        table
    }

    #[test]
    fn one_insert_block_per_row() {
        let table = insert_table("USERS", 2);
        let DmlKind::Insert { values_to_insert } = &table.operation.kind else {
            unreachable!();
        };

        let xml = insert_xml(
            table.operation.audit_field_variant,
            values_to_insert,
            &table.name,
            "idA",
        );

        assert_eq!(xml.matches("<insert schemaName=\"${schema}\" tableName=\"USERS\">").count(), 2);
        // Row blocks are separated by a blank line.
        assert!(xml.contains("</insert>\r\n\r\n\t\t<insert"));
    }

    #[test]
    fn insert_block_layout() {
        let table = insert_table("USERS", 1);
        let DmlKind::Insert { values_to_insert } = &table.operation.kind else {
            unreachable!();
        };

        let xml = insert_xml(
            table.operation.audit_field_variant,
            values_to_insert,
            &table.name,
            "idA",
        );
        let expected = "\t\t<insert schemaName=\"${schema}\" tableName=\"USERS\">\r\n\
                        \t\t\t<column name=\"NAME\" value=\"Smith\"/>\r\n\
                        \t\t\t<column name=\"INSERTED_BY\" value=\"idA\"/>\r\n\
                        \t\t\t<column name=\"INSERTED_TIMESTAMP\" valueComputed=\"SYSDATE\"/>\r\n\
                        \t\t\t<column name=\"LAST_UPDATED_BY\" value=\"idA\"/>\r\n\
                        \t\t\t<column name=\"LAST_UPDATED_TIMESTAMP\" valueComputed=\"SYSDATE\"/>\r\n\
                        \t\t</insert>";
        assert_eq!(xml, expected);
    }

    #[test]
    fn rollback_deletes_children_before_parents() {
        let tables = vec![insert_table("PARENT", 1), insert_table("CHILD", 1)];

        let xml = insert_rollback_xml(&tables, "idA");

        let child = xml.find("tableName=\"CHILD\"").unwrap();
        let parent = xml.find("tableName=\"PARENT\"").unwrap();
        assert!(child < parent);
    }

    #[test]
    fn rollback_delete_block_layout() {
        let tables = vec![insert_table("USERS", 1)];

        let xml = insert_rollback_xml(&tables, "db/refdata.xml");
        let expected = "\t\t<rollback>\r\n\
                        \t\t\t<delete schemaName=\"${schema}\" tableName=\"USERS\">\r\n\
                        \t\t\t\t<where>INSERTED_BY=:value</where>\r\n\
                        \t\t\t\t<whereParams>\r\n\
                        \t\t\t\t\t<param value=\"db/refdata.xml\"/>\r\n\
                        \t\t\t\t</whereParams>\r\n\
                        \t\t\t</delete>\r\n\
                        \t\t</rollback>";
        assert_eq!(xml, expected);
    }

    #[test]
    fn rollback_skips_rowless_tables() {
        let tables = vec![insert_table("EMPTY", 0), insert_table("FULL", 1)];

        let xml = insert_rollback_xml(&tables, "idA");

        assert!(!xml.contains("EMPTY"));
        assert!(xml.contains("FULL"));
    }

    #[test]
    fn non_insert_tables_never_count_as_having_rows() {
        let mut table = DatabaseTable::new(DmlVariant::Update);
        if let DmlKind::Update { values_to_update, .. } = &mut table.operation.kind {
            values_to_update.add_row();
        }
        assert!(!insert_table_has_rows(&table));
    }
}
