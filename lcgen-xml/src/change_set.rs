//! `<changeSet>` block generation.

use crate::characters::{new_line, tab};
use crate::insert::{insert_rollback_xml, insert_xml};
use lcgen_core::{change_set_id, ChangeLog, ChangeSet, DatabaseTable, DmlKind, DmlVariant};

/// Renders every change-set of the changelog, separated by blank lines.
/// A changelog with exactly one change-set renders it unlabeled; with
/// more, labels run from "A" in declaration order.
pub(crate) fn change_sets_xml(change_log: &ChangeLog) -> String {
    let has_one_change_set = change_log.change_sets.len() == 1;

    change_log
        .change_sets
        .iter()
        .enumerate()
        .map(|(index, change_set)| {
            let order = if has_one_change_set { None } else { Some(index) };
            let id = change_set_id(&change_log.metadata.logical_file_path, order);
            change_set_xml(change_set, &id, &change_log.metadata.author)
        })
        .collect::<Vec<_>>()
        .join(&new_line(2))
}

/// One `<changeSet>` block. The `<comment>` element always renders,
/// possibly empty; the operation body and the rollback are appended only
/// when at least one table produced output, so change-sets without data
/// stay free of empty whitespace blocks.
fn change_set_xml(change_set: &ChangeSet, change_set_id: &str, author: &str) -> String {
    let author = author.trim();
    let comment = change_set.comment.as_deref().unwrap_or_default().trim();
    let dml_values = dml_xml(&change_set.tables, change_set_id);

    let opening_tag =
        format!(r#"<changeSet id="{change_set_id}" author="{author}" context="refData">"#);
    let mut body = vec![format!("<comment>{comment}</comment>")];
    let closing_tag = "</changeSet>";

    if !dml_values.is_empty() {
        body.push(dml_values);
        body.push(rollback_xml(
            change_set.table_operation_variant,
            &change_set.tables,
            change_set_id,
        ));
    }

    [
        format!("{}{}", tab(1), opening_tag),
        format!("{}{}", tab(2), body.join(&new_line(2))),
        format!("{}{}", tab(1), closing_tag),
    ]
    .join(&new_line(1))
}

/// Forward operation bodies for one change-set's tables, in declaration
/// order. Update and Delete are reserved kinds with no body generation
/// yet; their tables contribute nothing.
fn dml_xml(tables: &[DatabaseTable], change_set_id: &str) -> String {
    let mut dml_blocks: Vec<String> = Vec::new();

    for table in tables {
        match &table.operation.kind {
            DmlKind::Insert { values_to_insert } => {
                if values_to_insert.has_rows() {
                    dml_blocks.push(insert_xml(
                        table.operation.audit_field_variant,
                        values_to_insert,
                        &table.name,
                        change_set_id,
                    ));
                }
            }
            DmlKind::Update { .. } => {}
            DmlKind::Delete { .. } => {}
        }
    }

    dml_blocks.join(&new_line(2))
}

/// Rollback dispatch on the change-set's shared operation kind.
fn rollback_xml(variant: DmlVariant, tables: &[DatabaseTable], change_set_id: &str) -> String {
    match variant {
        DmlVariant::Insert => insert_rollback_xml(tables, change_set_id),
        DmlVariant::Update => String::new(),
        DmlVariant::Delete => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change_log_with(change_sets: Vec<ChangeSet>) -> ChangeLog {
        let mut change_log = ChangeLog::new();
        change_log.metadata.author = "jdoe".to_string();
        change_log.metadata.logical_file_path = "db/refdata.xml".to_string();
        change_log.change_sets = change_sets;
        change_log
    }

    fn populated_change_set(table_name: &str) -> ChangeSet {
        let mut change_set = ChangeSet::new(DmlVariant::Insert);
        let table_id = change_set.add_table();
        let table = change_set
            .tables
            .iter_mut()
            .find(|table| table.id == table_id)
            .unwrap();
        table.name = table_name.to_string();
        if let DmlKind::Insert { values_to_insert } = &mut table.operation.kind {
            values_to_insert.add_column();
            values_to_insert.add_row();
        }
        change_set
    }

    #[test]
    fn empty_change_set_renders_only_the_comment() {
        let change_log = change_log_with(vec![ChangeSet::new(DmlVariant::Insert)]);

        let xml = change_sets_xml(&change_log);
        let expected = "\t<changeSet id=\"db/refdata.xml\" author=\"jdoe\" context=\"refData\">\r\n\
                        \t\t<comment></comment>\r\n\
                        \t</changeSet>";
        assert_eq!(xml, expected);
    }

    #[test]
    fn populated_change_set_appends_body_and_rollback() {
        let change_log = change_log_with(vec![populated_change_set("USERS")]);

        let xml = change_sets_xml(&change_log);

        assert!(xml.contains("<comment></comment>\r\n\r\n\t\t<insert"));
        assert!(xml.contains("</insert>\r\n\r\n\t\t<rollback>"));
    }

    #[test]
    fn rowless_tables_contribute_no_insert_block() {
        let mut change_set = ChangeSet::new(DmlVariant::Insert);
        let empty_id = change_set.add_table();
        let empty = change_set
            .tables
            .iter_mut()
            .find(|table| table.id == empty_id)
            .unwrap();
        empty.name = "EMPTY".to_string();
        if let DmlKind::Insert { values_to_insert } = &mut empty.operation.kind {
            // Columns alone are not enough; only rows produce output.
            values_to_insert.add_column();
        }
        let mut change_log = change_log_with(vec![change_set]);
        change_log.change_sets[0]
            .tables
            .push(populated_change_set("USERS").tables.remove(0));

        let xml = change_sets_xml(&change_log);

        assert!(!xml.contains("tableName=\"EMPTY\""));
        assert_eq!(xml.matches("<insert").count(), 1);
        assert_eq!(xml.matches("<delete").count(), 1);
    }

    #[test]
    fn single_change_set_id_has_no_letter_suffix() {
        let change_log = change_log_with(vec![populated_change_set("USERS")]);

        let xml = change_sets_xml(&change_log);

        assert!(xml.contains(r#"<changeSet id="db/refdata.xml" author="jdoe""#));
    }

    #[test]
    fn multiple_change_sets_are_labeled_from_a() {
        let change_log = change_log_with(vec![
            populated_change_set("USERS"),
            populated_change_set("ROLES"),
        ]);

        let xml = change_sets_xml(&change_log);

        assert!(xml.contains(r#"<changeSet id="db/refdata.xmlA""#));
        assert!(xml.contains(r#"<changeSet id="db/refdata.xmlB""#));
        // Blocks are separated by a blank line.
        assert!(xml.contains("</changeSet>\r\n\r\n\t<changeSet"));
    }

    #[test]
    fn audit_stamps_use_the_labeled_change_set_id() {
        let change_log = change_log_with(vec![
            populated_change_set("USERS"),
            populated_change_set("ROLES"),
        ]);

        let xml = change_sets_xml(&change_log);

        assert!(xml.contains(r#"<column name="INSERTED_BY" value="db/refdata.xmlA"/>"#));
        assert!(xml.contains(r#"<param value="db/refdata.xmlB"/>"#));
    }

    #[test]
    fn author_and_comment_are_trimmed() {
        let mut change_set = ChangeSet::new(DmlVariant::Insert);
        change_set.comment = Some("  seed data  ".to_string());
        let mut change_log = change_log_with(vec![change_set]);
        change_log.metadata.author = "  jdoe  ".to_string();

        let xml = change_sets_xml(&change_log);

        assert!(xml.contains(r#"author="jdoe""#));
        assert!(xml.contains("<comment>seed data</comment>"));
    }

    #[test]
    fn update_change_sets_render_no_operation_body() {
        let mut change_set = ChangeSet::new(DmlVariant::Update);
        let table_id = change_set.add_table();
        let table = change_set
            .tables
            .iter_mut()
            .find(|table| table.id == table_id)
            .unwrap();
        if let DmlKind::Update { values_to_update, .. } = &mut table.operation.kind {
            values_to_update.add_row();
        }
        let change_log = change_log_with(vec![change_set]);

        let xml = change_sets_xml(&change_log);

        assert!(!xml.contains("<insert"));
        assert!(!xml.contains("<rollback>"));
        assert!(xml.contains("<comment></comment>"));
    }
}
