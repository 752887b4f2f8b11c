//! Audit-field XML generation.

use crate::characters::{new_line, tab};
use lcgen_core::AuditFieldVariant;

/// The four audit columns appended inside every `<insert>` block. The
/// by-columns are stamped with the change-set id (which is what the
/// rollback's delete later matches on); the timestamp columns are computed
/// by the database.
pub(crate) fn audit_fields_xml(variant: AuditFieldVariant, change_set_id: &str) -> String {
    let names = variant.names();

    [
        format!(
            r#"{}<column name="{}" value="{}"/>"#,
            tab(3),
            names.inserted_by,
            change_set_id
        ),
        format!(
            r#"{}<column name="{}" valueComputed="SYSDATE"/>"#,
            tab(3),
            names.inserted_timestamp
        ),
        format!(
            r#"{}<column name="{}" value="{}"/>"#,
            tab(3),
            names.last_updated_by,
            change_set_id
        ),
        format!(
            r#"{}<column name="{}" valueComputed="SYSDATE"/>"#,
            tab(3),
            names.last_updated_timestamp
        ),
    ]
    .join(&new_line(1))
}
