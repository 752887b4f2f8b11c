//! `<databaseChangeLog>` document assembly.

use crate::change_set::change_sets_xml;
use crate::characters::{new_line, tab};
use lcgen_core::ChangeLog;

/// Renders the complete changelog document: the fixed namespace/schema
/// preamble (constant across all documents), the trimmed logical file
/// path attribute, and the change-set blocks.
///
/// Total and infallible over any model the edit operations can produce;
/// re-running it on the same snapshot yields the same text.
pub fn serialize(change_log: &ChangeLog) -> String {
    let opening_tag = [
        "<databaseChangeLog".to_string(),
        format!(r#"{}xmlns="http://www.liquibase.org/xml/ns/dbchangelog""#, tab(1)),
        format!(r#"{}xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#, tab(1)),
        format!(r#"{}xmlns:ext="http://www.liquibase.org/xml/ns/dbchangelog-ext""#, tab(1)),
        format!(r#"{}xmlns:pro="http://www.liquibase.org/xml/ns/pro""#, tab(1)),
        format!(r#"{}xsi:schemaLocation="http://www.liquibase.org/xml/ns/dbchangelog"#, tab(1)),
        format!("{}http://www.liquibase.org/xml/ns/dbchangelog/dbchangelog-latest.xsd", tab(2)),
        format!("{}http://www.liquibase.org/xml/ns/dbchangelog-ext", tab(2)),
        format!("{}http://www.liquibase.org/xml/ns/dbchangelog/dbchangelog-ext.xsd", tab(2)),
        format!("{}http://www.liquibase.org/xml/ns/pro", tab(2)),
        format!(r#"{}http://www.liquibase.org/xml/ns/pro/liquibase-pro-latest.xsd""#, tab(2)),
        format!(
            r#"{}logicalFilePath="{}">"#,
            tab(1),
            change_log.metadata.logical_file_path.trim()
        ),
    ]
    .join(&new_line(1));
    let body = change_sets_xml(change_log);
    let closing_tag = "</databaseChangeLog>".to_string();

    [opening_tag, body, closing_tag].join(&new_line(1))
}
