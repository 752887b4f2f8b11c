//! Column value escaping: how a raw cell value appears in its `<column>`
//! fragment.

use chrono::NaiveDate;

/// The long textual date formats are all exactly eleven characters wide
/// ("05-JAN-2024" and friends), so length is the cheap first filter.
const LONG_DATE_FORMAT_LENGTH: usize = 11;

const LONG_DATE_FORMATS: [&str; 4] = ["%d-%b-%Y", "%d %b %Y", "%b %d %Y", "%Y-%b-%d"];

/// Renders one `<column>` fragment for a named value.
///
/// Priority order matters: id columns are numeric and never CDATA-wrapped
/// (the value may be a sequence expression such as
/// `${schema}.SEQ_NAME.NEXTVAL` rather than a literal number); eleven-char
/// date strings stay plain despite their separators; any other value with
/// special or non-ASCII characters is CDATA-wrapped; the rest render as a
/// plain value attribute.
pub(crate) fn column_xml(column_name: &str, column_value: &str) -> String {
    if is_id_column(column_name) {
        return format!(r#"<column name="{column_name}" valueNumeric="{column_value}"/>"#);
    }

    if is_long_date(column_value) {
        return format!(r#"<column name="{column_name}" value="{column_value}"/>"#);
    }

    if has_special_characters(column_value) || has_non_ascii_characters(column_value) {
        return format!(r#"<column name="{column_name}"><![CDATA[{column_value}]]></column>"#);
    }

    format!(r#"<column name="{column_name}" value="{column_value}"/>"#)
}

/// `id` and `*_id` columns take `valueNumeric`, case-insensitively.
fn is_id_column(column_name: &str) -> bool {
    let lowered = column_name.to_lowercase();
    lowered == "id" || lowered.ends_with("_id")
}

fn is_long_date(value: &str) -> bool {
    value.len() == LONG_DATE_FORMAT_LENGTH
        && LONG_DATE_FORMATS
            .iter()
            .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
}

/// ASCII punctuation and symbol characters, space excluded.
fn has_special_characters(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_punctuation())
}

/// Anything outside printable ASCII: control characters, accented letters
/// (ǎ, ë, ì, ó, û), and so on.
fn has_non_ascii_characters(value: &str) -> bool {
    value.chars().any(|c| !(' '..='~').contains(&c))
}
