//! Change-set id and label derivation.

/// Literal placeholder shown instead of a blank logical file path in
/// on-screen change-set titles.
pub const LOGICAL_FILE_PATH_PLACEHOLDER: &str = "LOGICAL_FILE_PATH";

/// Letter label for a change-set's position in the changelog. `None` is
/// the single-change-set case and yields no label. Positions 0..26 map to
/// "A".."Z"; beyond that the label grows spreadsheet-style ("AA", "AB",
/// ...) so ids stay collision-free past 26 change-sets.
pub fn change_set_label(order: Option<usize>) -> String {
    let Some(order) = order else {
        return String::new();
    };

    let mut label = String::new();
    let mut remaining = order;
    loop {
        label.insert(0, (b'A' + (remaining % 26) as u8) as char);
        if remaining < 26 {
            break;
        }
        remaining = remaining / 26 - 1;
    }
    label
}

/// The rendered `changeSet id` attribute value: the trimmed logical file
/// path plus the letter label. A blank path yields a blank id in the XML;
/// the on-screen fallback in [`display_change_set_id`] does not apply
/// here.
pub fn change_set_id(logical_file_path: &str, order: Option<usize>) -> String {
    let trimmed = logical_file_path.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("{trimmed}{}", change_set_label(order))
}

/// On-screen variant of [`change_set_id`]: a blank path falls back to
/// [`LOGICAL_FILE_PATH_PLACEHOLDER`]. The XML id and the displayed id
/// diverge for blank paths; both behaviors are kept distinct.
pub fn display_change_set_id(logical_file_path: &str, order: Option<usize>) -> String {
    let trimmed = logical_file_path.trim();
    let path = if trimmed.is_empty() {
        LOGICAL_FILE_PATH_PLACEHOLDER
    } else {
        trimmed
    };
    format!("{path}{}", change_set_label(order))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_change_set_has_no_label() {
        assert_eq!(change_set_label(None), "");
    }

    #[test]
    fn positions_map_to_uppercase_letters() {
        assert_eq!(change_set_label(Some(0)), "A");
        assert_eq!(change_set_label(Some(1)), "B");
        assert_eq!(change_set_label(Some(25)), "Z");
    }

    #[test]
    fn labels_grow_past_the_alphabet() {
        assert_eq!(change_set_label(Some(26)), "AA");
        assert_eq!(change_set_label(Some(27)), "AB");
        assert_eq!(change_set_label(Some(51)), "AZ");
        assert_eq!(change_set_label(Some(52)), "BA");
    }

    #[test]
    fn change_set_id_appends_the_label_to_the_trimmed_path() {
        assert_eq!(change_set_id(" db/refdata.xml ", Some(1)), "db/refdata.xmlB");
        assert_eq!(change_set_id("db/refdata.xml", None), "db/refdata.xml");
    }

    #[test]
    fn blank_path_renders_a_blank_xml_id() {
        assert_eq!(change_set_id("", Some(0)), "");
        assert_eq!(change_set_id("   ", None), "");
    }

    #[test]
    fn display_id_falls_back_to_the_placeholder() {
        assert_eq!(display_change_set_id("", Some(0)), "LOGICAL_FILE_PATHA");
        assert_eq!(display_change_set_id("  ", None), "LOGICAL_FILE_PATH");
        assert_eq!(display_change_set_id("db/x", Some(0)), "db/xA");
    }
}
