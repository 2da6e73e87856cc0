#![forbid(unsafe_code)]

//! JSON fixtures for records and search box configuration.

use seekbox_widgets::record::Record;
use seekbox_widgets::search_box::SearchBoxConfig;

use crate::error::HarnessError;

/// Parse a JSON array of `{"key": .., "value": ..}` objects.
pub fn load_records(json: &str) -> Result<Vec<Record>, HarnessError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a [`SearchBoxConfig`]; missing fields take their defaults.
pub fn load_config(json: &str) -> Result<SearchBoxConfig, HarnessError> {
    Ok(serde_json::from_str(json)?)
}

/// The five-person list used throughout the test suites.
pub fn sample_records() -> Vec<Record> {
    [
        ("john", "John Doe"),
        ("jane", "Jane Doe"),
        ("mary", "Mary Phillips"),
        ("robert", "Robert"),
        ("karius", "Karius"),
    ]
    .into_iter()
    .map(Record::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_parse_in_order() {
        let records = load_records(r#"[{"key":"a","value":"Alpha"},{"key":"b","value":"Beta"}]"#)
            .expect("records");
        assert_eq!(records, vec![Record::new("a", "Alpha"), Record::new("b", "Beta")]);
    }

    #[test]
    fn config_fields_default() {
        let config = load_config(r#"{"placeholder":"Find"}"#).expect("config");
        assert_eq!(config.placeholder, "Find");
        assert!(!config.auto_focus);
        assert!(config.data.is_empty());
        assert_eq!(config.max_visible_items, None);
    }

    #[test]
    fn malformed_json_is_a_fixture_error() {
        let err = load_records(r#"[{"key":"a"}]"#).expect_err("missing value");
        assert!(matches!(err, HarnessError::Fixture(_)));
        assert!(err.to_string().starts_with("failed to parse fixture JSON"));
    }

    #[test]
    fn sample_has_five_people() {
        let labels: Vec<_> = sample_records().into_iter().map(|r| r.value).collect();
        assert_eq!(labels, ["John Doe", "Jane Doe", "Mary Phillips", "Robert", "Karius"]);
    }
}
