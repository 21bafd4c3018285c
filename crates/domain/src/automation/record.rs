//! Raw catalog record as published in the static dataset.

use serde::Deserialize;

/// One entry of the source JSON array, before normalization.
///
/// Every field is optional: missing or `null` values default to empty.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Automation Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Benefit Description", default)]
    pub description: Option<String>,
    /// Comma-separated benefit focuses, e.g. `"Productivity, Cost Savings"`.
    #[serde(rename = "Primary Benefit Focus", default)]
    pub primary_benefit_focus: Option<String>,
    /// Comma-separated tags, e.g. `"Sales & CRM, Finance"`.
    #[serde(rename = "Tags", default)]
    pub tags: Option<String>,
}

/// Split a comma-delimited field into trimmed segments.
///
/// An absent or empty field yields no segments. Blank segments between
/// commas are kept as empty strings.
#[must_use]
pub fn split_list(field: Option<&str>) -> Vec<String> {
    match field {
        Some(value) if !value.is_empty() => {
            value.split(',').map(|s| s.trim().to_string()).collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_known_field_names() {
        let json = r#"{
            "Automation Title": "CRM Bot",
            "Benefit Description": "Keeps leads warm",
            "Primary Benefit Focus": "Sales",
            "Tags": "Sales & CRM"
        }"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title.as_deref(), Some("CRM Bot"));
        assert_eq!(record.description.as_deref(), Some("Keeps leads warm"));
        assert_eq!(record.primary_benefit_focus.as_deref(), Some("Sales"));
        assert_eq!(record.tags.as_deref(), Some("Sales & CRM"));
    }

    #[test]
    fn should_default_missing_and_null_fields_to_none() {
        let json = r#"{"Automation Title": null, "Unrelated": "x"}"#;
        let record: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, RawRecord::default());
    }

    #[test]
    fn should_split_and_trim_segments() {
        assert_eq!(
            split_list(Some(" Sales & CRM ,Finance,  E-commerce")),
            vec!["Sales & CRM", "Finance", "E-commerce"]
        );
    }

    #[test]
    fn should_yield_no_segments_when_field_absent_or_empty() {
        assert!(split_list(None).is_empty());
        assert!(split_list(Some("")).is_empty());
    }

    #[test]
    fn should_keep_blank_segments_between_commas() {
        assert_eq!(split_list(Some("a, ,b")), vec!["a", "", "b"]);
    }
}
