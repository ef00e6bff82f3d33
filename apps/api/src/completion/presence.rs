use crate::models::profile::{DateValue, Measurement};

/// A profile value as read through a field accessor, tagged with the shape
/// that decides its emptiness rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(Option<&'a str>),
    Number(Option<f64>),
    Date(Option<&'a DateValue>),
    /// Element count of a collection, `None` when the collection is absent.
    Collection(Option<usize>),
    Measurement(Option<&'a Measurement>),
}

/// Decides whether a single field counts towards completion.
///
/// - Text: present and not the empty string (no trimming).
/// - Number: present. `0` is a real answer.
/// - Date: present and not the empty string, whether or not it parsed.
/// - Collection: present with at least one element.
/// - Measurement: its `value` is present. A unit on its own does not count.
pub fn is_complete(value: &FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(text) => text.is_some_and(|s| !s.is_empty()),
        FieldValue::Number(n) => n.is_some(),
        FieldValue::Date(d) => d.is_some_and(|d| !d.is_empty()),
        FieldValue::Collection(len) => len.is_some_and(|n| n > 0),
        FieldValue::Measurement(m) => m.is_some_and(|m| m.value.is_some()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_rules() {
        assert!(is_complete(&FieldValue::Text(Some("Striker"))));
        assert!(is_complete(&FieldValue::Text(Some(" "))));
        assert!(!is_complete(&FieldValue::Text(Some(""))));
        assert!(!is_complete(&FieldValue::Text(None)));
    }

    #[test]
    fn test_zero_is_a_number() {
        assert!(is_complete(&FieldValue::Number(Some(0.0))));
        assert!(!is_complete(&FieldValue::Number(None)));
    }

    #[test]
    fn test_date_presence() {
        let parsed = DateValue::Parsed(chrono::NaiveDate::from_ymd_opt(1999, 12, 31).unwrap());
        let unparsed = DateValue::Raw("31 Dec 1999".to_string());
        let blank = DateValue::Raw(String::new());
        assert!(is_complete(&FieldValue::Date(Some(&parsed))));
        assert!(is_complete(&FieldValue::Date(Some(&unparsed))));
        assert!(!is_complete(&FieldValue::Date(Some(&blank))));
        assert!(!is_complete(&FieldValue::Date(None)));
    }

    #[test]
    fn test_empty_collection_is_missing() {
        assert!(is_complete(&FieldValue::Collection(Some(2))));
        assert!(!is_complete(&FieldValue::Collection(Some(0))));
        assert!(!is_complete(&FieldValue::Collection(None)));
    }

    #[test]
    fn test_measurement_needs_value() {
        let unit_only = Measurement {
            value: None,
            unit: Some("cm".to_string()),
        };
        let zero = Measurement {
            value: Some(0.0),
            unit: None,
        };
        assert!(!is_complete(&FieldValue::Measurement(Some(&unit_only))));
        assert!(is_complete(&FieldValue::Measurement(Some(&zero))));
        assert!(!is_complete(&FieldValue::Measurement(None)));
    }
}
