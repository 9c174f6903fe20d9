//! Schema-less records and document-key rules.

use serde_json::Value;

use crate::error::RegistryError;

/// A record is a JSON object; the engine never looks inside it, only this
/// layer does (to extract the document key). `preserve_order` on
/// `serde_json` keeps field order stable across round trips.
pub type Record = serde_json::Map<String, Value>;

/// Name of the field holding the ordering key.
pub const DOCUMENT_FIELD: &str = "document";

/// Smallest accepted document number.
pub const MIN_DOCUMENT: i64 = 0;

/// Largest accepted document number (six digits).
pub const MAX_DOCUMENT: i64 = 999_999;

/// Extracts and validates the document key of a record.
///
/// The field may be an integral JSON number or a numeric string; either
/// way the value must fall in `0..=999999`.
///
/// # Examples
///
/// ```
/// use registry_core::document_of;
/// use serde_json::json;
///
/// let record = json!({ "document": "101", "name": "Ana" });
/// assert_eq!(document_of(record.as_object().unwrap()), Ok(101));
/// ```
pub fn document_of(record: &Record) -> Result<i64, RegistryError> {
    let raw = record
        .get(DOCUMENT_FIELD)
        .ok_or(RegistryError::MissingDocument)?;
    let document = coerce_document(raw)?;
    validate_document(document)
}

/// Converts an externally supplied string key to a document number,
/// applying the same range rule as [`document_of`].
pub fn parse_document(raw: &str) -> Result<i64, RegistryError> {
    let document = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| RegistryError::InvalidDocument(raw.to_string()))?;
    validate_document(document)
}

fn coerce_document(raw: &Value) -> Result<i64, RegistryError> {
    match raw {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| RegistryError::InvalidDocument(n.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| RegistryError::InvalidDocument(s.clone())),
        other => Err(RegistryError::InvalidDocument(other.to_string())),
    }
}

fn validate_document(document: i64) -> Result<i64, RegistryError> {
    if !(MIN_DOCUMENT..=MAX_DOCUMENT).contains(&document) {
        return Err(RegistryError::DocumentOutOfRange(document));
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn accepts_integer_and_numeric_string() {
        assert_eq!(document_of(&record(json!({ "document": 101 }))), Ok(101));
        assert_eq!(document_of(&record(json!({ "document": "101" }))), Ok(101));
        assert_eq!(document_of(&record(json!({ "document": " 7 " }))), Ok(7));
    }

    #[test]
    fn rejects_missing_field() {
        assert_eq!(
            document_of(&record(json!({ "name": "Ana" }))),
            Err(RegistryError::MissingDocument)
        );
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert!(matches!(
            document_of(&record(json!({ "document": "abc" }))),
            Err(RegistryError::InvalidDocument(_))
        ));
        assert!(matches!(
            document_of(&record(json!({ "document": 1.5 }))),
            Err(RegistryError::InvalidDocument(_))
        ));
        assert!(matches!(
            document_of(&record(json!({ "document": [1] }))),
            Err(RegistryError::InvalidDocument(_))
        ));
    }

    #[test]
    fn enforces_six_digit_range() {
        assert_eq!(document_of(&record(json!({ "document": 0 }))), Ok(0));
        assert_eq!(
            document_of(&record(json!({ "document": 999_999 }))),
            Ok(999_999)
        );
        assert_eq!(
            document_of(&record(json!({ "document": 1_000_000 }))),
            Err(RegistryError::DocumentOutOfRange(1_000_000))
        );
        assert_eq!(
            document_of(&record(json!({ "document": -1 }))),
            Err(RegistryError::DocumentOutOfRange(-1))
        );
    }

    #[test]
    fn parse_document_mirrors_the_field_rules() {
        assert_eq!(parse_document("123"), Ok(123));
        assert_eq!(
            parse_document("12x"),
            Err(RegistryError::InvalidDocument("12x".to_string()))
        );
        assert_eq!(
            parse_document("9999999"),
            Err(RegistryError::DocumentOutOfRange(9_999_999))
        );
    }
}
