//! Transport-safe result values.
//!
//! Every value handed back to an MCP client is a [`FieldValue`]. Anything the
//! driver produces outside this closed set is turned into text before it
//! leaves the database layer.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt::Display;

/// A normalized column value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Canonical fallback for values outside the closed set.
    pub fn stringify(value: impl Display) -> Self {
        Self::Text(value.to_string())
    }

    /// Unsigned values above `i64::MAX` keep their exact digits as text.
    pub fn from_unsigned(value: u64) -> Self {
        i64::try_from(value)
            .map(Self::Integer)
            .unwrap_or_else(|_| Self::stringify(value))
    }

    /// JSON has no representation for NaN or infinity, so those become text.
    pub fn from_float(value: f64) -> Self {
        if value.is_finite() {
            Self::Float(value)
        } else {
            Self::stringify(value)
        }
    }

    /// Binary data is returned as UTF-8 text when valid, base64 otherwise.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        use base64::{Engine as _, engine::general_purpose::STANDARD};

        match std::str::from_utf8(bytes) {
            Ok(s) => Self::Text(s.to_string()),
            Err(_) => Self::Text(STANDARD.encode(bytes)),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

/// One result row as an ordered column-name to value mapping.
///
/// Serializes as a JSON object whose keys follow the column order of the
/// result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// The payload returned in place of rows when a lookup fails.
    pub fn error(message: impl Into<String>) -> Self {
        let mut record = Self::with_capacity(1);
        record.insert("error", FieldValue::Text(message.into()));
        record
    }

    /// Insert a field, replacing an earlier value for the same column in place.
    pub fn insert(&mut self, column: impl Into<String>, value: FieldValue) {
        let column = column.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_serializes_as_plain_json() {
        let values = vec![
            FieldValue::Null,
            FieldValue::Bool(true),
            FieldValue::Integer(-7),
            FieldValue::Float(2.5),
            FieldValue::Text("hi".into()),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,true,-7,2.5,"hi"]"#);
    }

    #[test]
    fn test_from_unsigned_within_range() {
        assert_eq!(FieldValue::from_unsigned(42), FieldValue::Integer(42));
        assert_eq!(
            FieldValue::from_unsigned(i64::MAX as u64),
            FieldValue::Integer(i64::MAX)
        );
    }

    #[test]
    fn test_from_unsigned_overflow_becomes_text() {
        assert_eq!(
            FieldValue::from_unsigned(u64::MAX),
            FieldValue::Text("18446744073709551615".into())
        );
    }

    #[test]
    fn test_from_float_non_finite_becomes_text() {
        assert_eq!(FieldValue::from_float(1.25), FieldValue::Float(1.25));
        assert_eq!(FieldValue::from_float(f64::NAN), FieldValue::Text("NaN".into()));
        assert_eq!(
            FieldValue::from_float(f64::INFINITY),
            FieldValue::Text("inf".into())
        );
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(
            FieldValue::from_bytes(b"hello world"),
            FieldValue::Text("hello world".into())
        );
        assert_eq!(
            FieldValue::from_bytes(&[0xFF, 0xFE, 0x00, 0x01]),
            FieldValue::Text("//4AAQ==".into())
        );
        assert_eq!(FieldValue::from_bytes(&[]), FieldValue::Text(String::new()));
    }

    #[test]
    fn test_stringify_uses_display() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(FieldValue::stringify(date), FieldValue::Text("2024-03-09".into()));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some("x")), FieldValue::Text("x".into()));
    }

    #[test]
    fn test_record_preserves_column_order() {
        let record: Record = [
            ("id", FieldValue::Integer(1)),
            ("name", FieldValue::from("Ada")),
            ("active", FieldValue::Bool(true)),
            ("email", FieldValue::Null),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":1,"name":"Ada","active":true,"email":null}"#);
        assert_eq!(
            record.columns().collect::<Vec<_>>(),
            vec!["id", "name", "active", "email"]
        );
    }

    #[test]
    fn test_record_insert_replaces_duplicate_column() {
        let mut record = Record::new();
        record.insert("name", FieldValue::from("first"));
        record.insert("name", FieldValue::from("second"));
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("name"), Some(&FieldValue::from("second")));
    }

    #[test]
    fn test_error_record() {
        let record = Record::error("Failed to fetch customer data: boom");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "error": "Failed to fetch customer data: boom" })
        );
    }
}
