//! MySQL column decoding.
//!
//! Type conversion uses a two-phase approach:
//! 1. `categorize_type` classifies the driver type name into a `TypeCategory`
//! 2. A category-specific decoder extracts the value as a [`FieldValue`]
//!
//! Values outside the transport-safe set (decimals, dates, JSON, binary) are
//! stringified. NULL is detected from the raw value before any decoding.
//! Zero dates such as `0000-00-00` have no calendar value and read as NULL.

use crate::error::{ServerError, ServerResult};
use crate::models::{FieldValue, Record};
use sqlx::mysql::types::MySqlTime;
use sqlx::mysql::{MySqlRow, MySqlTypeInfo, MySqlValueRef};
use sqlx::{Column, Decode, MySql, Row, Type, TypeInfo, ValueRef};

// =============================================================================
// Type Classification
// =============================================================================

/// Logical category for MySQL column types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    Null,
    Boolean,
    Integer,
    Unsigned,
    Year,
    Float,
    Decimal,
    Date,
    DateTime,
    Time,
    Binary,
    Json,
    Text,
}

/// Classify a MySQL type name (as reported by sqlx) into a logical category.
pub fn categorize_type(type_name: &str) -> TypeCategory {
    let upper = type_name.to_uppercase();

    // Decimal first, NUMERIC would otherwise read as a float type
    if upper.contains("DECIMAL") || upper.contains("NUMERIC") {
        return TypeCategory::Decimal;
    }

    match upper.as_str() {
        "NULL" => return TypeCategory::Null,
        "BOOL" | "BOOLEAN" => return TypeCategory::Boolean,
        "YEAR" => return TypeCategory::Year,
        "DATE" => return TypeCategory::Date,
        "DATETIME" | "TIMESTAMP" => return TypeCategory::DateTime,
        "TIME" => return TypeCategory::Time,
        "JSON" => return TypeCategory::Json,
        _ => {}
    }

    if upper.contains("INT") || upper.starts_with("BIT") {
        return if upper.contains("UNSIGNED") || upper.starts_with("BIT") {
            TypeCategory::Unsigned
        } else {
            TypeCategory::Integer
        };
    }

    if upper.contains("FLOAT") || upper.contains("DOUBLE") || upper == "REAL" {
        return TypeCategory::Float;
    }

    if upper.contains("BLOB") || upper.contains("BINARY") {
        return TypeCategory::Binary;
    }

    // VARCHAR, CHAR, TEXT, ENUM, SET and anything unrecognized
    TypeCategory::Text
}

// =============================================================================
// Decimal Type Support
// =============================================================================

/// Wrapper type for raw DECIMAL/NUMERIC values as strings.
/// This preserves the exact database representation.
#[derive(Debug)]
pub struct RawDecimal(pub String);

impl Type<MySql> for RawDecimal {
    fn type_info() -> MySqlTypeInfo {
        <String as Type<MySql>>::type_info()
    }

    fn compatible(ty: &MySqlTypeInfo) -> bool {
        let name = ty.name().to_uppercase();
        name.contains("DECIMAL") || name.contains("NUMERIC")
    }
}

impl<'r> Decode<'r, MySql> for RawDecimal {
    fn decode(value: MySqlValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as Decode<MySql>>::decode(value)?;
        Ok(RawDecimal(s.to_string()))
    }
}

// =============================================================================
// Row to Record
// =============================================================================

/// Trait for converting database rows to normalized records.
pub trait RowToRecord {
    fn to_record(&self) -> ServerResult<Record>;
}

impl RowToRecord for MySqlRow {
    fn to_record(&self) -> ServerResult<Record> {
        let mut record = Record::with_capacity(self.columns().len());
        for (idx, col) in self.columns().iter().enumerate() {
            let value = decode_column(self, idx, col.name(), col.type_info().name())?;
            record.insert(col.name(), value);
        }
        Ok(record)
    }
}

/// Decode a single column into a transport-safe value.
pub fn decode_column(
    row: &MySqlRow,
    idx: usize,
    column: &str,
    type_name: &str,
) -> ServerResult<FieldValue> {
    let raw = row
        .try_get_raw(idx)
        .map_err(|e| ServerError::decode(column, e.to_string()))?;
    if raw.is_null() {
        return Ok(FieldValue::Null);
    }

    let decoded = match categorize_type(type_name) {
        TypeCategory::Null => Some(FieldValue::Null),
        // BOOLEAN is how the driver names any TINYINT(1), which can hold -128..=127
        TypeCategory::Boolean => decode_integer(row, idx).or_else(|| decode_unsigned(row, idx)),
        TypeCategory::Integer => decode_integer(row, idx),
        TypeCategory::Unsigned => decode_unsigned(row, idx),
        TypeCategory::Year => decode_year(row, idx),
        TypeCategory::Float => decode_float(row, idx),
        TypeCategory::Decimal => try_decode::<RawDecimal>(row, idx).map(|v| FieldValue::Text(v.0)),
        TypeCategory::Date => Some(
            try_decode::<chrono::NaiveDate>(row, idx)
                .map_or(FieldValue::Null, FieldValue::stringify),
        ),
        TypeCategory::DateTime => Some(
            try_decode::<chrono::NaiveDateTime>(row, idx)
                .map_or(FieldValue::Null, FieldValue::stringify),
        ),
        // MySQL TIME spans -838:59:59..=838:59:59, wider than a time of day
        TypeCategory::Time => try_decode::<MySqlTime>(row, idx).map(FieldValue::stringify),
        TypeCategory::Binary => decode_binary(row, idx),
        TypeCategory::Json => try_decode::<serde_json::Value>(row, idx).map(FieldValue::stringify),
        TypeCategory::Text => None,
    };

    match decoded {
        Some(value) => Ok(value),
        None => decode_text(row, idx, column),
    }
}

fn try_decode<'r, T>(row: &'r MySqlRow, idx: usize) -> Option<T>
where
    T: Decode<'r, MySql> + Type<MySql>,
{
    row.try_get::<T, _>(idx).ok()
}

fn decode_integer(row: &MySqlRow, idx: usize) -> Option<FieldValue> {
    try_decode::<i64>(row, idx).map(FieldValue::Integer)
}

fn decode_unsigned(row: &MySqlRow, idx: usize) -> Option<FieldValue> {
    try_decode::<u64>(row, idx)
        .map(FieldValue::from_unsigned)
        .or_else(|| try_decode::<u16>(row, idx).map(|v| FieldValue::Integer(v.into())))
}

fn decode_year(row: &MySqlRow, idx: usize) -> Option<FieldValue> {
    decode_unsigned(row, idx)
        .or_else(|| decode_integer(row, idx))
        .or_else(|| {
            row.try_get_unchecked::<u16, _>(idx)
                .ok()
                .map(|v| FieldValue::Integer(v.into()))
        })
}

fn decode_float(row: &MySqlRow, idx: usize) -> Option<FieldValue> {
    try_decode::<f64>(row, idx)
        .or_else(|| try_decode::<f32>(row, idx).map(f64::from))
        .map(FieldValue::from_float)
}

fn decode_binary(row: &MySqlRow, idx: usize) -> Option<FieldValue> {
    try_decode::<Vec<u8>>(row, idx).map(|v| FieldValue::from_bytes(&v))
}

/// Canonical fallback: text if the driver can read it as a string, bytes otherwise.
fn decode_text(row: &MySqlRow, idx: usize, column: &str) -> ServerResult<FieldValue> {
    if let Some(v) = try_decode::<String>(row, idx) {
        return Ok(FieldValue::Text(v));
    }
    row.try_get::<Vec<u8>, _>(idx)
        .map(|v| FieldValue::from_bytes(&v))
        .map_err(|e| ServerError::decode(column, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_integer_types() {
        for name in ["TINYINT", "SMALLINT", "MEDIUMINT", "INT", "BIGINT"] {
            assert_eq!(categorize_type(name), TypeCategory::Integer, "{name}");
        }
    }

    #[test]
    fn test_categorize_unsigned_types() {
        assert_eq!(categorize_type("INT UNSIGNED"), TypeCategory::Unsigned);
        assert_eq!(categorize_type("BIGINT UNSIGNED"), TypeCategory::Unsigned);
        assert_eq!(categorize_type("BIT"), TypeCategory::Unsigned);
    }

    #[test]
    fn test_categorize_decimal_before_float() {
        assert_eq!(categorize_type("DECIMAL"), TypeCategory::Decimal);
        assert_eq!(categorize_type("NUMERIC"), TypeCategory::Decimal);
        assert_eq!(categorize_type("FLOAT"), TypeCategory::Float);
        assert_eq!(categorize_type("DOUBLE"), TypeCategory::Float);
    }

    #[test]
    fn test_categorize_temporal_types() {
        assert_eq!(categorize_type("DATE"), TypeCategory::Date);
        assert_eq!(categorize_type("DATETIME"), TypeCategory::DateTime);
        assert_eq!(categorize_type("TIMESTAMP"), TypeCategory::DateTime);
        assert_eq!(categorize_type("TIME"), TypeCategory::Time);
        assert_eq!(categorize_type("YEAR"), TypeCategory::Year);
    }

    #[test]
    fn test_categorize_binary_and_json() {
        assert_eq!(categorize_type("BLOB"), TypeCategory::Binary);
        assert_eq!(categorize_type("VARBINARY"), TypeCategory::Binary);
        assert_eq!(categorize_type("BINARY"), TypeCategory::Binary);
        assert_eq!(categorize_type("JSON"), TypeCategory::Json);
    }

    #[test]
    fn test_categorize_text_and_unknown() {
        assert_eq!(categorize_type("VARCHAR"), TypeCategory::Text);
        assert_eq!(categorize_type("TEXT"), TypeCategory::Text);
        assert_eq!(categorize_type("ENUM"), TypeCategory::Text);
        assert_eq!(categorize_type("GEOMETRY"), TypeCategory::Text);
    }

    #[test]
    fn test_categorize_tinyint_one_as_boolean() {
        // The driver reports TINYINT(1) columns under this name
        assert_eq!(categorize_type("BOOLEAN"), TypeCategory::Boolean);
    }

    #[test]
    fn test_time_beyond_one_day_is_text() {
        use sqlx::mysql::types::MySqlTimeSign;

        let over_a_day = MySqlTime::new(MySqlTimeSign::Positive, 25, 0, 0, 0).unwrap();
        assert_eq!(
            FieldValue::stringify(over_a_day),
            FieldValue::from("25:00:00")
        );

        let negative = MySqlTime::new(MySqlTimeSign::Negative, 1, 0, 0, 0).unwrap();
        assert_eq!(FieldValue::stringify(negative), FieldValue::from("-1:00:00"));
    }

    #[test]
    fn test_categorize_is_case_insensitive() {
        assert_eq!(categorize_type("boolean"), TypeCategory::Boolean);
        assert_eq!(categorize_type("bigint unsigned"), TypeCategory::Unsigned);
    }
}
