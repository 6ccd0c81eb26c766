//! Lenient readers for data service records.
//!
//! The REST API is not consistent about field casing or id shape: some
//! endpoints answer in snake_case, others in camelCase, and document-store
//! backends return ids as `_id` or `{"_id": {"$oid": ...}}`. Everything here
//! coerces instead of failing; missing or malformed numbers read as zero.

use std::str::FromStr;

use chrono::NaiveDate;
use finsight_core::utils::time_utils::parse_date_prefix;
use rust_decimal::Decimal;
use serde_json::Value;

use crate::errors::DataServiceError;

/// Canonical string id of a record, or an empty string when it has none.
///
/// Accepts a bare string, or an object carrying `id`, `_id` (string or
/// `{"$oid": ...}`) or `pk`. Numeric ids are rendered as strings.
pub fn normalize_id(raw: &Value) -> String {
    match raw {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            if let Some(id) = map.get("id").and_then(scalar_to_string) {
                return id;
            }
            match map.get("_id") {
                Some(Value::String(s)) => return s.clone(),
                Some(Value::Object(oid)) => {
                    if let Some(Value::String(s)) = oid.get("$oid") {
                        return s.clone();
                    }
                }
                _ => {}
            }
            map.get("pk").and_then(scalar_to_string).unwrap_or_default()
        }
        _ => String::new(),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Splits a list response into records. Accepts a bare array or a paginated
/// envelope with `results` or `data`.
pub fn into_records(body: Value) -> Result<Vec<Value>, DataServiceError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            for key in ["results", "data"] {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return Ok(items);
                }
            }
            Err(DataServiceError::Decode(
                "expected a list of records".to_string(),
            ))
        }
        Value::Null => Ok(Vec::new()),
        _ => Err(DataServiceError::Decode(
            "expected a list of records".to_string(),
        )),
    }
}

/// Read-only view over one JSON record.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a>(pub &'a Value);

impl<'a> Record<'a> {
    pub fn id(&self) -> String {
        normalize_id(self.0)
    }

    /// First present, non-null value among `names`.
    fn field(&self, names: &[&str]) -> Option<&'a Value> {
        names
            .iter()
            .filter_map(|name| self.0.get(*name))
            .find(|v| !v.is_null())
    }

    pub fn string(&self, names: &[&str]) -> String {
        match self.field(names) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    pub fn decimal(&self, names: &[&str]) -> Decimal {
        self.field(names).map(to_decimal).unwrap_or(Decimal::ZERO)
    }

    pub fn date(&self, names: &[&str]) -> Option<NaiveDate> {
        match self.field(names) {
            Some(Value::String(s)) => parse_date_prefix(s),
            _ => None,
        }
    }

    pub fn boolean(&self, names: &[&str]) -> bool {
        match self.field(names) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            _ => false,
        }
    }
}

fn to_decimal(value: &Value) -> Decimal {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return Decimal::ZERO,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_normalize_id_shapes() {
        assert_eq!(normalize_id(&json!("abc")), "abc");
        assert_eq!(normalize_id(&json!({"id": "x1"})), "x1");
        assert_eq!(normalize_id(&json!({"id": 42})), "42");
        assert_eq!(normalize_id(&json!({"_id": "m1"})), "m1");
        assert_eq!(
            normalize_id(&json!({"_id": {"$oid": "64f0c2"}})),
            "64f0c2"
        );
        assert_eq!(normalize_id(&json!({"pk": 7})), "7");
        assert_eq!(normalize_id(&json!({"name": "none"})), "");
        assert_eq!(normalize_id(&Value::Null), "");
    }

    #[test]
    fn test_id_prefers_plain_id() {
        let raw = json!({"id": "a", "_id": "b", "pk": "c"});
        assert_eq!(normalize_id(&raw), "a");
    }

    #[test]
    fn test_decimal_coercion() {
        let raw = json!({
            "total_amount": 1500.5,
            "remainingAmount": "250.25",
            "bad": "n/a",
            "sci": 1e3
        });
        let record = Record(&raw);
        assert_eq!(record.decimal(&["total_amount", "totalAmount"]), dec!(1500.5));
        assert_eq!(
            record.decimal(&["remaining_amount", "remainingAmount"]),
            dec!(250.25)
        );
        assert_eq!(record.decimal(&["bad"]), Decimal::ZERO);
        assert_eq!(record.decimal(&["missing"]), Decimal::ZERO);
        assert_eq!(record.decimal(&["sci"]), dec!(1000));
    }

    #[test]
    fn test_date_and_null_fields() {
        let raw = json!({"due_date": null, "dueDate": "2025-04-01T00:00:00Z"});
        let record = Record(&raw);
        assert_eq!(
            record.date(&["due_date", "dueDate"]),
            NaiveDate::from_ymd_opt(2025, 4, 1)
        );
        assert_eq!(record.date(&["target_date"]), None);
    }

    #[test]
    fn test_into_records_envelopes() {
        assert_eq!(into_records(json!([1, 2])).unwrap().len(), 2);
        assert_eq!(into_records(json!({"results": [1]})).unwrap().len(), 1);
        assert!(into_records(Value::Null).unwrap().is_empty());
        assert!(into_records(json!({"detail": "nope"})).is_err());
    }
}
