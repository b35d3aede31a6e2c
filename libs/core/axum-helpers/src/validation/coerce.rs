//! Loose value coercion used by the field rules.
//!
//! JSON values are compared in their string form: absent and `null` become `""`,
//! numbers and booleans their textual form.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").expect("numeric pattern"));

static INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?(0|[1-9][0-9]*)$").expect("int pattern"));

pub(super) fn is_numeric(value: &str) -> bool {
    NUMERIC.is_match(value)
}

pub(super) fn is_int(value: &str) -> bool {
    INT.is_match(value)
}

/// String form of a raw field value.
pub fn coerce_to_string(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| coerce_to_string(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// Numeric reading used by [`Check::GreaterThan`](super::Check::GreaterThan).
///
/// Blank strings read as 0, `true`/`false` as 1/0. Absent values, objects,
/// arrays and unparseable strings have no numeric reading.
pub(super) fn loose_number(raw: Option<&Value>) -> Option<f64> {
    match raw? {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_trimmed(s),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn parse_trimmed(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Numeric value of a body field: numbers as-is, numeric strings parsed.
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if is_numeric(s.trim()) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Boolean value of a body field: booleans as-is, `"true"`/`"1"`/`"false"`/`"0"`.
pub fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        other => match coerce_to_string(Some(other)).as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_to_string() {
        assert_eq!(coerce_to_string(None), "");
        assert_eq!(coerce_to_string(Some(&json!(null))), "");
        assert_eq!(coerce_to_string(Some(&json!(50))), "50");
        assert_eq!(coerce_to_string(Some(&json!(true))), "true");
        assert_eq!(coerce_to_string(Some(&json!("Mouse"))), "Mouse");
        assert_eq!(coerce_to_string(Some(&json!([1, "a"]))), "1,a");
        assert_eq!(coerce_to_string(Some(&json!({"a": 1}))), "[object Object]");
    }

    #[test]
    fn test_numeric_pattern() {
        for ok in ["1", "-1", "+1.5", ".5", "0.000"] {
            assert!(is_numeric(ok), "{ok}");
        }
        for bad in ["", "1.", "1e5", "abc", " 1"] {
            assert!(!is_numeric(bad), "{bad}");
        }
    }

    #[test]
    fn test_loose_number() {
        assert_eq!(loose_number(None), None);
        assert_eq!(loose_number(Some(&json!(null))), Some(0.0));
        assert_eq!(loose_number(Some(&json!(true))), Some(1.0));
        assert_eq!(loose_number(Some(&json!(""))), Some(0.0));
        assert_eq!(loose_number(Some(&json!(" 12 "))), Some(12.0));
        assert_eq!(loose_number(Some(&json!("Hello"))), None);
        assert_eq!(loose_number(Some(&json!([5]))), None);
    }

    #[test]
    fn test_coerce_f64_and_bool() {
        assert_eq!(coerce_f64(&json!(50)), Some(50.0));
        assert_eq!(coerce_f64(&json!("7.25")), Some(7.25));
        assert_eq!(coerce_f64(&json!("seven")), None);
        assert_eq!(coerce_f64(&json!(true)), None);

        assert_eq!(coerce_bool(&json!(false)), Some(false));
        assert_eq!(coerce_bool(&json!("1")), Some(true));
        assert_eq!(coerce_bool(&json!(0)), Some(false));
        assert_eq!(coerce_bool(&json!("yes")), None);
    }
}
