//! Field-level request validation.
//!
//! A route declares an ordered slice of [`FieldRule`]s. Every rule runs against the
//! raw request input (path params + JSON body) with no bail-out, and each failing
//! rule contributes exactly one [`FieldViolation`]. The
//! [`Validated`](crate::extractors::Validated) extractor turns a non-empty
//! violation list into a `400 { "errors": [...] }` response before the handler runs.
//!
//! ```rust
//! use axum_helpers::validation::{Check, FieldRule, RequestInput, run};
//! use serde_json::json;
//!
//! const RULES: &[FieldRule] = &[
//!     FieldRule::body("name", Check::NotEmpty).with_message("EMPTY_NAME", "name is required"),
//! ];
//!
//! let input = RequestInput::from_body(json!({}));
//! let violations = run(RULES, &input);
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].code, "EMPTY_NAME");
//! ```

mod coerce;

pub use coerce::{coerce_bool, coerce_f64, coerce_to_string};

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Where a validated field lives in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// A single predicate applied to the coerced field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    /// Coerced string is not empty.
    NotEmpty,
    /// JSON numbers pass; anything else must coerce to a plain decimal
    /// (`12`, `-3.5`, `.5`).
    Numeric,
    /// Coerced string is one of `true`, `false`, `1`, `0`.
    Boolean,
    /// Coerced string is a decimal integer that fits an `i32` key.
    Int,
    /// Coerced string has at most this many characters.
    MaxLength(usize),
    /// Loose numeric comparison against the raw value: strings are parsed,
    /// `true` counts as 1, anything else fails.
    GreaterThan(f64),
}

impl Check {
    fn passes(&self, raw: Option<&Value>) -> bool {
        match *self {
            Check::NotEmpty => !coerce_to_string(raw).is_empty(),
            // Large floats render in exponent form, which the pattern rejects.
            Check::Numeric => match raw {
                Some(Value::Number(n)) => n.as_f64().is_some_and(f64::is_finite),
                other => coerce::is_numeric(&coerce_to_string(other)),
            },
            Check::Boolean => matches!(
                coerce_to_string(raw).as_str(),
                "true" | "false" | "1" | "0"
            ),
            Check::Int => {
                let value = coerce_to_string(raw);
                coerce::is_int(&value) && value.parse::<i32>().is_ok()
            }
            Check::MaxLength(max) => coerce_to_string(raw).chars().count() <= max,
            Check::GreaterThan(bound) => coerce::loose_number(raw).is_some_and(|n| n > bound),
        }
    }
}

/// One named rule of a route's validation chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub location: Location,
    pub field: &'static str,
    pub check: Check,
    pub code: &'static str,
    pub message: &'static str,
    /// Skip the rule when the field is absent from the request.
    pub optional: bool,
}

impl FieldRule {
    pub const fn new(location: Location, field: &'static str, check: Check) -> Self {
        Self {
            location,
            field,
            check,
            code: "INVALID_VALUE",
            message: "Invalid value",
            optional: false,
        }
    }

    pub const fn body(field: &'static str, check: Check) -> Self {
        Self::new(Location::Body, field, check)
    }

    pub const fn param(field: &'static str, check: Check) -> Self {
        Self::new(Location::Params, field, check)
    }

    pub const fn with_message(self, code: &'static str, message: &'static str) -> Self {
        Self {
            code,
            message,
            ..self
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }

    fn evaluate(&self, input: &RequestInput) -> Option<FieldViolation> {
        let raw = input.raw(self.location, self.field);

        if self.optional && raw.is_none() {
            return None;
        }
        if self.check.passes(raw.as_ref()) {
            return None;
        }

        Some(FieldViolation {
            kind: "field".to_string(),
            value: raw,
            msg: self.message.to_string(),
            path: self.field.to_string(),
            location: self.location,
            code: self.code.to_string(),
        })
    }
}

/// A failed rule, serialized as one entry of the `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FieldViolation {
    /// Always `"field"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The submitted value; omitted when the field was absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
    pub msg: String,
    pub path: String,
    pub location: Location,
    pub code: String,
}

/// Raw request input the rules are evaluated against.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestInput {
    pub params: HashMap<String, String>,
    pub body: Value,
}

impl RequestInput {
    pub fn new(params: HashMap<String, String>, body: Value) -> Self {
        Self { params, body }
    }

    pub fn from_body(body: Value) -> Self {
        Self::new(HashMap::new(), body)
    }

    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            params
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            Value::Object(Default::default()),
        )
    }

    fn raw(&self, location: Location, field: &str) -> Option<Value> {
        match location {
            Location::Params => self.params.get(field).cloned().map(Value::String),
            Location::Body => self.body.get(field).cloned(),
        }
    }

    /// Path parameter parsed as an `i32` key.
    pub fn param_i32(&self, field: &str) -> Option<i32> {
        self.params.get(field)?.parse().ok()
    }

    /// Body field in its loose string form; `None` when absent or null.
    pub fn body_string(&self, field: &str) -> Option<String> {
        match self.body.get(field)? {
            Value::Null => None,
            value => Some(coerce_to_string(Some(value))),
        }
    }

    pub fn body_f64(&self, field: &str) -> Option<f64> {
        coerce_f64(self.body.get(field)?)
    }

    pub fn body_bool(&self, field: &str) -> Option<bool> {
        coerce_bool(self.body.get(field)?)
    }

    pub fn has_body_field(&self, field: &str) -> bool {
        self.body.get(field).is_some()
    }
}

/// Run every rule in order and collect the failures.
pub fn run(rules: &[FieldRule], input: &RequestInput) -> Vec<FieldViolation> {
    rules.iter().filter_map(|rule| rule.evaluate(input)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PRICE_RULES: &[FieldRule] = &[
        FieldRule::body("price", Check::Numeric).with_message("INVALID_VALUE", "bad value"),
        FieldRule::body("price", Check::NotEmpty).with_message("EMPTY_PRICE", "empty price"),
        FieldRule::body("price", Check::GreaterThan(0.0)).with_message("INVALID_PRICE", "bad price"),
    ];

    fn codes(violations: &[FieldViolation]) -> Vec<&str> {
        violations.iter().map(|v| v.code.as_str()).collect()
    }

    #[test]
    fn test_rules_run_without_bail_out() {
        let violations = run(PRICE_RULES, &RequestInput::from_body(json!({})));
        assert_eq!(
            codes(&violations),
            vec!["INVALID_VALUE", "EMPTY_PRICE", "INVALID_PRICE"]
        );
        assert!(violations.iter().all(|v| v.value.is_none()));
    }

    #[test]
    fn test_large_json_numbers_are_numeric() {
        for price in [json!(1e16), json!(2.5e16), json!(1.5e300)] {
            let violations = run(PRICE_RULES, &RequestInput::from_body(json!({ "price": price })));
            assert!(violations.is_empty(), "{price}");
        }
    }

    #[test]
    fn test_exponent_strings_are_not_numeric() {
        let violations = run(PRICE_RULES, &RequestInput::from_body(json!({"price": "1e16"})));
        assert_eq!(codes(&violations), vec!["INVALID_VALUE"]);
    }

    #[test]
    fn test_zero_only_fails_the_bound() {
        let violations = run(PRICE_RULES, &RequestInput::from_body(json!({"price": 0})));
        assert_eq!(codes(&violations), vec!["INVALID_PRICE"]);
        assert_eq!(violations[0].value, Some(json!(0)));
    }

    #[test]
    fn test_non_numeric_string_fails_twice() {
        let violations = run(PRICE_RULES, &RequestInput::from_body(json!({"price": "Hello"})));
        assert_eq!(codes(&violations), vec!["INVALID_VALUE", "INVALID_PRICE"]);
    }

    #[test]
    fn test_numeric_string_passes() {
        let violations = run(PRICE_RULES, &RequestInput::from_body(json!({"price": "49.90"})));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_optional_rule_skipped_when_absent() {
        let rules = [FieldRule::body("availability", Check::Boolean).optional()];

        assert!(run(&rules, &RequestInput::from_body(json!({}))).is_empty());
        assert_eq!(
            run(&rules, &RequestInput::from_body(json!({"availability": null}))).len(),
            1
        );
        assert_eq!(
            run(&rules, &RequestInput::from_body(json!({"availability": "yes"}))).len(),
            1
        );
    }

    #[test]
    fn test_boolean_accepts_loose_forms() {
        let rules = [FieldRule::body("flag", Check::Boolean)];
        for value in [json!(true), json!(false), json!("true"), json!("0"), json!(1)] {
            let input = RequestInput::from_body(json!({ "flag": value }));
            assert!(run(&rules, &input).is_empty(), "{value} should pass");
        }
        for value in [json!("TRUE"), json!("yes"), json!(2), json!("")] {
            let input = RequestInput::from_body(json!({ "flag": value }));
            assert_eq!(run(&rules, &input).len(), 1, "{value} should fail");
        }
    }

    #[test]
    fn test_int_param() {
        let rules = [FieldRule::param("id", Check::Int).with_message("INVALID_ID", "bad id")];

        for ok in ["1", "2000", "-5", "+7", "0"] {
            assert!(run(&rules, &RequestInput::from_params([("id", ok)])).is_empty());
        }
        for bad in ["not-valid-url", "1.5", "007", "", "99999999999"] {
            let violations = run(&rules, &RequestInput::from_params([("id", bad)]));
            assert_eq!(violations.len(), 1, "{bad} should fail");
            assert_eq!(violations[0].location, Location::Params);
            assert_eq!(violations[0].value, Some(json!(bad)));
        }
    }

    #[test]
    fn test_max_length_counts_chars() {
        let rules = [FieldRule::body("name", Check::MaxLength(3))];
        assert!(run(&rules, &RequestInput::from_body(json!({"name": "ñáé"}))).is_empty());
        assert_eq!(
            run(&rules, &RequestInput::from_body(json!({"name": "abcd"}))).len(),
            1
        );
    }

    #[test]
    fn test_violation_serialization() {
        let rules = [FieldRule::param("id", Check::Int).with_message("INVALID_ID", "ID no valido")];
        let violations = run(&rules, &RequestInput::from_params([("id", "abc")]));

        let json = serde_json::to_value(&violations[0]).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "field",
                "value": "abc",
                "msg": "ID no valido",
                "path": "id",
                "location": "params",
                "code": "INVALID_ID"
            })
        );
    }

    #[test]
    fn test_absent_value_is_not_serialized() {
        let rules = [FieldRule::body("name", Check::NotEmpty)];
        let violations = run(&rules, &RequestInput::from_body(json!({})));
        let json = serde_json::to_value(&violations[0]).unwrap();
        assert!(json.get("value").is_none());
        assert_eq!(json["location"], "body");
    }

    #[test]
    fn test_typed_accessors() {
        let input = RequestInput::new(
            HashMap::from([("id".to_string(), "12".to_string())]),
            json!({"name": 42, "price": " 10.5 ", "availability": "0", "empty": null}),
        );

        assert_eq!(input.param_i32("id"), Some(12));
        assert_eq!(input.body_string("name").as_deref(), Some("42"));
        assert_eq!(input.body_string("empty"), None);
        assert_eq!(input.body_f64("price"), Some(10.5));
        assert_eq!(input.body_bool("availability"), Some(false));
        assert!(input.has_body_field("empty"));
        assert!(!input.has_body_field("missing"));
    }
}
