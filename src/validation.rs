//! Field-level validation of raw JSON payloads.
//!
//! Every record type reads its fields through a [`FieldReader`], which applies one rule per
//! field (presence, type, numeric bounds) and collects every violation it sees. A payload is
//! accepted only when the reader finishes with no violations.

use std::fmt;

use serde_json::{Map, Value};

/// A single constraint failure on one field.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// Required field is missing from the payload.
    Required,

    /// Field is present with a value of the wrong JSON type.
    ExpectedType(&'static str),

    /// Numeric field is below its lower bound.
    BelowMinimum(f64),

    /// Numeric field is above its upper bound.
    AboveMaximum(f64),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => write!(f, "field required"),
            Violation::ExpectedType(expected) => write!(f, "expected {expected}"),
            Violation::BelowMinimum(bound) => {
                write!(f, "must be greater than or equal to {bound}")
            }
            Violation::AboveMaximum(bound) => write!(f, "must be less than or equal to {bound}"),
        }
    }
}

/// A violation attached to the field that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub violation: Violation,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.violation)
    }
}

/// Structured validation failure.
///
/// Holds every violation found in a payload, in field declaration order.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The payload was not a JSON object at all.
    #[error("body: expected object")]
    NotAnObject,

    /// One or more fields failed their rules.
    #[error("{}", join_violations(.0))]
    Fields(Vec<FieldViolation>),
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
impl ValidationError {
    /// Violations reported for `field` (empty if the field passed).
    pub fn violations_for(&self, field: &str) -> Vec<&Violation> {
        match self {
            ValidationError::NotAnObject => Vec::new(),
            ValidationError::Fields(violations) => violations
                .iter()
                .filter(|v| v.field == field)
                .map(|v| &v.violation)
                .collect(),
        }
    }
}

/// Inclusive numeric bounds for a field.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Bounds {
    #[cfg(test)]
    pub const NONE: Bounds = Bounds {
        min: None,
        max: None,
    };

    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    fn check(&self, value: f64) -> Option<Violation> {
        if let Some(min) = self.min {
            if value < min {
                return Some(Violation::BelowMinimum(min));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Some(Violation::AboveMaximum(max));
            }
        }
        None
    }
}

/// Reads typed fields out of a raw JSON object, recording violations as it goes.
///
/// Getters return a placeholder value when a field is invalid so that a record can keep
/// being assembled; [`FieldReader::finish`] decides whether the record is usable.
pub struct FieldReader<'a> {
    raw: &'a Map<String, Value>,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldReader<'a> {
    pub fn new(raw: &'a Value) -> Result<Self, ValidationError> {
        let raw = raw.as_object().ok_or(ValidationError::NotAnObject)?;
        Ok(Self {
            raw,
            violations: Vec::new(),
        })
    }

    fn reject(&mut self, field: &'static str, violation: Violation) {
        self.violations.push(FieldViolation { field, violation });
    }

    fn value(&self, field: &str) -> Option<&'a Value> {
        self.raw.get(field)
    }

    /// Present, non-null value of `field`, or `None` when absent or null.
    fn present(&self, field: &str) -> Option<&'a Value> {
        self.value(field).filter(|v| !v.is_null())
    }

    pub fn required_string(&mut self, field: &'static str) -> String {
        match self.value(field) {
            None => {
                self.reject(field, Violation::Required);
                String::new()
            }
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                self.reject(field, Violation::ExpectedType("string"));
                String::new()
            }
        }
    }

    pub fn optional_string(&mut self, field: &'static str) -> Option<String> {
        match self.present(field)? {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.reject(field, Violation::ExpectedType("string"));
                None
            }
        }
    }

    pub fn required_integer(&mut self, field: &'static str, bounds: Bounds) -> i64 {
        match self.value(field) {
            None => {
                self.reject(field, Violation::Required);
                0
            }
            Some(value) => self.integer(field, value, bounds).unwrap_or_default(),
        }
    }

    pub fn optional_integer(&mut self, field: &'static str, bounds: Bounds) -> Option<i64> {
        let value = self.present(field)?;
        self.integer(field, value, bounds)
    }

    pub fn required_float(&mut self, field: &'static str, bounds: Bounds) -> f64 {
        match self.value(field) {
            None => {
                self.reject(field, Violation::Required);
                0.0
            }
            Some(value) => match value.as_f64() {
                Some(number) => self.bounded(field, number, bounds).unwrap_or_default(),
                None => {
                    self.reject(field, Violation::ExpectedType("number"));
                    0.0
                }
            },
        }
    }

    pub fn bool_or(&mut self, field: &'static str, default: bool) -> bool {
        match self.value(field) {
            None => default,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                self.reject(field, Violation::ExpectedType("boolean"));
                default
            }
        }
    }

    /// Integers accept whole-valued floats such as `2022.0`.
    fn integer(&mut self, field: &'static str, value: &Value, bounds: Bounds) -> Option<i64> {
        let number = match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            }),
            _ => None,
        };
        let Some(number) = number else {
            self.reject(field, Violation::ExpectedType("integer"));
            return None;
        };
        self.bounded(field, number as f64, bounds).map(|_| number)
    }

    fn bounded(&mut self, field: &'static str, number: f64, bounds: Bounds) -> Option<f64> {
        match bounds.check(number) {
            Some(violation) => {
                self.reject(field, violation);
                None
            }
            None => Some(number),
        }
    }

    /// Hand back `record` if every rule passed.
    pub fn finish<T>(self, record: T) -> Result<T, ValidationError> {
        if self.violations.is_empty() {
            Ok(record)
        } else {
            Err(ValidationError::Fields(self.violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_payload() {
        let raw = json!(["brand", "model"]);
        assert_eq!(
            FieldReader::new(&raw).err(),
            Some(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn missing_and_mistyped_fields_are_all_reported() {
        let raw = json!({ "name": 7 });
        let mut reader = FieldReader::new(&raw).unwrap();
        reader.required_string("name");
        reader.required_string("email");
        let err = reader.finish(()).unwrap_err();

        assert_eq!(
            err.violations_for("name"),
            vec![&Violation::ExpectedType("string")]
        );
        assert_eq!(err.violations_for("email"), vec![&Violation::Required]);
        assert_eq!(
            err.to_string(),
            "name: expected string; email: field required"
        );
    }

    #[test]
    fn null_is_a_type_error_for_required_strings_but_absent_for_optional_ones() {
        let raw = json!({ "title": null, "description": null });
        let mut reader = FieldReader::new(&raw).unwrap();
        reader.required_string("title");
        let description = reader.optional_string("description");
        let err = reader.finish(()).unwrap_err();

        assert!(description.is_none());
        assert_eq!(
            err.violations_for("title"),
            vec![&Violation::ExpectedType("string")]
        );
        assert!(err.violations_for("description").is_empty());
    }

    #[test]
    fn integers_accept_whole_floats_only() {
        let raw = json!({ "a": 2022.0, "b": 2022.5, "c": "2022" });
        let mut reader = FieldReader::new(&raw).unwrap();
        let a = reader.required_integer("a", Bounds::NONE);
        reader.required_integer("b", Bounds::NONE);
        reader.required_integer("c", Bounds::NONE);
        let err = reader.finish(()).unwrap_err();

        assert_eq!(a, 2022);
        assert_eq!(
            err.violations_for("b"),
            vec![&Violation::ExpectedType("integer")]
        );
        assert_eq!(
            err.violations_for("c"),
            vec![&Violation::ExpectedType("integer")]
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        let raw = json!({ "low": 1, "high": 9, "under": 0, "over": 10 });
        let mut reader = FieldReader::new(&raw).unwrap();
        let seats = Bounds::between(1.0, 9.0);
        reader.required_integer("low", seats);
        reader.required_integer("high", seats);
        reader.required_integer("under", seats);
        reader.required_integer("over", seats);
        let err = reader.finish(()).unwrap_err();

        assert!(err.violations_for("low").is_empty());
        assert!(err.violations_for("high").is_empty());
        assert_eq!(
            err.violations_for("under"),
            vec![&Violation::BelowMinimum(1.0)]
        );
        assert_eq!(
            err.violations_for("over"),
            vec![&Violation::AboveMaximum(9.0)]
        );
    }

    #[test]
    fn bool_defaults_when_absent_and_rejects_other_types() {
        let raw = json!({ "flag": "yes" });
        let mut reader = FieldReader::new(&raw).unwrap();
        assert!(reader.bool_or("missing", true));
        reader.bool_or("flag", false);
        let err = reader.finish(()).unwrap_err();

        assert_eq!(
            err.violations_for("flag"),
            vec![&Violation::ExpectedType("boolean")]
        );
    }
}
