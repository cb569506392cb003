use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// Typed value a search predicate compares against.
///
/// Values are what the query layer binds as parameters, so they carry only
/// the shapes a filter value can coerce into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i64),
    String(String),
    Boolean(bool),
    Date(NaiveDate),
    StringArray(Vec<String>),
    Null,
}

impl Value {
    pub fn as_array(&self) -> Option<&[String]> {
        match self {
            Value::StringArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Orders two values of the same shape. Mixed shapes are incomparable.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        use Value::*;
        match (self, other) {
            (Int(a), Int(b)) => Some(a.cmp(b)),
            (String(a), String(b)) => Some(a.cmp(b)),
            (Boolean(a), Boolean(b)) => Some(a.cmp(b)),
            (Date(a), Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    pub fn equal(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::StringArray(a), Value::StringArray(b)) => a == b,
            _ => self.compare(other) == Some(Ordering::Equal),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::String(_) => "text",
            Value::Boolean(_) => "boolean",
            Value::Date(_) => "date",
            Value::StringArray(_) => "text[]",
            Value::Null => "null",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Value::StringArray(v)
    }
}

/// Renders the value as an SQL literal. Only used for values that come from
/// closed enumerations; user input is always bound as a parameter.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "'{}'", v.replace('\'', "''")),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Date(v) => write!(f, "'{v}'"),
            Value::StringArray(v) => {
                let array_str = v
                    .iter()
                    .map(|s| format!("\"{}\"", s.replace('"', "\\\"").replace('\'', "''")))
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "'{{{array_str}}}'")
            }
            Value::Null => write!(f, "NULL"),
        }
    }
}
