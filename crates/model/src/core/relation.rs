use crate::core::value::Value;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// Generic binary relation between a stored column value and an operand.
///
/// This is the query layer's view of a comparison. It is independent of the
/// textual operator a user typed and of any particular SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryRelation {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    CaseInsensitiveLike,
    NotCaseInsensitiveLike,
    /// Array column contains every element of the operand.
    Contains,
    NotContains,
    /// Scalar column is one of the operand's elements.
    In,
    NotIn,
}

impl BinaryRelation {
    pub fn is_negated(self) -> bool {
        matches!(
            self,
            BinaryRelation::NotEqual
                | BinaryRelation::NotCaseInsensitiveLike
                | BinaryRelation::NotContains
                | BinaryRelation::NotIn
        )
    }

    /// Evaluates `stored <relation> operand` in memory.
    ///
    /// Follows SQL's treatment of NULL: a null stored value never matches,
    /// negated relations included.
    pub fn evaluate(self, stored: &Value, operand: &Value) -> bool {
        if stored.is_null() {
            return false;
        }

        match self {
            BinaryRelation::Equal => stored.equal(operand),
            BinaryRelation::NotEqual => {
                stored.compare(operand).is_some() && !stored.equal(operand)
            }
            BinaryRelation::GreaterThan => stored.compare(operand) == Some(Ordering::Greater),
            BinaryRelation::LessThan => stored.compare(operand) == Some(Ordering::Less),
            BinaryRelation::CaseInsensitiveLike => match (stored, operand) {
                (Value::String(s), Value::String(o)) => s.to_lowercase() == o.to_lowercase(),
                _ => false,
            },
            BinaryRelation::NotCaseInsensitiveLike => match (stored, operand) {
                (Value::String(s), Value::String(o)) => s.to_lowercase() != o.to_lowercase(),
                _ => false,
            },
            BinaryRelation::Contains => contains(stored, operand).unwrap_or(false),
            BinaryRelation::NotContains => contains(stored, operand).is_some_and(|hit| !hit),
            BinaryRelation::In => member_of(stored, operand).unwrap_or(false),
            BinaryRelation::NotIn => member_of(stored, operand).is_some_and(|hit| !hit),
        }
    }
}

fn contains(stored: &Value, operand: &Value) -> Option<bool> {
    let haystack = stored.as_array()?;
    let found = match operand {
        Value::StringArray(needles) => needles.iter().all(|n| haystack.contains(n)),
        Value::String(needle) => haystack.contains(needle),
        _ => return None,
    };
    Some(found)
}

fn member_of(stored: &Value, operand: &Value) -> Option<bool> {
    let candidates = operand.as_array()?;
    let Value::String(s) = stored else {
        return None;
    };
    Some(candidates.contains(s))
}

impl fmt::Display for BinaryRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryRelation::Equal => write!(f, "="),
            BinaryRelation::NotEqual => write!(f, "!="),
            BinaryRelation::GreaterThan => write!(f, ">"),
            BinaryRelation::LessThan => write!(f, "<"),
            BinaryRelation::CaseInsensitiveLike => write!(f, "ILIKE"),
            BinaryRelation::NotCaseInsensitiveLike => write!(f, "NOT ILIKE"),
            BinaryRelation::Contains => write!(f, "@>"),
            BinaryRelation::NotContains => write!(f, "NOT @>"),
            BinaryRelation::In => write!(f, "IN"),
            BinaryRelation::NotIn => write!(f, "NOT IN"),
        }
    }
}
