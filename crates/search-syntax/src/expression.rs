use crate::{operator::ComparisonOperator, span::Span};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `key:value` filter token that has been split into its parts but not yet
/// validated against any filter kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterExpression {
    pub key: String,
    pub operator: ComparisonOperator,
    pub raw_value: String,
    #[serde(default)]
    pub span: Span,
}

impl FilterExpression {
    pub fn new(
        key: impl Into<String>,
        operator: ComparisonOperator,
        raw_value: impl Into<String>,
    ) -> Self {
        FilterExpression {
            key: key.into(),
            operator,
            raw_value: raw_value.into(),
            span: Span::default(),
        }
    }

    /// Parses the operator prefix off `value` (see
    /// [`ComparisonOperator::parse_prefix`]).
    pub fn from_candidate(key: impl Into<String>, value: &str, span: Span) -> Self {
        let (operator, raw_value) = ComparisonOperator::parse_prefix(value);
        FilterExpression {
            key: key.into(),
            operator,
            raw_value: raw_value.to_string(),
            span,
        }
    }
}

/// Renders the expression as query text that tokenizes back to the same
/// key, operator and value.
impl fmt::Display for FilterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}{}",
            self.key,
            self.operator.prefix(),
            quote_if_needed(&self.raw_value)
        )
    }
}

/// Quotes a value if it contains whitespace or characters the tokenizer
/// would otherwise interpret.
pub fn quote_if_needed(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|ch| ch.is_whitespace() || ch == '"' || ch == '\\');
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}
