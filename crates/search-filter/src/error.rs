use search_syntax::{ComparisonOperator, Span};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Domain a filter value was expected to parse into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "choices", rename_all = "snake_case")]
pub enum ExpectedValue {
    Integer,
    Date,
    Text,
    Boolean,
    OneOf(&'static [&'static str]),
    ListOf(&'static [&'static str]),
}

impl fmt::Display for ExpectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedValue::Integer => write!(f, "an integer"),
            ExpectedValue::Date => write!(f, "a date formatted as YYYY-MM-DD"),
            ExpectedValue::Text => write!(f, "non-empty text"),
            ExpectedValue::Boolean => write!(f, "true or false"),
            ExpectedValue::OneOf(choices) => write!(f, "one of: {}", choices.join(", ")),
            ExpectedValue::ListOf(choices) => {
                write!(f, "a comma separated list of: {}", choices.join(", "))
            }
        }
    }
}

/// Why a single filter token was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterError {
    #[error("filter '{key}' does not support the '{operator}' comparison")]
    UnsupportedComparison {
        key: String,
        operator: ComparisonOperator,
    },

    #[error("'{raw_value}' is not a valid value for filter '{key}', expected {expected}")]
    InvalidValue {
        key: String,
        raw_value: String,
        expected: ExpectedValue,
    },

    #[error("unknown filter '{key}'")]
    UnknownFilterKey { key: String },
}

impl FilterError {
    pub fn key(&self) -> &str {
        match self {
            FilterError::UnsupportedComparison { key, .. }
            | FilterError::InvalidValue { key, .. }
            | FilterError::UnknownFilterKey { key } => key,
        }
    }
}

/// Raised while building a registry; never at query time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("filter key '{key}' is registered more than once")]
    DuplicateKey { key: &'static str },

    #[error("filter '{key}' declares no supported comparisons")]
    NoOperators { key: &'static str },
}

/// A rejected filter token together with where it appeared in the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileIssue {
    pub error: FilterError,
    pub span: Span,
}

impl CompileIssue {
    pub fn new(error: FilterError, span: Span) -> Self {
        CompileIssue { error, span }
    }
}

impl fmt::Display for CompileIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.error, self.span)
    }
}

/// All issues of a query, for callers that reject a query outright.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("query contains {} invalid filter(s): {}", .0.len(), join_issues(.0))]
pub struct CompileErrors(pub Vec<CompileIssue>);

fn join_issues(issues: &[CompileIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
