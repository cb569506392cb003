use crate::{expression::FilterExpression, span::Span};
use serde::{Deserialize, Serialize};

/// One whitespace-delimited unit of a search query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Token {
    /// Plain search text, with quotes and escapes already removed.
    FreeText { text: String, span: Span },
    /// A `key:value` token. `value` still carries the operator prefix.
    Candidate { key: String, value: String, span: Span },
}

impl Token {
    pub fn span(&self) -> Span {
        match self {
            Token::FreeText { span, .. } | Token::Candidate { span, .. } => *span,
        }
    }

    pub fn is_candidate(&self) -> bool {
        matches!(self, Token::Candidate { .. })
    }

    /// Splits a candidate's operator prefix off its value.
    pub fn to_expression(&self) -> Option<FilterExpression> {
        match self {
            Token::Candidate { key, value, span } => {
                Some(FilterExpression::from_candidate(key.clone(), value, *span))
            }
            Token::FreeText { .. } => None,
        }
    }
}
