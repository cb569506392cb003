use super::{EQUALITY, SearchFilter, parse_choice};
use crate::{
    error::ExpectedValue,
    predicate::{BindableValue, Predicate},
};
use model::core::value::Value;
use search_syntax::ComparisonOperator;

const BOOLEANS: &[(&str, bool)] = &[
    ("true", true),
    ("yes", true),
    ("false", false),
    ("no", false),
];

/// Matches packages whose repository is (or is not) archived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedFilter {
    operator: ComparisonOperator,
    archived: bool,
}

impl SearchFilter for ArchivedFilter {
    const KEY: &'static str = "archived";
    const OPERATORS: &'static [ComparisonOperator] = EQUALITY;
    const SUMMARY: &'static str = "Whether the repository is archived (true, false)";

    type Value = bool;

    fn parse_value(raw: &str) -> Result<bool, ExpectedValue> {
        parse_choice(raw, BOOLEANS).ok_or(ExpectedValue::Boolean)
    }

    fn from_parts(operator: ComparisonOperator, archived: bool) -> Self {
        ArchivedFilter { operator, archived }
    }

    fn predicate(&self) -> Predicate {
        Predicate::new(
            Self::KEY,
            self.operator,
            self.operator.relation(),
            BindableValue::Literal(Value::Boolean(self.archived)),
            self.archived.to_string(),
        )
    }
}
