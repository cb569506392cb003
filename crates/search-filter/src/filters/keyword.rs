use super::{EQUALITY, SearchFilter, contains_relation, non_empty};
use crate::{
    error::ExpectedValue,
    predicate::{BindableValue, Predicate},
};
use model::core::value::Value;
use search_syntax::ComparisonOperator;

/// Matches one of the keywords (repository topics) of a package.
/// Keywords are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordFilter {
    operator: ComparisonOperator,
    keyword: String,
}

impl SearchFilter for KeywordFilter {
    const KEY: &'static str = "keyword";
    const OPERATORS: &'static [ComparisonOperator] = EQUALITY;
    const SUMMARY: &'static str = "Package keyword";

    type Value = String;

    fn parse_value(raw: &str) -> Result<String, ExpectedValue> {
        non_empty(raw).map(str::to_lowercase)
    }

    fn from_parts(operator: ComparisonOperator, keyword: String) -> Self {
        KeywordFilter { operator, keyword }
    }

    fn predicate(&self) -> Predicate {
        Predicate::new(
            Self::KEY,
            self.operator,
            contains_relation(self.operator),
            BindableValue::Bind(Value::String(self.keyword.clone())),
            self.keyword.clone(),
        )
    }
}
