use super::{EQUALITY, SearchFilter, like_relation, non_empty};
use crate::{
    error::ExpectedValue,
    predicate::{BindableValue, Predicate},
};
use model::core::value::Value;
use search_syntax::ComparisonOperator;

/// Matches the package author, i.e. the owner of its repository.
///
/// ```text
/// author:apple   - packages owned by apple (case-insensitive)
/// author:!apple  - packages not owned by apple
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorFilter {
    operator: ComparisonOperator,
    author: String,
}

impl SearchFilter for AuthorFilter {
    const KEY: &'static str = "author";
    const OPERATORS: &'static [ComparisonOperator] = EQUALITY;
    const SUMMARY: &'static str = "Package author (repository owner)";

    type Value = String;

    fn parse_value(raw: &str) -> Result<String, ExpectedValue> {
        non_empty(raw).map(str::to_string)
    }

    fn from_parts(operator: ComparisonOperator, author: String) -> Self {
        AuthorFilter { operator, author }
    }

    fn predicate(&self) -> Predicate {
        Predicate::new(
            Self::KEY,
            self.operator,
            like_relation(self.operator),
            BindableValue::Bind(Value::String(self.author.clone())),
            self.author.clone(),
        )
    }
}
