use super::{ORDERED, SearchFilter};
use crate::{
    error::ExpectedValue,
    predicate::{BindableValue, Predicate},
};
use chrono::NaiveDate;
use model::core::value::Value;
use search_syntax::ComparisonOperator;

const DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_date(raw: &str) -> Result<NaiveDate, ExpectedValue> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| ExpectedValue::Date)
}

fn date_predicate(key: &str, operator: ComparisonOperator, date: NaiveDate) -> Predicate {
    Predicate::new(
        key,
        operator,
        operator.relation(),
        BindableValue::Bind(Value::Date(date)),
        date.format(DATE_FORMAT).to_string(),
    )
}

/// Compares the date of the last maintenance activity (issue or pull
/// request closed).
///
/// ```text
/// last_activity:>2024-01-01  - active since the start of 2024
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastActivityFilter {
    operator: ComparisonOperator,
    date: NaiveDate,
}

impl SearchFilter for LastActivityFilter {
    const KEY: &'static str = "last_activity";
    const OPERATORS: &'static [ComparisonOperator] = ORDERED;
    const SUMMARY: &'static str = "Date of the last maintenance activity (YYYY-MM-DD)";

    type Value = NaiveDate;

    fn parse_value(raw: &str) -> Result<NaiveDate, ExpectedValue> {
        parse_date(raw)
    }

    fn from_parts(operator: ComparisonOperator, date: NaiveDate) -> Self {
        LastActivityFilter { operator, date }
    }

    fn predicate(&self) -> Predicate {
        date_predicate(Self::KEY, self.operator, self.date)
    }
}

/// Compares the date of the last commit to the default branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastCommitFilter {
    operator: ComparisonOperator,
    date: NaiveDate,
}

impl SearchFilter for LastCommitFilter {
    const KEY: &'static str = "last_commit";
    const OPERATORS: &'static [ComparisonOperator] = ORDERED;
    const SUMMARY: &'static str = "Date of the last commit (YYYY-MM-DD)";

    type Value = NaiveDate;

    fn parse_value(raw: &str) -> Result<NaiveDate, ExpectedValue> {
        parse_date(raw)
    }

    fn from_parts(operator: ComparisonOperator, date: NaiveDate) -> Self {
        LastCommitFilter { operator, date }
    }

    fn predicate(&self) -> Predicate {
        date_predicate(Self::KEY, self.operator, self.date)
    }
}
