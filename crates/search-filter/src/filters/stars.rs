use super::{ORDERED, SearchFilter};
use crate::{
    error::ExpectedValue,
    predicate::{BindableValue, Predicate},
};
use model::core::value::Value;
use search_syntax::ComparisonOperator;

/// Compares the repository star count.
///
/// ```text
/// stars:1000    - exactly 1000 stars
/// stars:>1,000  - more than 1000 stars
/// stars:<50     - fewer than 50 stars
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarsFilter {
    operator: ComparisonOperator,
    stars: i64,
}

impl SearchFilter for StarsFilter {
    const KEY: &'static str = "stars";
    const OPERATORS: &'static [ComparisonOperator] = ORDERED;
    const SUMMARY: &'static str = "Number of repository stars";

    type Value = i64;

    fn parse_value(raw: &str) -> Result<i64, ExpectedValue> {
        parse_grouped(raw).ok_or(ExpectedValue::Integer)
    }

    fn from_parts(operator: ComparisonOperator, stars: i64) -> Self {
        StarsFilter { operator, stars }
    }

    fn predicate(&self) -> Predicate {
        Predicate::new(
            Self::KEY,
            self.operator,
            self.operator.relation(),
            BindableValue::Bind(Value::Int(self.stars)),
            format_grouped(self.stars),
        )
        .with_query_value(self.stars.to_string())
    }
}

/// Parses a non-negative count written in ASCII digits, optionally with `,`
/// thousands separators. Signs are rejected. Groups after the first must be
/// exactly three digits.
pub fn parse_grouped(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.chars().all(|ch| ch.is_ascii_digit() || ch == ',') {
        return None;
    }

    if raw.contains(',') {
        let mut groups = raw.split(',');
        let first = groups.next()?;
        if first.is_empty() || first.len() > 3 {
            return None;
        }
        if !groups.all(|group| group.len() == 3) {
            return None;
        }
    }

    raw.replace(',', "").parse().ok()
}

/// Formats an integer with `,` thousands separators.
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
