use model::core::relation::BinaryRelation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison a user can request for a filter value.
///
/// The operator is written as an optional one-character prefix on the value:
///
/// ```text
/// stars:5   - Is
/// stars:!5  - IsNot
/// stars:>5  - GreaterThan
/// stars:<5  - LessThan
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOperator {
    Is,
    IsNot,
    GreaterThan,
    LessThan,
}

impl ComparisonOperator {
    pub const ALL: [ComparisonOperator; 4] = [
        ComparisonOperator::Is,
        ComparisonOperator::IsNot,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::LessThan,
    ];

    /// Splits the operator prefix off a filter value.
    ///
    /// At most one character is consumed. Anything that is not a known prefix
    /// stays part of the value and the operator defaults to [`Is`].
    ///
    /// [`Is`]: ComparisonOperator::Is
    pub fn parse_prefix(token: &str) -> (ComparisonOperator, &str) {
        if let Some(rest) = token.strip_prefix('!') {
            (ComparisonOperator::IsNot, rest)
        } else if let Some(rest) = token.strip_prefix('>') {
            (ComparisonOperator::GreaterThan, rest)
        } else if let Some(rest) = token.strip_prefix('<') {
            (ComparisonOperator::LessThan, rest)
        } else {
            (ComparisonOperator::Is, token)
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            ComparisonOperator::Is => "",
            ComparisonOperator::IsNot => "!",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::LessThan => "<",
        }
    }

    /// Literal relational counterpart, used by ordered filter kinds.
    pub fn relation(self) -> BinaryRelation {
        match self {
            ComparisonOperator::Is => BinaryRelation::Equal,
            ComparisonOperator::IsNot => BinaryRelation::NotEqual,
            ComparisonOperator::GreaterThan => BinaryRelation::GreaterThan,
            ComparisonOperator::LessThan => BinaryRelation::LessThan,
        }
    }

    /// Human readable form used in filter descriptions.
    pub fn description(self) -> &'static str {
        match self {
            ComparisonOperator::Is => "is",
            ComparisonOperator::IsNot => "is not",
            ComparisonOperator::GreaterThan => "is greater than",
            ComparisonOperator::LessThan => "is less than",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonOperator::Is => write!(f, "is"),
            ComparisonOperator::IsNot => write!(f, "is-not"),
            ComparisonOperator::GreaterThan => write!(f, "greater-than"),
            ComparisonOperator::LessThan => write!(f, "less-than"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefix() {
        assert_eq!(
            ComparisonOperator::parse_prefix("5"),
            (ComparisonOperator::Is, "5")
        );
        assert_eq!(
            ComparisonOperator::parse_prefix("!5"),
            (ComparisonOperator::IsNot, "5")
        );
        assert_eq!(
            ComparisonOperator::parse_prefix(">5"),
            (ComparisonOperator::GreaterThan, "5")
        );
        assert_eq!(
            ComparisonOperator::parse_prefix("<5"),
            (ComparisonOperator::LessThan, "5")
        );
    }

    #[test]
    fn test_unknown_prefix_stays_in_value() {
        assert_eq!(
            ComparisonOperator::parse_prefix("#5"),
            (ComparisonOperator::Is, "#5")
        );
        assert_eq!(
            ComparisonOperator::parse_prefix("=5"),
            (ComparisonOperator::Is, "=5")
        );
    }

    #[test]
    fn test_only_one_prefix_character_is_consumed() {
        assert_eq!(
            ComparisonOperator::parse_prefix(">>5"),
            (ComparisonOperator::GreaterThan, ">5")
        );
        assert_eq!(
            ComparisonOperator::parse_prefix("!<5"),
            (ComparisonOperator::IsNot, "<5")
        );
        assert_eq!(
            ComparisonOperator::parse_prefix(""),
            (ComparisonOperator::Is, "")
        );
    }

    #[test]
    fn test_prefix_round_trips() {
        for op in ComparisonOperator::ALL {
            let raw = format!("{}42", op.prefix());
            assert_eq!(ComparisonOperator::parse_prefix(&raw), (op, "42"));
        }
    }

    #[test]
    fn test_relation_mapping() {
        assert_eq!(ComparisonOperator::Is.relation(), BinaryRelation::Equal);
        assert_eq!(ComparisonOperator::IsNot.relation(), BinaryRelation::NotEqual);
        assert_eq!(
            ComparisonOperator::GreaterThan.relation(),
            BinaryRelation::GreaterThan
        );
        assert_eq!(ComparisonOperator::LessThan.relation(), BinaryRelation::LessThan);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ComparisonOperator::IsNot), "is-not");
        assert_eq!(ComparisonOperator::GreaterThan.description(), "is greater than");
    }
}
