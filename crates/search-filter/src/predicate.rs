use model::core::{relation::BinaryRelation, value::Value};
use search_syntax::{ComparisonOperator, FilterExpression};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A predicate operand and how it may reach the query layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BindableValue {
    /// User supplied; must be passed as a query parameter.
    Bind(Value),
    /// Drawn from a closed set of known values; safe to inline.
    Literal(Value),
}

impl BindableValue {
    pub fn value(&self) -> &Value {
        match self {
            BindableValue::Bind(value) | BindableValue::Literal(value) => value,
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self, BindableValue::Bind(_))
    }
}

/// A validated filter condition, ready to be combined with other predicates
/// by a query builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    pub key: String,
    pub operator: ComparisonOperator,
    pub relation: BinaryRelation,
    pub bindable_value: BindableValue,
    pub display_value: String,
    /// Value text that parses back into the same predicate.
    pub query_value: String,
}

impl Predicate {
    pub fn new(
        key: &str,
        operator: ComparisonOperator,
        relation: BinaryRelation,
        bindable_value: BindableValue,
        display_value: impl Into<String>,
    ) -> Self {
        let display_value = display_value.into();
        Predicate {
            key: key.to_string(),
            operator,
            relation,
            bindable_value,
            query_value: display_value.clone(),
            display_value,
        }
    }

    pub fn with_query_value(mut self, query_value: impl Into<String>) -> Self {
        self.query_value = query_value.into();
        self
    }

    pub fn value(&self) -> &Value {
        self.bindable_value.value()
    }

    /// Checks a stored column value against this predicate without a database.
    pub fn matches(&self, stored: &Value) -> bool {
        self.relation.evaluate(stored, self.value())
    }

    pub fn view_model(&self) -> ViewModel {
        ViewModel {
            key: self.key.clone(),
            operator: self.operator,
            display_value: self.display_value.clone(),
        }
    }

    /// The filter token this predicate was compiled from, in canonical form.
    pub fn to_expression(&self) -> FilterExpression {
        FilterExpression::new(self.key.clone(), self.operator, self.query_value.clone())
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.key, self.relation, self.value())
    }
}

/// Rendering-only projection of a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub key: String,
    pub operator: ComparisonOperator,
    pub display_value: String,
}

impl ViewModel {
    /// Reads like `stars is greater than 1,000`.
    pub fn description(&self) -> String {
        format!(
            "{} {} {}",
            self.key,
            self.operator.description(),
            self.display_value
        )
    }
}

impl fmt::Display for ViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
