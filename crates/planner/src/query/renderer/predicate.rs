use model::core::{relation::BinaryRelation, value::Value};
use search_filter::{BindableValue, Predicate};

use super::{Render, Renderer};
use crate::error::PlannerError;

/// One predicate applied to its mapped column.
pub struct PredicateSql<'a> {
    pub column: &'a str,
    pub predicate: &'a Predicate,
}

/// One free text term matched against every text column.
pub struct FreeTextSql<'a> {
    pub columns: &'a [String],
    pub term: &'a str,
}

impl Render for PredicateSql<'_> {
    fn render(&self, r: &mut Renderer) -> Result<(), PlannerError> {
        let column = r.quoted(self.column);
        let relation = self.predicate.relation;
        let bindable = &self.predicate.bindable_value;

        let fragment = match relation {
            BinaryRelation::Equal
            | BinaryRelation::NotEqual
            | BinaryRelation::GreaterThan
            | BinaryRelation::LessThan => {
                if matches!(bindable.value(), Value::StringArray(_) | Value::Null) {
                    return Err(unsupported(relation, bindable.value()));
                }
                let operand = r.operand(bindable);
                format!("{column} {relation} {operand}")
            }
            BinaryRelation::CaseInsensitiveLike | BinaryRelation::NotCaseInsensitiveLike => {
                let Value::String(text) = bindable.value() else {
                    return Err(unsupported(relation, bindable.value()));
                };
                let pattern = Value::String(r.dialect.escape_like(text));
                let operand = r.operand(&rewrap(bindable, pattern));
                r.dialect
                    .case_insensitive_like(&column, &operand, relation.is_negated())
            }
            BinaryRelation::Contains | BinaryRelation::NotContains => {
                let items = array_items(relation, bindable.value())?;
                let operand = match bindable {
                    BindableValue::Bind(_) => r.bind(r.dialect.array_value(&items)),
                    BindableValue::Literal(_) => {
                        r.dialect.render_literal(&Value::StringArray(items))
                    }
                };
                r.dialect
                    .array_contains(&column, &operand, relation.is_negated())
            }
            BinaryRelation::In | BinaryRelation::NotIn => {
                let items = array_items(relation, bindable.value())?;
                if items.is_empty() {
                    // Nothing is a member of an empty list.
                    return push(r, if relation.is_negated() { "1 = 1" } else { "1 = 0" });
                }
                let operands = items
                    .into_iter()
                    .map(|item| r.operand(&rewrap(bindable, Value::String(item))))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{column} {relation} ({operands})")
            }
        };

        push(r, &fragment)
    }
}

impl Render for FreeTextSql<'_> {
    fn render(&self, r: &mut Renderer) -> Result<(), PlannerError> {
        if self.columns.is_empty() {
            return Err(PlannerError::NoTextColumns);
        }

        let pattern = format!("%{}%", r.dialect.escape_like(self.term));
        let alternatives = self
            .columns
            .iter()
            .map(|column| {
                let column = r.quoted(column);
                let operand = r.bind(Value::String(pattern.clone()));
                r.dialect.case_insensitive_like(&column, &operand, false)
            })
            .collect::<Vec<_>>()
            .join(" OR ");

        push(r, &format!("({alternatives})"))
    }
}

fn push(r: &mut Renderer, fragment: &str) -> Result<(), PlannerError> {
    r.sql.push_str(fragment);
    Ok(())
}

fn rewrap(original: &BindableValue, value: Value) -> BindableValue {
    match original {
        BindableValue::Bind(_) => BindableValue::Bind(value),
        BindableValue::Literal(_) => BindableValue::Literal(value),
    }
}

fn array_items(relation: BinaryRelation, value: &Value) -> Result<Vec<String>, PlannerError> {
    match value {
        Value::StringArray(items) => Ok(items.clone()),
        Value::String(item) => Ok(vec![item.clone()]),
        other => Err(unsupported(relation, other)),
    }
}

fn unsupported(relation: BinaryRelation, value: &Value) -> PlannerError {
    PlannerError::UnsupportedOperand {
        relation,
        value_type: value.type_name(),
    }
}
