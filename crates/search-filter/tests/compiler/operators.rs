use model::core::value::Value;
use search_filter::{FilterError, FilterRegistry, compile};
use search_syntax::ComparisonOperator;

use super::helpers::*;

#[test]
fn test_supported_operators_yield_one_predicate() {
    for kind in FilterRegistry::standard().kinds() {
        for &operator in kind.supported_operators {
            let input = filter_token(kind.key, operator, sample_value(kind.key));
            let predicate = single_predicate(&input);
            assert_eq!(predicate.key, kind.key);
            assert_eq!(predicate.operator, operator, "input {input:?}");
        }
    }
}

#[test]
fn test_unsupported_operators_yield_one_error() {
    for kind in FilterRegistry::standard().kinds() {
        for operator in ComparisonOperator::ALL {
            if kind.supports(operator) {
                continue;
            }
            let input = filter_token(kind.key, operator, sample_value(kind.key));
            let compilation = compile(&input);
            assert!(compilation.query.predicates.is_empty(), "input {input:?}");
            assert_eq!(
                compilation.errors().collect::<Vec<_>>(),
                vec![&FilterError::UnsupportedComparison {
                    key: kind.key.to_string(),
                    operator,
                }],
                "input {input:?}"
            );
        }
    }
}

#[test]
fn test_stars_operators() {
    let compilation = compile("stars:5 stars:>5 stars:<5 stars:!5");
    assert!(compilation.issues.is_empty());

    let operators: Vec<_> = compilation
        .query
        .predicates
        .iter()
        .map(|p| p.operator)
        .collect();
    assert_eq!(
        operators,
        vec![
            ComparisonOperator::Is,
            ComparisonOperator::GreaterThan,
            ComparisonOperator::LessThan,
            ComparisonOperator::IsNot,
        ]
    );
    for predicate in &compilation.query.predicates {
        assert_eq!(predicate.value(), &Value::Int(5));
    }
}

#[test]
fn test_unknown_prefix_is_part_of_value() {
    let compilation = compile("stars:#5 stars:>>5");
    assert!(compilation.query.predicates.is_empty());
    let raw_values: Vec<_> = compilation
        .errors()
        .map(|err| match err {
            FilterError::InvalidValue { raw_value, .. } => raw_value.as_str(),
            other => panic!("unexpected error {other:?}"),
        })
        .collect();
    assert_eq!(raw_values, vec!["#5", ">5"]);
}
