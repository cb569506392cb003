use model::core::{relation::BinaryRelation, value::Value};
use search_filter::{BindableValue, ExpectedValue, FilterError, compile};
use search_syntax::ComparisonOperator;

use super::helpers::*;

#[test]
fn test_author_matches_case_insensitively() {
    let predicate = single_predicate("author:apple");
    assert_eq!(predicate.operator, ComparisonOperator::Is);
    assert_eq!(predicate.relation, BinaryRelation::CaseInsensitiveLike);
    assert!(predicate.bindable_value.is_bound());
    assert!(predicate.matches(&Value::from("Apple")));
    assert!(!predicate.matches(&Value::from("google")));
}

#[test]
fn test_quoted_author() {
    let predicate = single_predicate(r#"author:!"Point-Free Inc""#);
    assert_eq!(predicate.operator, ComparisonOperator::IsNot);
    assert_eq!(predicate.display_value, "Point-Free Inc");
}

#[test]
fn test_non_numeric_stars() {
    let compilation = compile("stars:abc");
    assert!(compilation.query.predicates.is_empty());
    assert_eq!(
        compilation.errors().collect::<Vec<_>>(),
        vec![&FilterError::InvalidValue {
            key: "stars".to_string(),
            raw_value: "abc".to_string(),
            expected: ExpectedValue::Integer,
        }]
    );
}

#[test]
fn test_signed_stars_are_invalid() {
    let compilation = compile("stars:+5 stars:+1,000 stars:>-1");
    assert!(compilation.query.predicates.is_empty());
    assert_eq!(compilation.issues.len(), 3);
    assert!(compilation.errors().all(|err| matches!(
        err,
        FilterError::InvalidValue {
            expected: ExpectedValue::Integer,
            ..
        }
    )));
}

#[test]
fn test_unknown_key() {
    let compilation = compile("bogus:1");
    assert!(compilation.query.predicates.is_empty());
    assert!(compilation.query.free_text_terms.is_empty());
    assert_eq!(
        compilation.errors().collect::<Vec<_>>(),
        vec![&FilterError::UnknownFilterKey {
            key: "bogus".to_string()
        }]
    );
}

#[test]
fn test_keys_are_case_sensitive() {
    let compilation = compile("Author:apple");
    assert_eq!(compilation.issues.len(), 1);
    assert!(matches!(
        &compilation.issues[0].error,
        FilterError::UnknownFilterKey { key } if key == "Author"
    ));
}

#[test]
fn test_empty_value_is_invalid() {
    let compilation = compile("author: vapor");
    assert_eq!(compilation.query.free_text_terms, vec!["vapor"]);
    assert!(matches!(
        &compilation.issues[0].error,
        FilterError::InvalidValue { key, raw_value, .. } if key == "author" && raw_value.is_empty()
    ));
}

#[test]
fn test_mixed_input_keeps_source_order() {
    let compilation = compile("vapor author:apple stars:>100");
    assert_eq!(compilation.query.free_text_terms, vec!["vapor"]);
    let keys: Vec<_> = compilation
        .query
        .predicates
        .iter()
        .map(|p| p.key.as_str())
        .collect();
    assert_eq!(keys, vec!["author", "stars"]);
}

#[test]
fn test_bad_filters_do_not_stop_compilation() {
    let compilation = compile("stars:x nio author:apple bogus:1 platform:!ios keyword:server");
    assert_eq!(compilation.query.free_text_terms, vec!["nio"]);
    assert_eq!(compilation.query.predicates.len(), 2);
    assert_eq!(compilation.issues.len(), 3);
}

#[test]
fn test_blank_quoted_terms_are_not_free_text() {
    let compilation = compile("vapor \" \" \"\t\" \"\"");
    assert_eq!(compilation.query.free_text_terms, vec!["vapor"]);
    assert!(!compilation.has_issues());
}

#[test]
fn test_quoted_free_text_is_one_term() {
    let compilation = compile(r#""swift nio" http"#);
    assert_eq!(compilation.query.free_text_terms, vec!["swift nio", "http"]);
}

#[test]
fn test_license_and_platform_are_literals() {
    let license = single_predicate("license:compatible");
    assert!(matches!(license.bindable_value, BindableValue::Literal(_)));
    assert_eq!(license.relation, BinaryRelation::In);

    let platform = single_predicate("platform:macos,IOS");
    assert_eq!(platform.display_value, "iOS, macOS");
    assert_eq!(
        platform.bindable_value,
        BindableValue::Literal(Value::from(vec!["ios".to_string(), "macos".to_string()]))
    );
}

#[test]
fn test_view_model_descriptions() {
    let compilation = compile(
        "stars:>1000 license:compatible product:!plugin last_commit:<2024-01-01 archived:no",
    );
    let descriptions: Vec<_> = compilation
        .query
        .view_models()
        .iter()
        .map(|view| view.description())
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "stars is greater than 1,000",
            "license is compatible with the App Store",
            "product is not Plugin",
            "last_commit is less than 2024-01-01",
            "archived is false",
        ]
    );
}
