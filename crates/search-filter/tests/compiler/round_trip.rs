use search_filter::compile;
use search_syntax::ComparisonOperator;

use super::helpers::*;

#[test]
fn test_display_value_recompiles_to_same_predicate() {
    for input in ["stars:>1000", "stars:!1,234,567", "last_activity:<2024-03-09", "last_commit:2023-12-31"] {
        let predicate = single_predicate(input);
        let again = single_predicate(&filter_token(
            &predicate.key,
            predicate.operator,
            &predicate.display_value,
        ));
        assert_eq!(again, predicate, "input {input:?}");
    }
}

#[test]
fn test_query_string_recompiles_to_same_query() {
    let inputs = [
        "vapor author:apple stars:>100",
        r#""swift nio" author:"Apple Inc" keyword:Server"#,
        "license:!incompatible platform:linux,ios product:macro archived:yes",
        r#"a\:b :lead say\"hi\""#,
    ];
    for input in inputs {
        let query = compile(input).query;
        let rendered = query.to_query_string();
        let again = compile(&rendered);
        assert!(again.issues.is_empty(), "rendered {rendered:?}");
        assert_eq!(again.query, query, "rendered {rendered:?}");
    }
}

#[test]
fn test_without_predicate() {
    let query = compile("vapor author:apple stars:>100 keyword:http").query;
    let removed = query.without_predicate(1);
    assert_eq!(
        removed.to_query_string(),
        "vapor author:apple keyword:http"
    );

    let recompiled = compile(&removed.to_query_string()).query;
    assert_eq!(recompiled, removed);
    assert_eq!(recompiled.predicates.len(), query.predicates.len() - 1);
}

#[test]
fn test_canonical_forms() {
    let query = compile("stars:1,000 license:MIT platform:Linux,iOS").query;
    assert_eq!(
        query.to_query_string(),
        "stars:1000 license:mit platform:ios,linux"
    );
    assert_eq!(query.predicates[0].operator, ComparisonOperator::Is);
}

#[test]
fn test_empty_query() {
    let query = compile("   ").query;
    assert!(query.is_empty());
    assert_eq!(query.to_query_string(), "");
}
