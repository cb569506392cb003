use search_filter::{Predicate, compile};
use search_syntax::ComparisonOperator;

/// A value every built-in kind accepts.
pub fn sample_value(key: &str) -> &'static str {
    match key {
        "author" => "apple",
        "keyword" => "http",
        "stars" => "5",
        "last_activity" | "last_commit" => "2024-01-01",
        "license" => "mit",
        "platform" => "ios",
        "product" => "library",
        "archived" => "true",
        other => panic!("no sample value for filter '{other}'"),
    }
}

pub fn filter_token(key: &str, operator: ComparisonOperator, value: &str) -> String {
    format!("{key}:{}{value}", operator.prefix())
}

/// Compiles a query expected to produce exactly one predicate and no issues.
pub fn single_predicate(input: &str) -> Predicate {
    let compilation = compile(input);
    assert!(
        compilation.issues.is_empty(),
        "unexpected issues for {input:?}: {:?}",
        compilation.issues
    );
    assert_eq!(compilation.query.predicates.len(), 1, "input {input:?}");
    compilation.query.predicates.into_iter().next().unwrap()
}
