use chrono::NaiveDate;
use model::core::value::Value;
use planner::{ColumnMap, PlannerError, Postgres, SearchSql};
use search_filter::compile;
use tracing_test::traced_test;

fn render(input: &str) -> SearchSql {
    let query = compile(input).query;
    SearchSql::render(&query, &ColumnMap::default(), &Postgres).unwrap()
}

#[test]
#[traced_test]
fn test_mixed_query() {
    let rendered = render("vapor author:apple stars:>100");
    assert_eq!(
        rendered.sql,
        r#""repo_owner" ILIKE $1 AND "stars" > $2 AND ("package_name" ILIKE $3 OR "summary" ILIKE $4)"#
    );
    assert_eq!(
        rendered.params,
        vec![
            Value::from("apple"),
            Value::Int(100),
            Value::from("%vapor%"),
            Value::from("%vapor%"),
        ]
    );
    assert!(logs_contain("Rendered PostgreSQL condition with 4 parameters"));
}

#[test]
fn test_date_is_bound() {
    let rendered = render("last_commit:<2024-01-01");
    assert_eq!(rendered.sql, r#""last_commit_date" < $1"#);
    assert_eq!(
        rendered.params,
        vec![Value::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())]
    );
}

#[test]
fn test_platform_is_inlined() {
    let rendered = render("platform:macos,ios");
    assert_eq!(
        rendered.sql,
        r#""platform_compatibility" @> '{"ios", "macos"}'"#
    );
    assert!(rendered.params.is_empty());
}

#[test]
fn test_negated_keyword() {
    let rendered = render("keyword:!HTTP");
    assert_eq!(rendered.sql, r#"NOT ("keywords" @> $1)"#);
    assert_eq!(
        rendered.params,
        vec![Value::StringArray(vec!["http".to_string()])]
    );
}

#[test]
fn test_license_compatibility() {
    let rendered = render("license:!compatible archived:false");
    assert!(rendered.sql.starts_with(r#""license" NOT IN ('mit', 'apache-2.0', "#));
    assert!(!rendered.sql.contains("gpl"));
    assert!(rendered.sql.ends_with(r#" AND "is_archived" = false"#));
    assert!(rendered.params.is_empty());
}

#[test]
fn test_empty_query() {
    let rendered = render("  ");
    assert!(rendered.is_empty());
    assert_eq!(rendered.where_clause(), "");

    let rendered = render("stars:5");
    assert_eq!(rendered.where_clause(), r#"WHERE "stars" = $1"#);
}

#[test]
fn test_invalid_filters_are_not_rendered() {
    let rendered = render("stars:lots bogus:1 author:apple");
    assert_eq!(rendered.sql, r#""repo_owner" ILIKE $1"#);
}

#[test]
fn test_unmapped_key() {
    let query = compile("author:apple").query;
    let err = SearchSql::render(&query, &ColumnMap::empty(), &Postgres).unwrap_err();
    assert_eq!(
        err,
        PlannerError::UnmappedKey {
            key: "author".to_string()
        }
    );
}

#[test]
fn test_free_text_needs_columns() {
    let query = compile("vapor").query;
    let columns = ColumnMap::empty();
    assert_eq!(
        SearchSql::render(&query, &columns, &Postgres).unwrap_err(),
        PlannerError::NoTextColumns
    );
}
