use model::core::value::Value;
use planner::{ColumnMap, MySql, SearchSql};
use search_filter::compile;

fn render(input: &str) -> SearchSql {
    let query = compile(input).query;
    SearchSql::render(&query, &ColumnMap::default(), &MySql).unwrap()
}

#[test]
fn test_mixed_query() {
    let rendered = render("vapor author:!apple product:plugin");
    assert_eq!(
        rendered.sql,
        "LOWER(`repo_owner`) NOT LIKE LOWER(?) \
         AND JSON_CONTAINS(`product_types`, '[\"plugin\"]') \
         AND (LOWER(`package_name`) LIKE LOWER(?) OR LOWER(`summary`) LIKE LOWER(?))"
    );
    assert_eq!(
        rendered.params,
        vec![
            Value::from("apple"),
            Value::from("%vapor%"),
            Value::from("%vapor%"),
        ]
    );
}

#[test]
fn test_keyword_binds_json_document() {
    let rendered = render("keyword:iOS");
    assert_eq!(rendered.sql, "JSON_CONTAINS(`keywords`, ?)");
    assert_eq!(rendered.params, vec![Value::from(r#"["ios"]"#)]);
}

#[test]
fn test_boolean_literal() {
    let rendered = render("archived:yes");
    assert_eq!(rendered.sql, "`is_archived` = TRUE");
}

#[test]
fn test_stars_between() {
    let rendered = render("stars:>10 stars:<1,000");
    assert_eq!(rendered.sql, "`stars` > ? AND `stars` < ?");
    assert_eq!(rendered.params, vec![Value::Int(10), Value::Int(1000)]);
}
