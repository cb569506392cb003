use planner::{ColumnMap, Dialect, MySql, Postgres, SearchSql};
use search_filter::compile;

const HOSTILE: &[&str] = &[
    r#"author:"x' OR '1'='1""#,
    r#"keyword:"'); DROP TABLE packages; --""#,
    r#""' UNION SELECT password FROM users --""#,
    r#"author:!"$1 \" OR 1=1""#,
    "100%_match",
];

fn assert_user_text_is_bound(dialect: &dyn Dialect, placeholder: &str) {
    for input in HOSTILE {
        let query = compile(input).query;
        let rendered = SearchSql::render(&query, &ColumnMap::default(), dialect).unwrap();

        for needle in ["OR '1'", "DROP", "UNION", "OR 1=1", "match"] {
            assert!(
                !rendered.sql.contains(needle),
                "{} leaked {needle:?} from {input:?}: {}",
                dialect.name(),
                rendered.sql
            );
        }
        assert_eq!(
            rendered.sql.matches(placeholder).count(),
            rendered.params.len(),
            "{input:?}: {}",
            rendered.sql
        );
    }
}

#[test]
fn test_postgres_binds_user_text() {
    assert_user_text_is_bound(&Postgres, "$");
}

#[test]
fn test_mysql_binds_user_text() {
    assert_user_text_is_bound(&MySql, "?");
}

#[test]
fn test_like_wildcards_are_escaped() {
    let query = compile("100%_match").query;
    let rendered = SearchSql::render(&query, &ColumnMap::default(), &Postgres).unwrap();
    assert_eq!(
        rendered.params[0],
        model::core::value::Value::from(r"%100\%\_match%")
    );
}

#[test]
fn test_column_names_cannot_break_out_of_quotes() {
    let query = compile("stars:>5").query;

    let columns = ColumnMap::empty().with_column("stars", r#"stars" OR 1=1 --"#);
    let rendered = SearchSql::render(&query, &columns, &Postgres).unwrap();
    assert_eq!(rendered.sql, r#""stars"" OR 1=1 --" > $1"#);

    let columns = ColumnMap::empty().with_column("stars", "stars` OR 1=1 --");
    let rendered = SearchSql::render(&query, &columns, &MySql).unwrap();
    assert_eq!(rendered.sql, "`stars`` OR 1=1 --` > ?");
}
