use search_filter::compile;
use tracing_test::traced_test;

#[test]
#[traced_test]
fn test_skipped_filters_are_logged() {
    let compilation = compile("stars:abc bogus:1");
    assert_eq!(compilation.issues.len(), 2);

    assert!(logs_contain("Skipping filter 'stars:abc'"));
    assert!(logs_contain("unknown filter 'bogus'"));
}

#[test]
#[traced_test]
fn test_summary_is_logged() {
    compile("vapor author:apple");
    assert!(logs_contain(
        "Compiled query into 1 predicates, 1 free text terms and 0 issues"
    ));
}
