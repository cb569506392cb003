use search_syntax::{ComparisonOperator, FilterExpression, Token, tokenize};

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "vapor",
    "vapor author:apple stars:>100",
    r#""" "" ""#,
    r#"" ""#,
    "vapor \" \" \"\t\"",
    r#"author:"" stars:"#,
    r#"  "swift   nio"   keyword:server  "#,
    r#"unterminated "quote here"#,
    r"trailing\",
    r#"mixed\ "quoted"\:colon"#,
    ":::",
    "a:b:c d::e",
];

#[test]
fn test_never_produces_empty_free_text() {
    for input in SAMPLES {
        for token in tokenize(input) {
            if let Token::FreeText { text, .. } = &token {
                assert!(!text.trim().is_empty(), "blank free text for {input:?}");
            }
        }
    }
}

#[test]
fn test_spans_are_ordered_and_inside_input() {
    for input in SAMPLES {
        let tokens = tokenize(input);
        let mut last_end = 0;
        for token in &tokens {
            let span = token.span();
            assert!(span.start >= last_end, "overlapping spans for {input:?}");
            assert!(span.end <= input.len());
            assert!(!span.is_empty());
            last_end = span.end;
        }
    }
}

#[test]
fn test_candidates_have_non_empty_keys() {
    for input in SAMPLES {
        for token in tokenize(input) {
            if let Token::Candidate { key, .. } = &token {
                assert!(!key.is_empty(), "empty key for {input:?}");
            }
        }
    }
}

#[test]
fn test_expression_display_tokenizes_back() {
    let cases = [
        FilterExpression::new("author", ComparisonOperator::Is, "apple"),
        FilterExpression::new("author", ComparisonOperator::IsNot, "Apple Inc"),
        FilterExpression::new("stars", ComparisonOperator::GreaterThan, "1,000"),
        FilterExpression::new("keyword", ComparisonOperator::LessThan, r#"odd "value""#),
    ];

    for expected in cases {
        let rendered = expected.to_string();
        let tokens = tokenize(&rendered);
        assert_eq!(tokens.len(), 1, "rendered {rendered:?}");
        let parsed = tokens[0].to_expression().expect("candidate");
        assert_eq!(parsed.key, expected.key);
        assert_eq!(parsed.operator, expected.operator);
        assert_eq!(parsed.raw_value, expected.raw_value);
    }
}
