//! Query syntax for package search.
//!
//! A search query is a whitespace separated list of free text terms and
//! `key:value` filters. The value may start with a one character comparison
//! prefix (`!`, `>`, `<`) and may be quoted to keep whitespace:
//!
//! ```
//! use search_syntax::{ComparisonOperator, Token, tokenize};
//!
//! let tokens = tokenize(r#"vapor author:"Apple Inc" stars:>100"#);
//! assert!(matches!(&tokens[0], Token::FreeText { text, .. } if text == "vapor"));
//!
//! let stars = tokens[2].to_expression().unwrap();
//! assert_eq!(stars.key, "stars");
//! assert_eq!(stars.operator, ComparisonOperator::GreaterThan);
//! assert_eq!(stars.raw_value, "100");
//! ```

pub mod expression;
pub mod operator;
pub mod parser;
pub mod span;
pub mod tokenizer;

pub use expression::FilterExpression;
pub use operator::ComparisonOperator;
pub use span::Span;
pub use tokenizer::{render_free_text, token::Token, tokenize};
