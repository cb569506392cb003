use crate::{
    expression::quote_if_needed,
    parser::{QueryParser, Rule},
    span::Span,
    tokenizer::token::Token,
};
use pest::{Parser, iterators::Pair};
use tracing::{trace, warn};

pub mod token;

/// Splits a raw query into free text and filter candidates.
///
/// Tokenizing never fails. Malformed filters are still emitted as
/// candidates so that validation can report them one by one.
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(input)
}

/// Renders a free text term so that it tokenizes back to itself.
pub fn render_free_text(text: &str) -> String {
    if text.contains(':') && !text.starts_with(':') {
        let mut quoted = quote_if_needed(text);
        if !quoted.starts_with('"') {
            quoted = format!("\"{quoted}\"");
        }
        return quoted;
    }
    quote_if_needed(text)
}

pub struct Tokenizer {
    tokens: Vec<Token>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Tokenizer { tokens: Vec::new() }
    }

    pub fn tokenize(&mut self, input: &str) -> Vec<Token> {
        self.tokens.clear();

        match QueryParser::parse(Rule::query, input) {
            Ok(pairs) => {
                for pair in pairs.flatten().filter(|p| p.as_rule() == Rule::token) {
                    self.process_token(pair);
                }
            }
            Err(err) => {
                // The grammar accepts every input; keep searching on plain words anyway.
                warn!("Query grammar rejected input, falling back to whitespace split: {err}");
                self.split_whitespace(input);
            }
        }

        trace!("Tokenized query into {} tokens", self.tokens.len());
        self.tokens.clone()
    }

    fn process_token(&mut self, pair: Pair<Rule>) {
        let span = pair.as_span();
        let mut builder = TokenBuilder::default();

        for segment in pair.into_inner() {
            match segment.as_rule() {
                Rule::bare => builder.push_bare(segment.as_str()),
                Rule::escape => builder.push_literal(unescape(segment.as_str())),
                Rule::dangling_escape => builder.push_literal("\\"),
                Rule::quoted => {
                    builder.open_quote();
                    for part in segment.into_inner() {
                        match part.as_rule() {
                            Rule::quoted_chars => builder.push_literal(part.as_str()),
                            Rule::escape => builder.push_literal(unescape(part.as_str())),
                            Rule::dangling_escape => builder.push_literal("\\"),
                            _ => {}
                        }
                    }
                }
                _ => {}
            }
        }

        if let Some(token) = builder.finish(Span::new(span.start(), span.end())) {
            self.tokens.push(token);
        }
    }

    fn split_whitespace(&mut self, input: &str) {
        let base = input.as_ptr() as usize;
        for word in input.split_whitespace() {
            let start = word.as_ptr() as usize - base;
            self.tokens.push(Token::FreeText {
                text: word.to_string(),
                span: Span::new(start, start + word.len()),
            });
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Tokenizer::new()
    }
}

fn unescape(escape: &str) -> &str {
    // An escape is a backslash followed by exactly one character.
    &escape[1..]
}

/// Accumulates the segments of one token and decides whether it is a
/// filter candidate.
#[derive(Default)]
struct TokenBuilder {
    text: String,
    key: Option<String>,
    seen_quote: bool,
    colon_checked: bool,
}

impl TokenBuilder {
    fn push_bare(&mut self, bare: &str) {
        if self.seen_quote || self.colon_checked {
            self.text.push_str(bare);
            return;
        }

        let Some(idx) = bare.find(':') else {
            self.text.push_str(bare);
            return;
        };

        // Only the first unescaped colon is considered.
        self.colon_checked = true;
        self.text.push_str(&bare[..idx]);
        if self.text.is_empty() {
            self.text.push_str(&bare[idx..]);
        } else {
            self.key = Some(std::mem::take(&mut self.text));
            self.text.push_str(&bare[idx + 1..]);
        }
    }

    fn push_literal(&mut self, literal: &str) {
        self.text.push_str(literal);
    }

    fn open_quote(&mut self) {
        self.seen_quote = true;
    }

    fn finish(self, span: Span) -> Option<Token> {
        match self.key {
            Some(key) => Some(Token::Candidate {
                key,
                value: self.text,
                span,
            }),
            // Quoted whitespace is not a search term.
            None if self.text.trim().is_empty() => None,
            None => Some(Token::FreeText {
                text: self.text,
                span,
            }),
        }
    }
}
