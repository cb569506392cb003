use crate::{
    error::{CompileErrors, CompileIssue, FilterError},
    filters::Filter,
    predicate::{Predicate, ViewModel},
    registry::FilterRegistry,
};
use search_syntax::{FilterExpression, Token, render_free_text, tokenize};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Validated predicates and free text of one query, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledQuery {
    pub predicates: Vec<Predicate>,
    pub free_text_terms: Vec<String>,
}

impl CompiledQuery {
    pub fn view_models(&self) -> Vec<ViewModel> {
        self.predicates.iter().map(Predicate::view_model).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty() && self.free_text_terms.is_empty()
    }

    pub fn predicates_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Predicate> {
        self.predicates.iter().filter(move |p| p.key == key)
    }

    /// Canonical query text: free text terms first, then filters.
    pub fn to_query_string(&self) -> String {
        self.free_text_terms
            .iter()
            .map(|term| render_free_text(term))
            .chain(
                self.predicates
                    .iter()
                    .map(|p| p.to_expression().to_string()),
            )
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// A copy of this query with the predicate at `index` removed.
    pub fn without_predicate(&self, index: usize) -> CompiledQuery {
        let mut query = self.clone();
        if index < query.predicates.len() {
            query.predicates.remove(index);
        }
        query
    }
}

/// Result of compiling a query. Rejected filters are collected, never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Compilation {
    pub query: CompiledQuery,
    pub issues: Vec<CompileIssue>,
}

impl Compilation {
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn errors(&self) -> impl Iterator<Item = &FilterError> {
        self.issues.iter().map(|issue| &issue.error)
    }

    /// Rejects the whole query if any filter was rejected.
    pub fn into_result(self) -> Result<CompiledQuery, CompileErrors> {
        if self.issues.is_empty() {
            Ok(self.query)
        } else {
            Err(CompileErrors(self.issues))
        }
    }
}

/// Turns query text into predicates using the kinds of one registry.
#[derive(Debug, Clone, Copy)]
pub struct Compiler<'r> {
    registry: &'r FilterRegistry,
}

impl<'r> Compiler<'r> {
    pub fn new(registry: &'r FilterRegistry) -> Self {
        Compiler { registry }
    }

    pub fn registry(&self) -> &'r FilterRegistry {
        self.registry
    }

    pub fn compile(&self, input: &str) -> Compilation {
        let mut compilation = Compilation::default();

        for token in tokenize(input) {
            match token {
                Token::FreeText { text, .. } => compilation.query.free_text_terms.push(text),
                Token::Candidate { key, value, span } => {
                    let expression = FilterExpression::from_candidate(key, &value, span);
                    match self.compile_expression(&expression) {
                        Ok(filter) => compilation.query.predicates.push(filter.predicate()),
                        Err(error) => {
                            debug!(
                                "Skipping filter '{}' at {}: {}",
                                expression, expression.span, error
                            );
                            compilation
                                .issues
                                .push(CompileIssue::new(error, expression.span));
                        }
                    }
                }
            }
        }

        trace!(
            "Compiled query into {} predicates, {} free text terms and {} issues",
            compilation.query.predicates.len(),
            compilation.query.free_text_terms.len(),
            compilation.issues.len()
        );
        compilation
    }

    /// Resolves the key and constructs the matching filter kind.
    pub fn compile_expression(&self, expression: &FilterExpression) -> Result<Filter, FilterError> {
        let kind = self.registry.resolve(&expression.key)?;
        kind.construct(expression)
    }
}

/// Compiles `input` against the standard registry.
pub fn compile(input: &str) -> Compilation {
    Compiler::new(FilterRegistry::standard()).compile(input)
}
