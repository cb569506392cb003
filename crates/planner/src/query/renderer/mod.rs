//! Defines the core rendering trait and context for converting predicates
//! to SQL.

use model::core::value::Value;
use search_filter::BindableValue;

use crate::{error::PlannerError, query::dialect::Dialect};

pub mod predicate;

/// A trait for anything that can be rendered into a SQL fragment.
pub trait Render {
    fn render(&self, renderer: &mut Renderer) -> Result<(), PlannerError>;
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the parameters, and provides
/// access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<Value>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    pub fn add_param(&mut self, value: Value) {
        let placeholder = self.bind(value);
        self.sql.push_str(&placeholder);
    }

    /// Records a parameter and returns its placeholder without writing it.
    pub fn bind(&mut self, value: Value) -> String {
        self.params.push(value);
        self.dialect.get_placeholder(self.params.len() - 1)
    }

    /// Returns the operand text for a scalar value: a placeholder for bound
    /// values, the literal itself otherwise.
    pub fn operand(&mut self, value: &BindableValue) -> String {
        match value {
            BindableValue::Bind(value) => self.bind(value.clone()),
            BindableValue::Literal(value) => self.dialect.render_literal(value),
        }
    }

    pub fn quoted(&self, ident: &str) -> String {
        self.dialect.quote_identifier(ident)
    }
}
