use model::core::value::Value;
use search_filter::CompiledQuery;
use serde::Serialize;
use tracing::debug;

use crate::{
    columns::ColumnMap,
    error::PlannerError,
    query::{
        dialect::Dialect,
        renderer::{
            Render, Renderer,
            predicate::{FreeTextSql, PredicateSql},
        },
    },
};

/// A parameterized `WHERE` condition. Every user supplied value is in
/// `params`; `sql` only holds column names, operators, placeholders and
/// literals from closed enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSql {
    pub sql: String,
    pub params: Vec<Value>,
}

impl SearchSql {
    /// Predicates and free text terms are joined with `AND`. An empty query
    /// renders to an empty condition.
    pub fn render(
        query: &CompiledQuery,
        columns: &ColumnMap,
        dialect: &dyn Dialect,
    ) -> Result<SearchSql, PlannerError> {
        let mut r = Renderer::new(dialect);

        for (idx, predicate) in query.predicates.iter().enumerate() {
            if idx > 0 {
                r.sql.push_str(" AND ");
            }
            PredicateSql {
                column: columns.column_for(&predicate.key)?,
                predicate,
            }
            .render(&mut r)?;
        }

        for term in &query.free_text_terms {
            if !r.sql.is_empty() {
                r.sql.push_str(" AND ");
            }
            FreeTextSql {
                columns: &columns.text_columns,
                term,
            }
            .render(&mut r)?;
        }

        let (sql, params) = r.finish();
        debug!(
            "Rendered {} condition with {} parameters",
            dialect.name(),
            params.len()
        );
        Ok(SearchSql { sql, params })
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// The condition prefixed with `WHERE`, or nothing for an empty query.
    pub fn where_clause(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.sql)
        }
    }
}
