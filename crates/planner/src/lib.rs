//! SQL projection of compiled search queries.
//!
//! Predicates become parameterized `WHERE` fragments on mapped columns and
//! free text terms become `LIKE` matches across the searchable text columns.

pub mod columns;
pub mod error;
pub mod query;
pub mod search;

pub use columns::ColumnMap;
pub use error::PlannerError;
pub use query::dialect::{Dialect, MySql, Postgres};
pub use search::SearchSql;
