//! SQL rendering tests
//!
//! These tests compile queries with the standard registry and render them
//! against the default column map in each dialect.

mod mysql;
mod postgres;
mod safety;
