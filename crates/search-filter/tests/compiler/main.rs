//! Compiler integration tests
//!
//! These tests compile whole query strings against the standard registry
//! and check predicates, view models and reported issues.

mod helpers;

mod kinds;
mod logging;
mod operators;
mod round_trip;
