use model::core::relation::BinaryRelation;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    #[error("no column is mapped for filter '{key}'")]
    UnmappedKey { key: String },

    #[error("relation '{relation}' cannot take a {value_type} operand")]
    UnsupportedOperand {
        relation: BinaryRelation,
        value_type: &'static str,
    },

    #[error("free text search requires at least one text column")]
    NoTextColumns,
}
