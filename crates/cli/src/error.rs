use planner::PlannerError;
use search_filter::CompileErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to deserialize the column map: {0}")]
    ColumnsDeserialize(serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Query is {length} characters long, the limit is {max}")]
    QueryTooLong { length: usize, max: usize },

    #[error("Rejected query: {0}")]
    Rejected(#[from] CompileErrors),

    #[error("Failed to render SQL: {0}")]
    Planner(#[from] PlannerError),
}
