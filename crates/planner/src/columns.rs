use crate::error::PlannerError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maps filter keys to database columns, plus the columns free text is
/// matched against. Only mapped keys can reach the generated SQL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    pub columns: BTreeMap<String, String>,
    pub text_columns: Vec<String>,
}

impl ColumnMap {
    pub fn empty() -> Self {
        ColumnMap {
            columns: BTreeMap::new(),
            text_columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, key: &str, column: &str) -> Self {
        self.columns.insert(key.to_string(), column.to_string());
        self
    }

    pub fn with_text_column(mut self, column: &str) -> Self {
        self.text_columns.push(column.to_string());
        self
    }

    pub fn column_for(&self, key: &str) -> Result<&str, PlannerError> {
        self.columns
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| PlannerError::UnmappedKey {
                key: key.to_string(),
            })
    }
}

/// Columns of the package search view.
impl Default for ColumnMap {
    fn default() -> Self {
        ColumnMap::empty()
            .with_column("author", "repo_owner")
            .with_column("keyword", "keywords")
            .with_column("stars", "stars")
            .with_column("last_activity", "last_activity_at")
            .with_column("last_commit", "last_commit_date")
            .with_column("license", "license")
            .with_column("platform", "platform_compatibility")
            .with_column("product", "product_types")
            .with_column("archived", "is_archived")
            .with_text_column("package_name")
            .with_text_column("summary")
    }
}
