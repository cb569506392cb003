//! Defines the `Dialect` trait for database-specific SQL syntax.

use model::core::value::Value;

pub trait Dialect: Send + Sync {
    /// Wraps an identifier (like a table or column name) in the correct
    /// quotation marks for the dialect.
    ///
    /// - PostgreSQL uses double quotes: `"my_column"`
    /// - MySQL uses backticks: `` `my_column` ``
    fn quote_identifier(&self, ident: &str) -> String;

    /// Returns the placeholder for a parameterized query.
    ///
    /// - PostgreSQL uses `$1`, `$2`, etc.
    /// - MySQL uses `?`
    fn get_placeholder(&self, index: usize) -> String;

    /// Returns the name of the dialect (e.g., "PostgreSQL", "MySQL").
    fn name(&self) -> String;

    /// Case-insensitive pattern match of `column` against `operand`.
    fn case_insensitive_like(&self, column: &str, operand: &str, negated: bool) -> String;

    /// Tests that the array stored in `column` holds every element of `operand`.
    fn array_contains(&self, column: &str, operand: &str, negated: bool) -> String;

    /// Converts array elements into the value bound for an array operand.
    fn array_value(&self, items: &[String]) -> Value;

    /// Renders a trusted value inline.
    fn render_literal(&self, value: &Value) -> String {
        value.to_string()
    }

    /// Escapes `%`, `_` and the escape character itself so that `text` only
    /// matches literally inside a `LIKE` pattern.
    fn escape_like(&self, text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for ch in text.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                escaped.push('\\');
            }
            escaped.push(ch);
        }
        escaped
    }
}

#[derive(Debug, Clone)]
pub struct Postgres;

impl Dialect for Postgres {
    fn quote_identifier(&self, ident: &str) -> String {
        format!(r#""{}""#, ident.replace('"', r#""""#))
    }

    fn get_placeholder(&self, index: usize) -> String {
        // PostgreSQL uses $1, $2, etc.
        format!("${}", index + 1)
    }

    fn name(&self) -> String {
        "PostgreSQL".into()
    }

    fn case_insensitive_like(&self, column: &str, operand: &str, negated: bool) -> String {
        let not = if negated { "NOT " } else { "" };
        format!("{column} {not}ILIKE {operand}")
    }

    fn array_contains(&self, column: &str, operand: &str, negated: bool) -> String {
        if negated {
            format!("NOT ({column} @> {operand})")
        } else {
            format!("{column} @> {operand}")
        }
    }

    fn array_value(&self, items: &[String]) -> Value {
        Value::StringArray(items.to_vec())
    }
}

#[derive(Debug, Clone)]
pub struct MySql;

impl Dialect for MySql {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("`{}`", ident.replace('`', "``"))
    }

    fn get_placeholder(&self, _index: usize) -> String {
        // MySQL uses ?
        "?".into()
    }

    fn name(&self) -> String {
        "MySQL".into()
    }

    fn case_insensitive_like(&self, column: &str, operand: &str, negated: bool) -> String {
        let not = if negated { "NOT " } else { "" };
        format!("LOWER({column}) {not}LIKE LOWER({operand})")
    }

    fn array_contains(&self, column: &str, operand: &str, negated: bool) -> String {
        let not = if negated { "NOT " } else { "" };
        format!("{not}JSON_CONTAINS({column}, {operand})")
    }

    /// Arrays are stored as JSON documents.
    fn array_value(&self, items: &[String]) -> Value {
        Value::String(json_array(items))
    }

    fn render_literal(&self, value: &Value) -> String {
        match value {
            Value::StringArray(items) => Value::String(json_array(items)).to_string(),
            Value::Boolean(true) => "TRUE".into(),
            Value::Boolean(false) => "FALSE".into(),
            other => other.to_string(),
        }
    }
}

fn json_array(items: &[String]) -> String {
    serde_json::Value::from(items.to_vec()).to_string()
}
