use clap::ValueEnum;
use planner::{Dialect, MySql, Postgres};
use search_filter::{Compilation, CompileErrors, Compiler, FilterRegistry};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::{env::EnvManager, error::CliError};

pub const MAX_QUERY_LENGTH_VAR: &str = "PKGSEARCH_MAX_QUERY_LENGTH";
pub const DIALECT_VAR: &str = "PKGSEARCH_DIALECT";
pub const STRICT_VAR: &str = "PKGSEARCH_STRICT";

pub const DEFAULT_MAX_QUERY_LENGTH: usize = 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DialectKind {
    #[default]
    Postgres,
    Mysql,
}

impl DialectKind {
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            DialectKind::Postgres => &Postgres,
            DialectKind::Mysql => &MySql,
        }
    }
}

impl FromStr for DialectKind {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DialectKind::Postgres),
            "mysql" => Ok(DialectKind::Mysql),
            other => Err(CliError::Config(format!(
                "{DIALECT_VAR} must be 'postgres' or 'mysql', got '{other}'"
            ))),
        }
    }
}

/// Settings of the request boundary around the compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_query_length: usize,
    pub dialect: DialectKind,
    /// Reject a query outright when any of its filters is invalid.
    pub strict: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_query_length: DEFAULT_MAX_QUERY_LENGTH,
            dialect: DialectKind::default(),
            strict: false,
        }
    }
}

impl SearchConfig {
    pub fn from_env(env: &EnvManager) -> Result<Self, CliError> {
        let mut config = SearchConfig::default();

        if let Some(raw) = env.get(MAX_QUERY_LENGTH_VAR) {
            config.max_query_length = raw.trim().parse().map_err(|_| {
                CliError::Config(format!(
                    "{MAX_QUERY_LENGTH_VAR} must be a non-negative integer, got '{raw}'"
                ))
            })?;
        }
        if let Some(raw) = env.get(DIALECT_VAR) {
            config.dialect = raw.parse()?;
        }
        if let Some(raw) = env.get(STRICT_VAR) {
            config.strict = parse_flag(STRICT_VAR, raw)?;
        }

        if config.max_query_length == 0 {
            warn!("{MAX_QUERY_LENGTH_VAR} is 0, every non-empty query will be rejected");
        }
        debug!("Loaded search config: {config:?}");
        Ok(config)
    }

    /// Checks the query length, compiles it and applies strict mode.
    pub fn compile(&self, registry: &FilterRegistry, input: &str) -> Result<Compilation, CliError> {
        let length = input.chars().count();
        if length > self.max_query_length {
            return Err(CliError::QueryTooLong {
                length,
                max: self.max_query_length,
            });
        }

        let compilation = Compiler::new(registry).compile(input);
        if self.strict && compilation.has_issues() {
            return Err(CliError::Rejected(CompileErrors(compilation.issues)));
        }
        Ok(compilation)
    }
}

fn parse_flag(var: &str, raw: &str) -> Result<bool, CliError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(CliError::Config(format!(
            "{var} must be true or false, got '{raw}'"
        ))),
    }
}
