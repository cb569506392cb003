use crate::error::CliError;
use planner::{Dialect, SearchSql};
use search_filter::{Compilation, CompileIssue, FilterKind};
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
struct SqlReport<'a> {
    dialect: String,
    #[serde(flatten)]
    sql: &'a SearchSql,
    issues: &'a [CompileIssue],
}

pub fn compilation_json(compilation: &Compilation) -> Result<String, CliError> {
    let json = serde_json::to_string_pretty(compilation)?;
    Ok(json)
}

pub fn compilation_text(compilation: &Compilation) -> String {
    let query = &compilation.query;
    let mut out = String::new();

    let _ = writeln!(out, "query: {}", query.to_query_string());
    if !query.free_text_terms.is_empty() {
        let _ = writeln!(out, "free text: {}", query.free_text_terms.join(", "));
    }
    if !query.predicates.is_empty() {
        let _ = writeln!(out, "filters:");
        for (view, predicate) in query.view_models().iter().zip(&query.predicates) {
            let _ = writeln!(out, "  - {:<40} ({predicate})", view.description());
        }
    }
    write_issues(&mut out, &compilation.issues);
    out
}

pub fn sql_json(
    rendered: &SearchSql,
    dialect: &dyn Dialect,
    issues: &[CompileIssue],
) -> Result<String, CliError> {
    let report = SqlReport {
        dialect: dialect.name(),
        sql: rendered,
        issues,
    };
    let json = serde_json::to_string_pretty(&report)?;
    Ok(json)
}

pub fn sql_text(rendered: &SearchSql, issues: &[CompileIssue]) -> String {
    let mut out = String::new();
    if rendered.is_empty() {
        let _ = writeln!(out, "-- empty query, no condition");
    } else {
        let _ = writeln!(out, "{}", rendered.where_clause());
    }
    for (idx, param) in rendered.params.iter().enumerate() {
        let _ = writeln!(out, "  [{}] {param}", idx + 1);
    }
    write_issues(&mut out, issues);
    out
}

pub fn kinds_json<'a>(kinds: impl Iterator<Item = &'a FilterKind>) -> Result<String, CliError> {
    let kinds: Vec<_> = kinds.collect();
    let json = serde_json::to_string_pretty(&kinds)?;
    Ok(json)
}

pub fn kinds_text<'a>(kinds: impl Iterator<Item = &'a FilterKind>) -> String {
    let mut out = String::new();
    for kind in kinds {
        let forms = kind
            .supported_operators
            .iter()
            .map(|op| format!("{}:{}value", kind.key, op.prefix()))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{:<14} {}", kind.key, kind.summary);
        let _ = writeln!(out, "{:<14} {forms}", "");
    }
    out
}

fn write_issues(out: &mut String, issues: &[CompileIssue]) {
    if issues.is_empty() {
        return;
    }
    let _ = writeln!(out, "issues:");
    for issue in issues {
        let _ = writeln!(out, "  - {}: {}", issue.span, issue.error);
    }
}
