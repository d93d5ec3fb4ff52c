//! Built-in SQL detection patterns.
//!
//! All patterns are case-insensitive: SQL keywords appear upper-, lower-,
//! and mixed-case in the wild.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// SQL definition:
/// - `sql_statement`: DML/DDL statement keywords
/// - `sql_join`: `JOIN … ON|USING` clauses
/// - `sql_where`: `WHERE` clauses with a comparison operator
/// - `sql_aggregate`: aggregate function calls
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "sql".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "sql_statement".to_string(),
                regex: Regex::new(
                    r"(?i)\b(SELECT|INSERT|UPDATE|DELETE|CREATE|ALTER|DROP|TRUNCATE)\s+",
                )
                .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "DML/DDL statement keyword".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "sql_join".to_string(),
                regex: Regex::new(r"(?i)\bJOIN\s+[a-zA-Z_][a-zA-Z0-9_]*\s+(ON|USING)")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "JOIN clause (JOIN table ON/USING)".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "sql_where".to_string(),
                regex: Regex::new(
                    r"(?i)\bWHERE\s+[a-zA-Z_][a-zA-Z0-9_]*\s*(=|<|>|<=|>=|<>|!=|LIKE|IN|BETWEEN)",
                )
                .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "WHERE clause with comparison operator".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "sql_aggregate".to_string(),
                regex: Regex::new(r"(?i)\b(COUNT|SUM|AVG|MIN|MAX)\s*\(")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Aggregate function call".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".sql".to_string()],
    }
}
