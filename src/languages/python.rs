//! Built-in Python detection patterns.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// Python definition:
/// - `py_def`: function definition headers
/// - `py_class`: class definition headers
/// - `py_import`: `import`/`from` statements
/// - `py_indent`: indented statement lines (multiline indentation cue)
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "python".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "py_def".to_string(),
                regex: Regex::new(r"\bdef\s+[a-zA-Z_][a-zA-Z0-9_]*\s*\(")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Function definition header (def name()".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "py_class".to_string(),
                regex: Regex::new(r"\bclass\s+[A-Z][a-zA-Z0-9_]*(\([^)]*\))?:")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Class definition header ending in a colon".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "py_import".to_string(),
                regex: Regex::new(r"\b(import|from)\s+[a-zA-Z_][a-zA-Z0-9_.]*")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Import statement (import x / from x)".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "py_indent".to_string(),
                regex: Regex::new(r"(?m)^\s{2,}[a-zA-Z0-9_]+")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Indented statement line".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".py".to_string()],
    }
}
