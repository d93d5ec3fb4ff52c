//! Built-in INI detection patterns.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// INI definition:
/// - `ini_section_header`: `[section]` headers
/// - `ini_key_value`: `key = value` lines
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "ini".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "ini_section_header".to_string(),
                regex: Regex::new(r"(?m)^\s*\[[a-zA-Z0-9_.\-]+\]\s*$")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Section header ([section])".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "ini_key_value".to_string(),
                regex: Regex::new(r"(?m)^\s*[a-zA-Z0-9_.]+\s*=\s*.*$")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Key-value line (key = value)".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".ini".to_string(), ".cfg".to_string(), ".conf".to_string()],
    }
}
