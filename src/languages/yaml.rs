//! Built-in YAML detection patterns.
//!
//! YAML is deliberately under-weighted relative to the config-format
//! overrides: bare `key: value` text is ambiguous between YAML, INI, and
//! properties, and the override resolver settles that ambiguity with
//! format-specific anchors before these patterns ever run.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// YAML definition:
/// - `yaml_key_value`: `key: value` lines
/// - `yaml_list_item`: `- item` list markers
/// - `yaml_doc_start`: `---` document separators
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "yaml".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "yaml_key_value".to_string(),
                regex: Regex::new(r"(?m)^\s*[a-zA-Z0-9_-]+\s*:\s*[^\s{\[].*$")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Key-value pair (key: value)".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "yaml_list_item".to_string(),
                regex: Regex::new(r"(?m)^\s*-\s+[a-zA-Z0-9_]")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "List item (- item)".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "yaml_doc_start".to_string(),
                regex: Regex::new(r"(?m)^---(\s.*)?$")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Document start marker (---)".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".yaml".to_string(), ".yml".to_string()],
    }
}
