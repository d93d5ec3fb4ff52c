//! Built-in Java properties detection patterns.
//!
//! Deliberately weak on its own: `key=value` plus `#` comments describes
//! half the config files in existence. The override resolver recognizes
//! Spring-style prefixes and embedded filename markers before these
//! patterns get a say.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// Properties definition:
/// - `properties_key_value`: unspaced-prefix `key=value` lines
/// - `properties_comment`: `#` comment lines
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "properties".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "properties_key_value".to_string(),
                regex: Regex::new(r"(?m)^[a-zA-Z0-9_.\-]+\s*=\s*.*$")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Key-value line (key=value)".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "properties_comment".to_string(),
                regex: Regex::new(r"(?m)^#.*$")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Comment line (#)".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".properties".to_string(), ".prop".to_string()],
    }
}
