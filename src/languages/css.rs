//! Built-in CSS detection patterns.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// CSS definition:
/// - `css_rule_block`: selector followed by a `{ property: value }` block
/// - `css_media_query`: `@media` queries
/// - `css_keyframes`: `@keyframes` animations
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "css".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "css_rule_block".to_string(),
                regex: Regex::new(r"(?i)[.#]?[a-z0-9_\-]+\s*\{[^}]*:[^}]*\}")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Selector with a declaration block".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "css_media_query".to_string(),
                regex: Regex::new(r"(?i)@media\s+")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "@media query".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "css_keyframes".to_string(),
                regex: Regex::new(r"(?i)@keyframes\s+")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "@keyframes animation".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".css".to_string()],
    }
}
