//! Built-in Ruby detection patterns.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// Ruby definition:
/// - `rb_class_decl`: `class X < Y` declarations
/// - `rb_def`: `def` method definitions
/// - `rb_symbol`: symbol literals after a word character (`key:name`)
/// - `rb_block`: `do |args|` block openers
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "ruby".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "rb_class_decl".to_string(),
                regex: Regex::new(r"\bclass\s+[A-Z][a-zA-Z0-9_]*(\s*<\s*[A-Z][a-zA-Z0-9_:]*)?")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Class declaration, optionally with superclass".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "rb_def".to_string(),
                regex: Regex::new(r"\bdef\s+[a-zA-Z0-9_]+")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Method definition (def name)".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "rb_symbol".to_string(),
                regex: Regex::new(r"\b:[a-zA-Z0-9_]+")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Symbol literal".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "rb_block".to_string(),
                regex: Regex::new(r"(?m)\bdo\s*\|[^|]*\|\s*$")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Block opener with arguments (do |args|)".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".rb".to_string()],
    }
}
