//! Built-in JavaScript detection patterns.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// JavaScript definition:
/// - `js_function`: `function` declarations and arrow-function bindings
/// - `js_module_import`: ESM import/export statements
/// - `js_dom_api`: DOM manipulation calls
/// - `js_react_hook`: framework hook calls (`useState(`, …)
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "javascript".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "js_function".to_string(),
                regex: Regex::new(
                    r"\bfunction\s+\w+\s*\(|const\s+\w+\s*=\s*(\(.*\)|[a-zA-Z0-9_]+)\s*=>",
                )
                .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Function declaration or arrow-function binding".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "js_module_import".to_string(),
                regex: Regex::new(r"\b(import|export)\s+(\{.*\}|\*|default)\s+from")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "ESM import/export statement".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "js_dom_api".to_string(),
                regex: Regex::new(r"document\.querySelector|getElementById|addEventListener")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "DOM manipulation API call".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "js_react_hook".to_string(),
                regex: Regex::new(r"\buseState\(|useEffect\(|useRef\(|useContext\(")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "React hook call".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".js".to_string(), ".jsx".to_string(), ".mjs".to_string()],
    }
}
