//! Built-in C++ detection patterns.
//!
//! The stream-operator pattern also fires on bare `>>`, which shows up in
//! nested generics in other languages. That imprecision is tolerated: C++
//! needs corroborating hits (namespace, templates, `std::`) to win anyway.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// C++ definition:
/// - `cpp_namespace`: namespace declarations
/// - `cpp_class_inheritance`: class declarations with optional inheritance list
/// - `cpp_template`: `template<typename T>` headers
/// - `cpp_stream_ops`: iostream insertion/extraction operators
/// - `cpp_std_qualifier`: `std::` qualified names
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "cpp".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "cpp_namespace".to_string(),
                regex: Regex::new(r"\bnamespace\s+[a-zA-Z0-9_]+")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Namespace declaration".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "cpp_class_inheritance".to_string(),
                regex: Regex::new(
                    r"\bclass\s+[a-zA-Z0-9_]+(\s*:\s*(public|protected|private)\s+[a-zA-Z0-9_]+)?\s*\{",
                )
                .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Class declaration, optionally with inheritance list".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "cpp_template".to_string(),
                regex: Regex::new(r"template\s*<(typename|class)\s+[a-zA-Z0-9_]+>")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Template header (template<typename T>)".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "cpp_stream_ops".to_string(),
                regex: Regex::new(r"\b(cout|cin|cerr)\s*<<|>>")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Stream insertion/extraction operator".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "cpp_std_qualifier".to_string(),
                regex: Regex::new(r"\bstd::[a-zA-Z0-9_]+")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "std:: qualified name".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".cpp".to_string(), ".cc".to_string(), ".hpp".to_string()],
    }
}
