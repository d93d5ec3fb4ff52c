//! Built-in Java detection patterns.
//!
//! Four full-text patterns. Java has no reliable first-line marker (package
//! declarations are common but optional), so everything scores by
//! cumulative match counts.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// Java definition:
/// - `java_class_decl`: visibility-modified class/interface/enum headers
/// - `java_import`: package-qualified import statements
/// - `java_package`: package declarations
/// - `java_annotation`: common annotations (`@Override`, …)
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "java".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "java_class_decl".to_string(),
                regex: Regex::new(
                    r"\b(public|private|protected)\s+(static\s+)?(final\s+)?(class|interface|enum)\s+\w+",
                )
                .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Class/interface/enum declaration with visibility modifier"
                    .to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "java_import".to_string(),
                regex: Regex::new(r"\bimport\s+[a-z0-9_\.]+(\.[A-Z][a-z0-9_]*)+;")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Package-qualified import statement".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "java_package".to_string(),
                regex: Regex::new(r"\bpackage\s+[a-z0-9_\.]+;")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Package declaration".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "java_annotation".to_string(),
                regex: Regex::new(r"@Override|@SuppressWarnings|@Deprecated")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Common annotation (@Override, @SuppressWarnings, @Deprecated)"
                    .to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".java".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::test_support::pattern_by_id;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(definition().patterns.len(), 4);
    }

    #[test]
    fn test_class_declaration_matches() {
        let def = definition();
        let pattern = pattern_by_id(&def, "java_class_decl");
        assert!(pattern.regex.is_match("public class Foo {"));
        assert!(pattern.regex.is_match("private static final class Bar"));
        assert!(pattern.regex.is_match("protected interface Baz"));
        assert!(!pattern.regex.is_match("class Foo {"));
    }

    #[test]
    fn test_package_and_import_match() {
        let def = definition();
        assert!(
            pattern_by_id(&def, "java_package")
                .regex
                .is_match("package com.example.app;")
        );
        assert!(
            pattern_by_id(&def, "java_import")
                .regex
                .is_match("import java.util.ArrayList;")
        );
    }

    #[test]
    fn test_annotation_matches() {
        let def = definition();
        let pattern = pattern_by_id(&def, "java_annotation");
        assert!(pattern.regex.is_match("@Override"));
        assert!(!pattern.regex.is_match("@media screen"));
    }
}
