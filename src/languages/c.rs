//! Built-in C detection patterns.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// C definition:
/// - `c_include`: `#include <header.h>` directives
/// - `c_function_def`: free function definitions at line start
/// - `c_struct`: `struct` blocks
/// - `c_std_header`: standard library header names
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "c".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "c_include".to_string(),
                regex: Regex::new(r"(?m)^\s*#include\s+<[a-zA-Z0-9_./]+\.h>")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Preprocessor include of a .h header".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "c_function_def".to_string(),
                regex: Regex::new(r"(?m)^[a-zA-Z0-9_]+\s+[a-zA-Z0-9_]+\s*\([^;{]*\)\s*\{")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Free function definition (type name(args) {)".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "c_struct".to_string(),
                regex: Regex::new(r"\bstruct\s+[a-zA-Z0-9_]+\s*\{")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Struct block".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "c_std_header".to_string(),
                regex: Regex::new(r"#include\s+<(stdio|stdlib|string|math|ctype)\.h>")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Standard library header (stdio.h, stdlib.h, …)".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".c".to_string(), ".h".to_string()],
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
    fn test_include_matches() {
        let def = definition();
        assert!(
            pattern_by_id(&def, "c_include")
                .regex
                .is_match("#include <sys/types.h>")
        );
        assert!(
            pattern_by_id(&def, "c_std_header")
                .regex
                .is_match("#include <stdio.h>")
        );
    }

    #[test]
    fn test_function_def_matches() {
        let def = definition();
        let pattern = pattern_by_id(&def, "c_function_def");
        assert!(pattern.regex.is_match("int main(void) {"));
        assert!(pattern.regex.is_match("static_t helper(int a, int b) {"));
        // Declarations (ending in a semicolon) are not definitions.
        assert!(!pattern.regex.is_match("int main(void);"));
    }

    #[test]
    fn test_struct_matches() {
        let def = definition();
        assert!(
            pattern_by_id(&def, "c_struct")
                .regex
                .is_match("struct point { int x; int y; };")
        );
    }
}
