//! Built-in JSON detection patterns.
//!
//! Both patterns anchor at the start of the input (no multiline flag): only
//! a document-leading brace or bracket counts as evidence. JSON embedded in
//! the middle of other text should not pull the score.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// JSON definition:
/// - `json_object_start`: leading `{ "key": value` shape
/// - `json_array_start`: leading `[` with a JSON value
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "json".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "json_object_start".to_string(),
                regex: Regex::new(r#"^\s*\{\s*"[^"]+"\s*:\s*["{\[0-9tfn]"#)
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Document-leading object with a string key".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "json_array_start".to_string(),
                regex: Regex::new(r#"^\s*\[\s*(\{|"|\d|true|false|null)"#)
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Document-leading array of JSON values".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".json".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::test_support::pattern_by_id;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(definition().patterns.len(), 2);
    }

    #[test]
    fn test_object_start_matches() {
        let def = definition();
        let pattern = pattern_by_id(&def, "json_object_start");
        assert!(pattern.regex.is_match(r#"{ "name": "app" }"#));
        assert!(pattern.regex.is_match("  {\"count\": 42}"));
        // Mid-document braces do not count.
        assert!(!pattern.regex.is_match(r#"prose then { "name": 1 }"#));
    }

    #[test]
    fn test_array_start_matches() {
        let def = definition();
        let pattern = pattern_by_id(&def, "json_array_start");
        assert!(pattern.regex.is_match(r#"[ {"id": 1} ]"#));
        assert!(pattern.regex.is_match("[true, false]"));
        assert!(!pattern.regex.is_match("let x = [1, 2]"));
    }
}
