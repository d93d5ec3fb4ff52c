//! Built-in HTML detection patterns.
//!
//! The doctype line doubles as a first-line pattern: a document starting
//! with `<!DOCTYPE html>` is HTML with near certainty, so it earns the
//! first-line bonus on top of any full-text hits.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// HTML definition:
/// - `html_doctype_header` (first-line): `<!DOCTYPE html>` in the prefix window
/// - `html_document_tags`: doctype or document-structure tags
/// - `html_common_elements`: frequent body elements
/// - `html_attributes`: tags carrying common attributes
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "html".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "html_doctype_header".to_string(),
                regex: Regex::new(r"(?i)<!DOCTYPE\s+html>")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FirstLines,
                description: "HTML doctype declaration near the top of the document".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "html_document_tags".to_string(),
                regex: Regex::new(r"(?i)<!DOCTYPE\s+html>|<html.*>|<body.*>|<head.*>")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Doctype or document-structure tag".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "html_common_elements".to_string(),
                regex: Regex::new(r"(?i)<(div|span|p|a|img|ul|ol|li|table)[\s>]")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Common HTML element".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "html_attributes".to_string(),
                regex: Regex::new(r"(?i)<[a-z]+\s+[^>]*?(class|style|id|href|src)=")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Tag with a common attribute (class, style, id, href, src)"
                    .to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".html".to_string(), ".htm".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::test_support::pattern_by_id;
    use crate::types::PatternScope;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(definition().patterns.len(), 4);
    }

    #[test]
    fn test_doctype_is_first_line_scoped() {
        let def = definition();
        let pattern = pattern_by_id(&def, "html_doctype_header");
        assert_eq!(pattern.scope, PatternScope::FirstLines);
        assert!(pattern.regex.is_match("<!DOCTYPE html>"));
        assert!(pattern.regex.is_match("<!doctype HTML>"));
    }

    #[test]
    fn test_elements_and_attributes_match() {
        let def = definition();
        assert!(
            pattern_by_id(&def, "html_common_elements")
                .regex
                .is_match("<div class=\"row\">")
        );
        assert!(
            pattern_by_id(&def, "html_attributes")
                .regex
                .is_match("<a href=\"/home\">")
        );
    }

    #[test]
    fn test_xml_declaration_not_matched() {
        let def = definition();
        let pattern = pattern_by_id(&def, "html_document_tags");
        assert!(!pattern.regex.is_match("<?xml version=\"1.0\"?>"));
    }
}
