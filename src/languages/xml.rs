//! Built-in XML detection patterns.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// XML definition:
/// - `xml_declaration_header` (first-line): `<?xml version` in the prefix window
/// - `xml_declaration`: document-leading XML declaration
/// - `xml_namespaced_tag`: tags with a namespace prefix
/// - `xml_namespace_attrs`: elements carrying xmlns/namespaced attributes
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "xml".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "xml_declaration_header".to_string(),
                regex: Regex::new(r"(?i)^<\?xml\s+version")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FirstLines,
                description: "XML declaration at the top of the document".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "xml_declaration".to_string(),
                regex: Regex::new(r"(?i)^<\?xml\s+version")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Document-leading XML declaration".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "xml_namespaced_tag".to_string(),
                regex: Regex::new(r"(?i)<[a-z0-9_-]+:[a-z0-9_-]+\s+")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Tag with a namespace prefix (<ns:tag …)".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "xml_namespace_attrs".to_string(),
                regex: Regex::new(r"(?i)<[a-z0-9_-]+\s+[^>]*?(xmlns:|xml:|\w+:)")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Element with xmlns/namespaced attributes".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".xml".to_string()],
    }
}
