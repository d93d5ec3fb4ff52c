//! Built-in language pattern sets.
//!
//! One module per supported language, each exposing a `definition()`
//! constructor. [`builtin_definitions`] assembles them in canonical
//! registry order — scoring is additive, but ties resolve to the earliest
//! entry, so this order is part of the classification contract.

pub mod c;
pub mod cpp;
pub mod css;
pub mod dockerfile;
pub mod html;
pub mod ini;
pub mod java;
pub mod javascript;
pub mod json;
pub mod properties;
pub mod python;
pub mod ruby;
pub mod shell;
pub mod sql;
pub mod typescript;
pub mod xml;
pub mod yaml;

use crate::types::LanguageDefinition;

/// All built-in definitions in canonical registry order.
pub fn builtin_definitions() -> Vec<LanguageDefinition> {
    vec![
        java::definition(),
        javascript::definition(),
        typescript::definition(),
        html::definition(),
        css::definition(),
        json::definition(),
        yaml::definition(),
        python::definition(),
        sql::definition(),
        shell::definition(),
        xml::definition(),
        c::definition(),
        cpp::definition(),
        ruby::definition(),
        dockerfile::definition(),
        ini::definition(),
        properties::definition(),
    ]
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_definition_count() {
        assert_eq!(builtin_definitions().len(), 17);
    }

    #[test]
    fn test_language_ids_unique() {
        let definitions = builtin_definitions();
        let ids: HashSet<&str> = definitions.iter().map(|d| d.language.as_str()).collect();
        assert_eq!(ids.len(), definitions.len());
    }

    #[test]
    fn test_every_definition_has_patterns() {
        for definition in builtin_definitions() {
            assert!(
                !definition.patterns.is_empty(),
                "{} has no patterns",
                definition.language
            );
            assert!(
                definition.enabled_pattern_count() > 0,
                "{} has no enabled patterns",
                definition.language
            );
        }
    }

    #[test]
    fn test_pattern_ids_unique_within_definition() {
        for definition in builtin_definitions() {
            let ids: HashSet<&str> = definition.patterns.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(
                ids.len(),
                definition.patterns.len(),
                "duplicate pattern id in {}",
                definition.language
            );
        }
    }

    #[test]
    fn test_canonical_order() {
        let order: Vec<String> = builtin_definitions()
            .into_iter()
            .map(|d| d.language)
            .collect();
        assert_eq!(
            order,
            vec![
                "java",
                "javascript",
                "typescript",
                "html",
                "css",
                "json",
                "yaml",
                "python",
                "sql",
                "shell",
                "xml",
                "c",
                "cpp",
                "ruby",
                "dockerfile",
                "ini",
                "properties",
            ]
        );
    }
}
