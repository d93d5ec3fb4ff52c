//! Built-in TypeScript detection patterns.
//!
//! TypeScript shares most surface syntax with JavaScript; these patterns
//! target the typed constructs that JavaScript lacks, so a `.ts` file with
//! annotations outscores the generic JavaScript patterns on typed code.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// TypeScript definition:
/// - `ts_type_decl`: `interface`/`type` declarations
/// - `ts_type_annotation`: `name: type` annotations
/// - `ts_typed_import`: `import type { … } from`
/// - `ts_generic`: angle-bracket generic syntax
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "typescript".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "ts_type_decl".to_string(),
                regex: Regex::new(r"\binterface\s+\w+|type\s+\w+\s*=")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Interface or type-alias declaration".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "ts_type_annotation".to_string(),
                regex: Regex::new(
                    r"\w+\s*:\s*(string|number|boolean|any|unknown|object|\{|\[|\w+\[\])",
                )
                .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Type-annotated identifier (name: type)".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "ts_typed_import".to_string(),
                regex: Regex::new(r"import\s+type\s+\{.*\}\s+from")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Type-only import statement".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "ts_generic".to_string(),
                regex: Regex::new(r"<[A-Z][a-zA-Z0-9]*>")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Generic angle-bracket syntax (<T>)".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".ts".to_string(), ".tsx".to_string()],
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
    fn test_type_declarations_match() {
        let def = definition();
        let pattern = pattern_by_id(&def, "ts_type_decl");
        assert!(pattern.regex.is_match("interface Props {"));
        assert!(pattern.regex.is_match("type Result = string | null"));
    }

    #[test]
    fn test_annotation_and_generics_match() {
        let def = definition();
        assert!(
            pattern_by_id(&def, "ts_type_annotation")
                .regex
                .is_match("const name: string = 'x'")
        );
        assert!(pattern_by_id(&def, "ts_generic").regex.is_match("Array<Item>"));
    }

    #[test]
    fn test_typed_import_matches() {
        let def = definition();
        let pattern = pattern_by_id(&def, "ts_typed_import");
        assert!(pattern.regex.is_match("import type { User } from './user'"));
        assert!(!pattern.regex.is_match("import { User } from './user'"));
    }
}
