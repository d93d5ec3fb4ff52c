//! Built-in shell-script detection patterns.
//!
//! The shebang is the canonical first-line signal: a script whose first
//! line names a shell interpreter is shell with near certainty regardless
//! of how neutral the rest of the file looks, so it carries the first-line
//! bonus rather than a single cumulative point.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// Shell definition:
/// - `sh_shebang` (first-line): `#!/bin/bash` and friends
/// - `sh_assignment`: `VAR=value` assignment lines
/// - `sh_if_test`: `if [ … ]; then` conditionals
/// - `sh_pipe_redirect`: pipe/redirect idioms
/// - `sh_common_commands`: frequent command names
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "shell".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "sh_shebang".to_string(),
                regex: Regex::new(r"^#!\s*/(usr/)?bin/(env\s+)?(bash|sh|zsh)\b")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FirstLines,
                description: "Shell interpreter shebang on the first line".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "sh_assignment".to_string(),
                regex: Regex::new(r"(?m)^\s*[A-Za-z_][A-Za-z0-9_]*=")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Variable assignment line (VAR=value)".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "sh_if_test".to_string(),
                regex: Regex::new(r"\bif\s+\[\s+.*\s+\];\s+then")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Test conditional (if [ … ]; then)".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "sh_pipe_redirect".to_string(),
                regex: Regex::new(r"\|\s*grep|>\s*/dev/null")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Pipe to grep or redirect to /dev/null".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "sh_common_commands".to_string(),
                regex: Regex::new(r"\b(echo|cd|ls|mkdir|rm|cp|mv)\b")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Common command name".to_string(),
                enabled: true,
            },
        ],
        extensions: vec![".sh".to_string(), ".bash".to_string()],
    }
}
