//! Built-in Dockerfile detection patterns.
//!
//! A `FROM` instruction on the first line is definitive enough to carry the
//! first-line bonus; the instruction-keyword pattern then accumulates one
//! point per instruction line in the body.

use regex::Regex;

use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

/// Dockerfile definition:
/// - `dockerfile_from_header` (first-line): leading `FROM` instruction
/// - `dockerfile_instruction`: any instruction keyword at line start
/// - `dockerfile_run_package_manager`: `RUN apt-get/npm/pip` idioms
pub fn definition() -> LanguageDefinition {
    LanguageDefinition {
        language: "dockerfile".to_string(),
        patterns: vec![
            DetectionPattern {
                id: "dockerfile_from_header".to_string(),
                regex: Regex::new(r"(?i)^FROM\s+")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FirstLines,
                description: "FROM instruction at the top of the file".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "dockerfile_instruction".to_string(),
                regex: Regex::new(
                    r"(?mi)^(FROM|RUN|CMD|LABEL|EXPOSE|ENV|ADD|COPY|ENTRYPOINT|VOLUME|USER|WORKDIR|ARG|ONBUILD|STOPSIGNAL|HEALTHCHECK|SHELL)\s+",
                )
                .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "Instruction keyword at line start".to_string(),
                enabled: true,
            },
            DetectionPattern {
                id: "dockerfile_run_package_manager".to_string(),
                regex: Regex::new(r"(?i)\bRUN\s+apt-get\s+|RUN\s+npm\s+|RUN\s+pip\s+")
                    .expect("regex pattern is valid and should always compile"),
                scope: PatternScope::FullText,
                description: "RUN invoking a package manager".to_string(),
                enabled: true,
            },
        ],
        extensions: vec!["Dockerfile".to_string()],
    }
}
