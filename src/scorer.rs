//! Content scoring: evaluates every registry pattern against an input.
//!
//! Scoring is purely additive. First-line patterns are checked against a
//! bounded prefix window and add a fixed bonus; full-text patterns add one
//! point per non-overlapping match across the entire input. The result is
//! an ephemeral [`ScoreTable`] rebuilt on every call.

use crate::registry::LanguageRegistry;
use crate::types::{PatternScope, ScoreTable};

/// Number of leading lines forming the first-line prefix window.
pub const FIRST_LINE_WINDOW: usize = 10;

/// Score added for each first-line pattern that matches the prefix window.
///
/// An order of magnitude above a single full-text hit: declarations like
/// shebangs or doctype lines are near-certain language signals.
pub const FIRST_LINE_BONUS: u32 = 10;

/// The first [`FIRST_LINE_WINDOW`] lines of `text`, joined with newlines.
///
/// Inputs shorter than the window are used whole. Splitting is on `\n`
/// alone so carriage returns stay attached to their lines, exactly as the
/// patterns expect.
fn first_line_window(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').take(FIRST_LINE_WINDOW).collect();
    lines.join("\n")
}

/// Score `text` against every definition in `registry`.
///
/// Returns one entry per registered language, default 0, in registry
/// order. A pattern that matches zero times contributes 0 and never fails
/// the call; a pathological pattern can only depress its own language's
/// score.
///
/// Known precision limitation, kept intentionally: full-text patterns count
/// every non-overlapping match, so a language with short, generic patterns
/// (INI's bare `key = value`, say) can outscore a more specific language on
/// large inputs through sheer repetition.
pub fn score<'r>(registry: &'r LanguageRegistry, text: &str) -> ScoreTable<'r> {
    let window = first_line_window(text);
    let mut entries = Vec::with_capacity(registry.len());

    for definition in registry.definitions() {
        let mut total: u32 = 0;
        for pattern in &definition.patterns {
            if !pattern.enabled {
                continue;
            }
            match pattern.scope {
                PatternScope::FirstLines => {
                    if pattern.regex.is_match(&window) {
                        total += FIRST_LINE_BONUS;
                        log::trace!(
                            "score {}: first-line pattern {} hit (+{})",
                            definition.language,
                            pattern.id,
                            FIRST_LINE_BONUS
                        );
                    }
                }
                PatternScope::FullText => {
                    let hits = pattern.regex.find_iter(text).count() as u32;
                    if hits > 0 {
                        log::trace!(
                            "score {}: pattern {} matched {} time(s)",
                            definition.language,
                            pattern.id,
                            hits
                        );
                    }
                    total += hits;
                }
            }
        }
        entries.push((definition.language.as_str(), total));
    }

    let table = ScoreTable::new(entries);
    if let Some((language, top)) = table.best() {
        log::debug!("score table leader: {language} with {top} (of {} languages)", table.len());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBuilder;
    use crate::types::{DetectionPattern, LanguageDefinition};
    use regex::Regex;

    fn single_language(language: &str, patterns: Vec<DetectionPattern>) -> LanguageRegistry {
        RegistryBuilder::new()
            .definition(LanguageDefinition {
                language: language.to_string(),
                patterns,
                extensions: vec![],
            })
            .build()
            .unwrap()
    }

    fn full_text(id: &str, pattern: &str) -> DetectionPattern {
        DetectionPattern {
            id: id.to_string(),
            regex: Regex::new(pattern).unwrap(),
            scope: PatternScope::FullText,
            description: String::new(),
            enabled: true,
        }
    }

    fn first_lines(id: &str, pattern: &str) -> DetectionPattern {
        DetectionPattern {
            id: id.to_string(),
            regex: Regex::new(pattern).unwrap(),
            scope: PatternScope::FirstLines,
            description: String::new(),
            enabled: true,
        }
    }

    #[test]
    fn test_match_count_is_cumulative() {
        let registry = single_language("probe", vec![full_text("p", "ab")]);
        let table = score(&registry, "ab ab ab");
        assert_eq!(table.get("probe"), 3);
    }

    #[test]
    fn test_zero_matches_scores_zero() {
        let registry = single_language("probe", vec![full_text("p", "zzz")]);
        let table = score(&registry, "nothing to see");
        assert_eq!(table.get("probe"), 0);
    }

    #[test]
    fn test_first_line_bonus_applied_once_per_pattern() {
        let registry = single_language("probe", vec![first_lines("p", "marker")]);
        // Three occurrences in the window still add the bonus once.
        let table = score(&registry, "marker\nmarker\nmarker");
        assert_eq!(table.get("probe"), FIRST_LINE_BONUS);
    }

    #[test]
    fn test_first_line_window_is_bounded() {
        let registry = single_language("probe", vec![first_lines("p", "marker")]);
        let mut text = "filler\n".repeat(FIRST_LINE_WINDOW);
        text.push_str("marker");
        // The marker sits on line 11, outside the window.
        let table = score(&registry, &text);
        assert_eq!(table.get("probe"), 0);
    }

    #[test]
    fn test_full_text_patterns_see_past_the_window() {
        let registry = single_language("probe", vec![full_text("p", "marker")]);
        let mut text = "filler\n".repeat(FIRST_LINE_WINDOW * 2);
        text.push_str("marker");
        let table = score(&registry, &text);
        assert_eq!(table.get("probe"), 1);
    }

    #[test]
    fn test_disabled_patterns_are_skipped() {
        let mut pattern = full_text("p", "ab");
        pattern.enabled = false;
        let registry = single_language("probe", vec![pattern]);
        let table = score(&registry, "ab ab");
        assert_eq!(table.get("probe"), 0);
    }

    #[test]
    fn test_every_language_gets_an_entry() {
        let registry = LanguageRegistry::builtin();
        let table = score(&registry, "completely neutral text");
        assert_eq!(table.len(), registry.len());
    }

    #[test]
    fn test_first_line_and_content_scores_add() {
        let registry = single_language(
            "probe",
            vec![first_lines("head", "^#!probe"), full_text("body", "probe")],
        );
        let table = score(&registry, "#!probe\nprobe probe");
        // Bonus (10) + window occurrence + two body occurrences.
        assert_eq!(table.get("probe"), FIRST_LINE_BONUS + 3);
    }
}
