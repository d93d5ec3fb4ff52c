//! Core data types for the language classifier.

use regex::Regex;

/// Where in the input a detection pattern is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternScope {
    /// Match only against the leading-lines prefix window of the input.
    ///
    /// First-line patterns carry a fixed high-confidence bonus: declarations
    /// like shebangs, doctypes, or XML headers are near-certain language
    /// signals when they appear at the top of a document.
    FirstLines,
    /// Count all non-overlapping matches across the entire input; each match
    /// contributes one point of cumulative evidence.
    FullText,
}

/// A single regex pattern contributing to language detection.
///
/// Each pattern is a tagged value carrying its own compiled matcher; flags
/// (case-insensitivity, multiline anchors) are expressed inline in the
/// pattern source as `(?i)`/`(?m)` groups, so compilation happens exactly
/// once at registry construction.
///
/// Note: `Clone` is not derived because `regex::Regex` does not implement
/// `Clone` cheaply. Use `DetectionPattern::id` for identification instead.
#[derive(Debug)]
pub struct DetectionPattern {
    /// Unique ID for this pattern (for enable/disable and override).
    pub id: String,
    /// The compiled regex pattern.
    pub regex: Regex,
    /// Where in the input to apply this pattern.
    pub scope: PatternScope,
    /// Human-readable description.
    pub description: String,
    /// Whether this pattern is enabled. Disabled patterns are skipped by
    /// the scorer but remain listed for config override by ID.
    pub enabled: bool,
}

/// A language's full detection profile: its patterns plus extension hints.
#[derive(Debug)]
pub struct LanguageDefinition {
    /// Stable language identifier (e.g. "java", "yaml").
    pub language: String,
    /// Detection patterns, both first-line and full-text scoped.
    pub patterns: Vec<DetectionPattern>,
    /// File-name suffixes associated with this language.
    ///
    /// Informational only on the content path; the filename path keeps its
    /// own authoritative table in [`crate::filename`].
    pub extensions: Vec<String>,
}

impl LanguageDefinition {
    /// Number of enabled patterns in this definition.
    pub fn enabled_pattern_count(&self) -> usize {
        self.patterns.iter().filter(|p| p.enabled).count()
    }
}

/// Per-call scoring result: one `(language, score)` entry per registry
/// definition, in registry iteration order.
///
/// Registry order is load-bearing here: [`ScoreTable::best`] returns the
/// first entry holding the maximum score, which makes registry order the
/// documented tie-break rather than an accident of hash iteration. A
/// `ScoreTable` is rebuilt per classification call and never shared across
/// calls or threads.
#[derive(Debug)]
pub struct ScoreTable<'r> {
    entries: Vec<(&'r str, u32)>,
}

impl<'r> ScoreTable<'r> {
    /// Build a table from `(language, score)` pairs in registry order.
    pub(crate) fn new(entries: Vec<(&'r str, u32)>) -> Self {
        Self { entries }
    }

    /// Score for a language, or 0 when the language is not in the table.
    pub fn get(&self, language: &str) -> u32 {
        self.entries
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, score)| *score)
            .unwrap_or(0)
    }

    /// The entry with the strictly highest score.
    ///
    /// Ties resolve to the earliest entry: only a strictly greater score
    /// displaces the current leader.
    pub fn best(&self) -> Option<(&'r str, u32)> {
        let mut best: Option<(&'r str, u32)> = None;
        for &(language, score) in &self.entries {
            match best {
                Some((_, leader)) if score <= leader => {}
                _ => best = Some((language, score)),
            }
        }
        best
    }

    /// Iterate `(language, score)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&'r str, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
