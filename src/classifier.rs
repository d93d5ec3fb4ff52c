//! Decision function and the `Classifier` front door.
//!
//! A `Classifier` is an explicitly constructed, immutable value: it owns
//! its registry and override resolver, holds no mutable state, performs no
//! I/O, and is `Send + Sync`, so concurrent calls need no locking. The
//! module-level [`classify`] convenience function routes through a
//! process-wide instance that is built once and read-only thereafter.

use std::sync::OnceLock;

use crate::overrides::OverrideResolver;
use crate::registry::LanguageRegistry;
use crate::scorer;
use crate::types::ScoreTable;

/// Neutral label returned when no language can be determined.
pub const PLAINTEXT: &str = "plaintext";

/// Source-text language classifier.
pub struct Classifier {
    registry: LanguageRegistry,
    overrides: OverrideResolver,
}

impl Classifier {
    /// Classifier over the built-in registry and default allowlist.
    pub fn new() -> Self {
        Self::with_registry(LanguageRegistry::builtin())
    }

    /// Classifier over a substitute registry.
    pub fn with_registry(registry: LanguageRegistry) -> Self {
        Self {
            registry,
            overrides: OverrideResolver::new(),
        }
    }

    /// The registry backing this classifier.
    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Guess the language of `text`.
    ///
    /// Returns an allowlisted language identifier or [`PLAINTEXT`]; never
    /// errors, whatever the input. Deterministic: repeated calls with the
    /// same text return the same label.
    ///
    /// Decision order:
    /// 1. Empty or whitespace-only input is `plaintext`, no scoring.
    /// 2. Override heuristics may short-circuit (config-format anchors).
    /// 3. Otherwise the highest-scoring language wins; ties resolve to the
    ///    earliest registry entry.
    /// 4. A zero top score, or a winner the allowlist cannot render, is
    ///    `plaintext`.
    pub fn classify(&self, text: &str) -> &str {
        if text.trim().is_empty() {
            return PLAINTEXT;
        }

        if let Some(language) = self.overrides.resolve(text) {
            return language;
        }

        let table = scorer::score(&self.registry, text);
        match table.best() {
            Some((language, top)) if top > 0 => {
                if self.registry.is_allowed(language) {
                    log::debug!("classified as {language} (score {top})");
                    language
                } else {
                    log::debug!(
                        "winner {language} (score {top}) is not renderable, coercing to {PLAINTEXT}"
                    );
                    PLAINTEXT
                }
            }
            _ => PLAINTEXT,
        }
    }

    /// Raw score table for `text`, for diagnostics and tests.
    ///
    /// Bypasses the override resolver and the empty-input short-circuit;
    /// this is the scorer's view, not the decision function's.
    pub fn score(&self, text: &str) -> ScoreTable<'_> {
        scorer::score(&self.registry, text)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide classifier used by the module-level convenience functions.
static DEFAULT_CLASSIFIER: OnceLock<Classifier> = OnceLock::new();

fn default_classifier() -> &'static Classifier {
    DEFAULT_CLASSIFIER.get_or_init(Classifier::new)
}

/// Guess the language of `text` using the built-in registry.
///
/// See [`Classifier::classify`] for the decision rules.
pub fn classify(text: &str) -> &'static str {
    default_classifier().classify(text)
}
