//! Heuristic source-text language classification for editor syntax-mode
//! selection.
//!
//! Given an arbitrary blob of text, [`classify`] guesses which
//! programming/markup/config language it is written in from superficial
//! lexical cues, so a downstream editor can pick the right highlighting
//! mode. The neutral `plaintext` label is a first-class outcome, not an
//! error. A separate path, [`classify_by_file_name`], maps a file name to
//! a language without inspecting content and returns `None` (distinct from
//! `plaintext`) when the name tells it nothing.
//!
//! This is not a compiler front end and not a tokenizer; it never
//! validates that input is grammatically well-formed.
//!
//! # Module Structure
//!
//! The classifier is organized into four layers, consumed leaf-first:
//!
//! - [`languages`] + [`registry`] — the ordered, immutable catalogue of
//!   per-language detection patterns (one module per language) and the
//!   allowlist of labels the host editor can render.
//! - [`scorer`] — evaluates every registry pattern against an input and
//!   produces a per-language score table.
//! - [`overrides`] — short-circuit heuristics for config formats that
//!   generic scoring cannot tell apart (properties vs. yaml vs. json).
//! - [`classifier`] — the decision function tying the layers together,
//!   plus the filename path in [`filename`].
//!
//! User pattern overrides and additions load from YAML via [`config`].
//!
//! # Quick start
//!
//! ```
//! assert_eq!(langsniff::classify("#!/bin/bash\necho hello"), "shell");
//! assert_eq!(langsniff::classify("apiVersion: v1\nkind: Pod"), "yaml");
//! assert_eq!(langsniff::classify(""), langsniff::PLAINTEXT);
//!
//! assert_eq!(langsniff::classify_by_file_name("main.py"), Some("python"));
//! assert_eq!(langsniff::classify_by_file_name("weird.xyz"), None);
//! ```
//!
//! # Concurrency
//!
//! Classification is a pure, synchronous function of its input. The only
//! shared data is the immutable pattern registry, safe for unsynchronized
//! concurrent reads; [`Classifier`] is `Send + Sync`.

pub mod classifier;
pub mod config;
pub mod filename;
pub mod languages;
pub mod overrides;
pub mod registry;
pub mod scorer;
pub mod types;

// Re-export the classification surface for convenience
pub use classifier::{Classifier, PLAINTEXT, classify};
pub use config::{ClassifierConfig, ConfigError, LanguageRulesConfig, PatternOverride, UserPattern};
pub use filename::classify_by_file_name;
pub use overrides::OverrideResolver;
pub use registry::{DEFAULT_ALLOWLIST, LanguageRegistry, RegistryBuilder, RegistryError};
pub use scorer::{FIRST_LINE_BONUS, FIRST_LINE_WINDOW, score};
pub use types::{DetectionPattern, LanguageDefinition, PatternScope, ScoreTable};
