//! Language registry: the ordered, immutable catalogue of definitions.
//!
//! The registry is configuration data, not mutable state. It is assembled
//! once by [`RegistryBuilder`], validated, and read-only thereafter, which
//! makes it safe for unsynchronized concurrent reads. Scoring is additive
//! per language, so registry order does not change which patterns apply —
//! but it IS the documented tie-break when two languages finish with the
//! same score, so order must stay stable.

use std::collections::HashSet;

use crate::languages;
use crate::types::LanguageDefinition;

/// Labels the default host editor can render.
///
/// Every label the built-in content path or the filename path can emit is
/// listed, so classification results are closed over this set by
/// construction. Substitute registries may narrow or extend it via
/// [`RegistryBuilder::allow`] / [`RegistryBuilder::allowlist`].
pub const DEFAULT_ALLOWLIST: &[&str] = &[
    "c",
    "cpp",
    "css",
    "dockerfile",
    "go",
    "html",
    "ini",
    "java",
    "javascript",
    "json",
    "markdown",
    "php",
    "properties",
    "python",
    "ruby",
    "shell",
    "sql",
    "typescript",
    "xml",
    "yaml",
];

/// Errors raised while assembling a [`LanguageRegistry`].
///
/// A malformed registry is a configuration-time defect: it fails loudly
/// here, at construction, never during classification.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two definitions share the same language identifier.
    #[error("duplicate language id: {0}")]
    DuplicateLanguage(String),
    /// A definition carries no patterns at all and could never score.
    #[error("language {0} has no detection patterns")]
    EmptyPatterns(String),
}

/// Ordered, immutable catalogue of language definitions plus the allowlist
/// of labels the host editor can render.
#[derive(Debug)]
pub struct LanguageRegistry {
    definitions: Vec<LanguageDefinition>,
    allowlist: HashSet<String>,
}

impl LanguageRegistry {
    /// The registry of built-in language definitions with the default
    /// allowlist.
    pub fn builtin() -> Self {
        RegistryBuilder::new()
            .definitions(languages::builtin_definitions())
            .build()
            .expect("built-in registry satisfies its own invariants")
    }

    /// Start assembling a registry from scratch.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The definitions, in stable registry order.
    pub fn definitions(&self) -> &[LanguageDefinition] {
        &self.definitions
    }

    /// Whether the host editor can render this label.
    pub fn is_allowed(&self, language: &str) -> bool {
        self.allowlist.contains(language)
    }

    /// Whether a definition exists for this language.
    pub fn contains(&self, language: &str) -> bool {
        self.definitions.iter().any(|d| d.language == language)
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the registry has no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builder for [`LanguageRegistry`] instances.
///
/// Definitions keep their insertion order; [`RegistryBuilder::build`]
/// validates the registry invariants (unique ids, at least one pattern per
/// definition) and produces the immutable registry.
pub struct RegistryBuilder {
    pub(crate) definitions: Vec<LanguageDefinition>,
    pub(crate) allowlist: HashSet<String>,
}

impl RegistryBuilder {
    /// Create a builder with no definitions and the default allowlist.
    pub fn new() -> Self {
        Self {
            definitions: Vec::new(),
            allowlist: DEFAULT_ALLOWLIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Append a definition.
    pub fn definition(mut self, definition: LanguageDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Append multiple definitions, keeping their order.
    pub fn definitions(
        mut self,
        definitions: impl IntoIterator<Item = LanguageDefinition>,
    ) -> Self {
        self.definitions.extend(definitions);
        self
    }

    /// Add a label to the allowlist.
    pub fn allow(mut self, language: impl Into<String>) -> Self {
        self.allowlist.insert(language.into());
        self
    }

    /// Replace the allowlist wholesale.
    pub fn allowlist(mut self, languages: impl IntoIterator<Item = String>) -> Self {
        self.allowlist = languages.into_iter().collect();
        self
    }

    /// Validate and build the registry.
    pub fn build(self) -> Result<LanguageRegistry, RegistryError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for definition in &self.definitions {
            if !seen.insert(definition.language.as_str()) {
                return Err(RegistryError::DuplicateLanguage(
                    definition.language.clone(),
                ));
            }
            if definition.patterns.is_empty() {
                return Err(RegistryError::EmptyPatterns(definition.language.clone()));
            }
        }
        Ok(LanguageRegistry {
            definitions: self.definitions,
            allowlist: self.allowlist,
        })
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
