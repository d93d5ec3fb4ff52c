//! User configuration for detection patterns.
//!
//! Maps to a YAML rule file of per-language pattern overrides and
//! additions:
//!
//! ```yaml
//! languages:
//!   yaml:
//!     overrides:
//!       - id: yaml_doc_start
//!         enabled: false
//!     additional:
//!       - id: yaml_anchor
//!         pattern: '&[a-zA-Z0-9_-]+'
//!         description: "YAML anchor"
//!   hcl:
//!     additional:
//!       - id: hcl_block
//!         pattern: '(?m)^resource\s+"'
//! ```
//!
//! Built-in pattern IDs are stable and documented on each language module;
//! an override that names an unknown ID is ignored. A language ID not in
//! the built-in set creates a new registry entry appended after the
//! built-ins (sorted by language ID for deterministic tie-break order).

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::registry::RegistryBuilder;
use crate::types::{DetectionPattern, LanguageDefinition, PatternScope};

fn default_true() -> bool {
    true
}

fn default_scope() -> String {
    "full_text".to_string()
}

/// A user-defined detection pattern (YAML form).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserPattern {
    /// Unique ID for this pattern.
    pub id: String,
    /// Regex source; inline `(?i)`/`(?m)` groups control flags.
    pub pattern: String,
    /// "full_text" (default) or "first_lines".
    #[serde(default = "default_scope")]
    pub scope: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Whether this pattern starts enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Patches an existing built-in pattern by ID.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PatternOverride {
    /// The ID of the pattern to override.
    pub id: String,
    /// If `Some`, override the pattern's enabled state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Per-language pattern overrides and additions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LanguageRulesConfig {
    /// Overrides applied to built-in patterns.
    #[serde(default)]
    pub overrides: Vec<PatternOverride>,
    /// Additional user-defined patterns, appended after the built-ins.
    #[serde(default)]
    pub additional: Vec<UserPattern>,
}

/// Top-level classifier configuration, keyed by language ID.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Pattern rules per language.
    #[serde(default)]
    pub languages: HashMap<String, LanguageRulesConfig>,
}

/// Errors loading or applying classifier configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred reading the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),
    /// The config file contained invalid YAML.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
    /// A user pattern's regex failed to compile.
    #[error("invalid regex in pattern {id}: {source}")]
    InvalidPattern {
        /// ID of the offending pattern.
        id: String,
        /// The underlying compile error.
        #[source]
        source: regex::Error,
    },
}

impl ClassifierConfig {
    /// Parse a config from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load a config from a YAML file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }
}

/// Parse a scope string from config into the runtime enum.
fn parse_scope(scope: &str) -> PatternScope {
    match scope {
        "first_lines" => PatternScope::FirstLines,
        _ => PatternScope::FullText, // default
    }
}

/// Compile a user pattern into a runtime `DetectionPattern`.
fn parse_user_pattern(user: &UserPattern) -> Result<DetectionPattern, ConfigError> {
    let regex = regex::Regex::new(&user.pattern).map_err(|source| ConfigError::InvalidPattern {
        id: user.id.clone(),
        source,
    })?;
    Ok(DetectionPattern {
        id: user.id.clone(),
        regex,
        scope: parse_scope(&user.scope),
        description: user.description.clone(),
        enabled: user.enabled,
    })
}

impl RegistryBuilder {
    /// Merge config overrides and additional patterns into this builder.
    ///
    /// Overrides patch built-in patterns in place (unknown IDs are
    /// ignored); additional patterns are appended after the built-ins.
    /// Languages with no existing definition are created and appended in
    /// sorted-by-ID order so registry order stays deterministic.
    pub fn apply_config(mut self, config: &ClassifierConfig) -> Result<Self, ConfigError> {
        let mut language_ids: Vec<&String> = config.languages.keys().collect();
        language_ids.sort();

        for language in language_ids {
            let rules = &config.languages[language];
            let additional: Vec<DetectionPattern> = rules
                .additional
                .iter()
                .map(parse_user_pattern)
                .collect::<Result<_, _>>()?;

            let existing = self
                .definitions
                .iter()
                .position(|d| d.language == *language);
            match existing {
                Some(index) => {
                    let definition = &mut self.definitions[index];
                    for patch in &rules.overrides {
                        if let Some(pattern) =
                            definition.patterns.iter_mut().find(|p| p.id == patch.id)
                        {
                            if let Some(enabled) = patch.enabled {
                                pattern.enabled = enabled;
                            }
                        }
                    }
                    definition.patterns.extend(additional);
                }
                None => {
                    if additional.is_empty() {
                        // Overrides alone cannot conjure a language.
                        continue;
                    }
                    self.definitions.push(LanguageDefinition {
                        language: language.clone(),
                        patterns: additional,
                        extensions: vec![],
                    });
                }
            }
        }
        Ok(self)
    }
}
