//! Short-circuit overrides for ambiguous config formats.
//!
//! Generic pattern scoring under-discriminates between `.properties`,
//! `.yaml`, and `.json`: all three are little more than "key: value" text.
//! These heuristics resolve that ambiguity with format-specific anchors
//! that are extremely unlikely to appear in any other language, and they
//! run BEFORE scoring — a hit returns immediately instead of contributing
//! weight. Keep that separation: short-circuit and cumulative semantics do
//! not mix.

use regex::Regex;

/// Pre-scoring override heuristics.
///
/// All patterns compile once at construction; `resolve` is read-only and
/// safe to call concurrently.
#[derive(Debug)]
pub struct OverrideResolver {
    filename_marker: Regex,
    properties_suffix: Regex,
    yaml_suffix: Regex,
    json_suffix: Regex,
    spring_properties: Regex,
    kubernetes_keys: Regex,
}

impl OverrideResolver {
    pub fn new() -> Self {
        Self {
            filename_marker: Regex::new(
                r#"(?m)filename="([^"]+)"|name="([^"]+)"|^application\.(properties|ya?ml)$"#,
            )
            .expect("regex pattern is valid and should always compile"),
            properties_suffix: Regex::new(r"(?i)\.properties$")
                .expect("regex pattern is valid and should always compile"),
            yaml_suffix: Regex::new(r"(?i)\.ya?ml$")
                .expect("regex pattern is valid and should always compile"),
            json_suffix: Regex::new(r"(?i)\.json$")
                .expect("regex pattern is valid and should always compile"),
            spring_properties: Regex::new(r"(?m)^(server\.port|spring\.datasource|logging\.level)")
                .expect("regex pattern is valid and should always compile"),
            kubernetes_keys: Regex::new(r"(?m)^(apiVersion|kind|metadata|spec):")
                .expect("regex pattern is valid and should always compile"),
        }
    }

    /// Resolve a language without scoring, or `None` to fall through.
    ///
    /// Evaluation order:
    /// 1. Embedded filename marker (`filename="…"`, `name="…"`, or a bare
    ///    `application.properties`/`.yml`/`.yaml` line) — classify the
    ///    implied file name by suffix. Unrecognized suffixes fall through
    ///    rather than forcing a result.
    /// 2. Spring-style properties prefixes at line start.
    /// 3. Kubernetes-manifest top-level keys at line start.
    pub fn resolve(&self, text: &str) -> Option<&'static str> {
        if let Some(captures) = self.filename_marker.captures(text) {
            let implied = captures
                .get(1)
                .or_else(|| captures.get(2))
                .map(|m| m.as_str())
                .unwrap_or_else(|| captures.get(0).map_or("", |m| m.as_str()));
            if self.properties_suffix.is_match(implied) {
                log::debug!("override: embedded filename {implied:?} -> properties");
                return Some("properties");
            }
            if self.yaml_suffix.is_match(implied) {
                log::debug!("override: embedded filename {implied:?} -> yaml");
                return Some("yaml");
            }
            if self.json_suffix.is_match(implied) {
                log::debug!("override: embedded filename {implied:?} -> json");
                return Some("json");
            }
        }

        if self.spring_properties.is_match(text) {
            log::debug!("override: spring-style properties prefix -> properties");
            return Some("properties");
        }
        if self.kubernetes_keys.is_match(text) {
            log::debug!("override: kubernetes manifest key -> yaml");
            return Some("yaml");
        }

        None
    }
}

impl Default for OverrideResolver {
    fn default() -> Self {
        Self::new()
    }
}
