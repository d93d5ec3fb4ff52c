//! File-name based language resolution.
//!
//! Independent of content classification: no registry, no scoring. Returns
//! `None` when no rule matches — "could not tell from the name" is a
//! distinct outcome from a positive `plaintext` detection, and callers must
//! not conflate the two.

/// Exact (case-insensitive) file names checked before the suffix rules.
const EXACT_NAMES: &[(&str, &str)] = &[
    ("dockerfile", "dockerfile"),
    ("application.properties", "properties"),
];

/// Ordered case-insensitive suffix rules.
const SUFFIX_RULES: &[(&str, &str)] = &[
    (".js", "javascript"),
    (".ts", "typescript"),
    (".jsx", "javascript"),
    (".tsx", "typescript"),
    (".html", "html"),
    (".htm", "html"),
    (".css", "css"),
    (".json", "json"),
    (".yml", "yaml"),
    (".yaml", "yaml"),
    (".py", "python"),
    (".java", "java"),
    (".c", "c"),
    (".cpp", "cpp"),
    (".cc", "cpp"),
    (".rb", "ruby"),
    (".go", "go"),
    (".php", "php"),
    (".sql", "sql"),
    (".sh", "shell"),
    (".md", "markdown"),
    (".dockerfile", "dockerfile"),
    (".xml", "xml"),
    (".properties", "properties"),
];

/// Map a file name to a language by suffix or exact name.
///
/// Matching is case-insensitive. Returns `None` for empty names and names
/// no rule covers.
pub fn classify_by_file_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return None;
    }
    let lower = name.to_lowercase();

    for (exact, language) in EXACT_NAMES {
        if lower == *exact {
            return Some(language);
        }
    }
    for (suffix, language) in SUFFIX_RULES {
        if lower.ends_with(suffix) {
            return Some(language);
        }
    }
    None
}
