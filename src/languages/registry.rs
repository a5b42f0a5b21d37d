use dashmap::DashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::LanguagePatterns;
use crate::error::Result;

/// Language packs shipped with the crate
const BUILTIN_PACKS: &[(&str, &str)] = &[
    ("en", include_str!("data/en.json")),
    ("fr", include_str!("data/fr.json")),
    ("es", include_str!("data/es.json")),
    ("pt", include_str!("data/pt.json")),
    ("de", include_str!("data/de.json")),
    ("it", include_str!("data/it.json")),
];

/// Registry of language patterns, keyed by lowercase language code
///
/// Entries are immutable once registered. Registering a code again swaps the
/// whole entry, which the pattern cache detects and recompiles.
#[derive(Default)]
pub struct LanguageRegistry {
    languages: DashMap<String, Arc<LanguagePatterns>>,
}

impl LanguageRegistry {
    /// Create a registry with no languages
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in language pack
    pub fn builtin() -> Result<Self> {
        let registry = Self::empty();
        for (code, json) in BUILTIN_PACKS {
            let patterns = LanguagePatterns::from_json(json)?;
            debug_assert_eq!(patterns.code, *code);
            registry.register(patterns)?;
        }
        Ok(registry)
    }

    /// Add or replace a language
    pub fn register(&self, mut patterns: LanguagePatterns) -> Result<()> {
        patterns.validate()?;
        patterns.code = patterns.code.trim().to_lowercase();

        let code = patterns.code.clone();
        let replaced = self
            .languages
            .insert(code.clone(), Arc::new(patterns))
            .is_some();

        if replaced {
            tracing::info!(language = %code, "Replaced language patterns");
        } else {
            tracing::debug!(language = %code, "Registered language patterns");
        }

        Ok(())
    }

    /// Load every `*.json` language pack in a directory
    ///
    /// Returns the number of packs registered. A malformed pack aborts the load.
    pub fn load_dir(&self, dir: &Path) -> Result<usize> {
        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json")
            })
            .collect();
        paths.sort();

        for path in &paths {
            let json = fs::read_to_string(path)?;
            let patterns = LanguagePatterns::from_json(&json)?;
            tracing::info!(
                language = %patterns.code,
                path = %path.display(),
                "Loaded language pack"
            );
            self.register(patterns)?;
        }

        Ok(paths.len())
    }

    pub fn get(&self, code: &str) -> Option<Arc<LanguagePatterns>> {
        self.languages
            .get(&code.trim().to_lowercase())
            .map(|entry| entry.value().clone())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.contains_key(&code.trim().to_lowercase())
    }

    /// Registered language codes, sorted
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .languages
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        codes.sort();
        codes
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Map a caller locale onto a registered language code
///
/// "fr-CA" and "pt_BR" resolve to "fr" and "pt". Unknown locales fall back to
/// `default_language`.
pub fn resolve_language_code(
    requested: &str,
    registry: &LanguageRegistry,
    default_language: &str,
) -> String {
    let requested = requested.trim().to_lowercase();

    if registry.contains(&requested) {
        return requested;
    }

    let primary = requested
        .split(|c| c == '-' || c == '_')
        .next()
        .unwrap_or_default();
    if !primary.is_empty() && registry.contains(primary) {
        return primary.to_string();
    }

    if !requested.is_empty() {
        tracing::debug!(
            requested = %requested,
            fallback = %default_language,
            "Unknown language, using fallback"
        );
    }
    default_language.to_string()
}
