use dashmap::DashMap;
use std::sync::Arc;

use super::compiled::CompiledLanguageRegex;
use crate::error::{NormalizerError, Result};
use crate::languages::LanguageRegistry;

/// Compiled pattern sets indexed by language code
///
/// A language is compiled on first use and reused afterwards. An entry is
/// stale once the registry holds a different `LanguagePatterns` value for the
/// code, in which case it is rebuilt. Two threads missing at the same time
/// both compile and the last insert wins; both results are equivalent.
pub struct PatternCache {
    registry: Arc<LanguageRegistry>,
    entries: DashMap<String, Arc<CompiledLanguageRegex>>,
}

impl PatternCache {
    pub fn new(registry: Arc<LanguageRegistry>) -> Self {
        Self {
            registry,
            entries: DashMap::new(),
        }
    }

    /// Get the compiled pattern set for a language, compiling it if needed
    ///
    /// Does not fall back to another language: an unknown code is an error.
    pub fn get_compiled(&self, language: &str) -> Result<Arc<CompiledLanguageRegex>> {
        let key = language.trim().to_lowercase();
        let current = self
            .registry
            .get(&key)
            .ok_or_else(|| NormalizerError::UnsupportedLanguage(language.to_string()))?;

        // The read guard must be released before inserting into the same shard
        let cached = self
            .entries
            .get(&key)
            .filter(|entry| Arc::ptr_eq(&entry.patterns, &current))
            .map(|entry| entry.value().clone());
        if let Some(compiled) = cached {
            return Ok(compiled);
        }

        let compiled = Arc::new(CompiledLanguageRegex::compile(current)?);
        tracing::debug!(language = %key, "Compiled language patterns");

        self.entries.insert(key, compiled.clone());
        Ok(compiled)
    }

    /// Drop the cached entry for a language
    pub fn invalidate(&self, language: &str) {
        self.entries.remove(&language.trim().to_lowercase());
    }

    /// Number of compiled languages
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
