/// Spoken math normalization pipeline
///
/// A transcript is threaded through a fixed, ordered list of rewrite stages:
/// 1. Number words ("twenty five" → "25")
/// 2. Compound numbers ("2.5 million" → "2500000")
/// 3. Fractions ("3 fourths of 100" → "((3/4) * 100)")
/// 4. Decimal and thousands separators ("1,234.56" → "1234.56")
/// 5. Percentage phrases ("20% of 150" → "(150 * 20 / 100)")
/// 6. Phrase templates and operator words ("add 2 to 3" → "2 + 3")
/// 7. Cleanup (filler words stripped, whitespace collapsed)
///
/// Each stage only sees the output of the previous ones, so the order above
/// is what resolves overlapping patterns.
use lazy_static::lazy_static;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

use super::cache::PatternCache;
use super::cleanup::CleanupStage;
use super::compiled::CompiledLanguageRegex;
use super::compound_numbers::CompoundNumberStage;
use super::decimals::DecimalStage;
use super::fractions::FractionStage;
use super::number_words::NumberWordStage;
use super::operators::OperatorWordStage;
use super::percentages::PercentageStage;
use crate::config::constants::MAX_TRANSCRIPT_LENGTH;
use crate::error::Result;
use crate::languages::LanguageRegistry;

/// One pure `text → text` rewrite
pub trait RewriteStage: Send + Sync {
    /// Stable name used in logs
    fn name(&self) -> &'static str;

    /// Rewrite `text` using the active language's matchers
    ///
    /// A stage whose matchers are absent for the language returns the text
    /// unchanged.
    fn rewrite(&self, text: &str, patterns: &CompiledLanguageRegex) -> String;
}

/// Ordered list of rewrite stages
pub struct Pipeline {
    stages: Vec<Box<dyn RewriteStage>>,
}

impl Pipeline {
    /// The standard seven-stage pipeline
    pub fn standard() -> Self {
        Self {
            stages: vec![
                Box::new(NumberWordStage),
                Box::new(CompoundNumberStage),
                Box::new(FractionStage),
                Box::new(DecimalStage),
                Box::new(PercentageStage),
                Box::new(OperatorWordStage),
                Box::new(CleanupStage),
            ],
        }
    }

    /// A pipeline with a custom stage list (useful for testing a prefix)
    pub fn with_stages(stages: Vec<Box<dyn RewriteStage>>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage in order
    pub fn run(&self, text: &str, patterns: &CompiledLanguageRegex) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |current, stage| {
                let next = stage.rewrite(&current, patterns);
                tracing::trace!(
                    stage = stage.name(),
                    language = patterns.language(),
                    output = %next,
                    "Rewrite stage applied"
                );
                next
            })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

lazy_static! {
    static ref STANDARD_PIPELINE: Pipeline = Pipeline::standard();
}

/// Normalize a spoken transcript into a canonical arithmetic expression
///
/// Never fails: unmatched patterns pass through and leftover words are
/// stripped. Transcripts longer than `MAX_TRANSCRIPT_LENGTH` characters are
/// truncated and lowercased without any rewriting.
pub fn normalize_spoken_math(transcript: &str, patterns: &CompiledLanguageRegex) -> String {
    normalize_with(&STANDARD_PIPELINE, transcript, patterns)
}

fn normalize_with(pipeline: &Pipeline, transcript: &str, patterns: &CompiledLanguageRegex) -> String {
    if let Some(truncated) = length_guard(transcript) {
        return truncated;
    }

    let prepared = prepare_transcript(transcript);
    pipeline.run(&prepared, patterns)
}

/// Truncated, lowercased transcript when the input is too long to rewrite
fn length_guard(transcript: &str) -> Option<String> {
    let length = transcript.chars().count();
    if length <= MAX_TRANSCRIPT_LENGTH {
        return None;
    }

    tracing::warn!(
        length = length,
        limit = MAX_TRANSCRIPT_LENGTH,
        "Transcript too long, skipping normalization"
    );
    let truncated: String = transcript.chars().take(MAX_TRANSCRIPT_LENGTH).collect();
    Some(truncated.to_lowercase())
}

/// NFC, lowercase, and hyphens between letters turned into spaces
///
/// ASR output often writes "twenty-five" or "a-d-d"; a hyphen next to a digit
/// is kept since it may be a minus sign. Dash and minus glyphs are folded to
/// an ASCII hyphen first.
pub fn prepare_transcript(transcript: &str) -> String {
    let chars: Vec<char> = transcript
        .nfc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            // En dash, em dash, minus sign
            '\u{2013}' | '\u{2014}' | '\u{2212}' => '-',
            _ => c,
        })
        .collect();

    let mut result = String::with_capacity(transcript.len());
    for (i, &c) in chars.iter().enumerate() {
        let between_letters = c == '-'
            && i > 0
            && chars[i - 1].is_alphabetic()
            && chars.get(i + 1).map_or(false, |next| next.is_alphabetic());

        result.push(if between_letters { ' ' } else { c });
    }
    result
}

/// Construction root: registry, compiled pattern cache and pipeline
///
/// Share it behind an `Arc`; every method takes `&self`.
pub struct SpokenMathNormalizer {
    registry: Arc<LanguageRegistry>,
    cache: PatternCache,
    pipeline: Pipeline,
}

impl SpokenMathNormalizer {
    pub fn new(registry: Arc<LanguageRegistry>) -> Self {
        Self {
            cache: PatternCache::new(registry.clone()),
            registry,
            pipeline: Pipeline::standard(),
        }
    }

    /// Normalizer over the built-in language packs
    pub fn with_builtin_languages() -> Result<Self> {
        Ok(Self::new(Arc::new(LanguageRegistry::builtin()?)))
    }

    pub fn registry(&self) -> &Arc<LanguageRegistry> {
        &self.registry
    }

    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Compiled pattern set for a language (compiled on first use)
    pub fn compiled(&self, language: &str) -> Result<Arc<CompiledLanguageRegex>> {
        self.cache.get_compiled(language)
    }

    /// Normalize a transcript for an already-resolved language code
    ///
    /// The only error is an unknown language; callers fall back to a
    /// default with `resolve_language_code` first.
    pub fn normalize(&self, transcript: &str, language: &str) -> Result<String> {
        let patterns = self.compiled(language)?;
        Ok(normalize_with(&self.pipeline, transcript, &patterns))
    }
}
