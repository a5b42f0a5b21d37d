/// Final cleanup
///
/// Whatever words survived the earlier stages are filler and get dropped.
/// The `sqrt` keyword is parked behind a private-use sentinel while letters
/// are stripped. Dropping filler can bring "5 + 3 %" together, so the
/// plus/minus percentage forms run once more on the cleaned text.
use lazy_static::lazy_static;
use regex::Regex;

use super::compiled::CompiledLanguageRegex;
use super::percentages::resolve_plus_minus;
use super::pipeline::RewriteStage;

const SQRT: &str = "sqrt";
const SQRT_SENTINEL: &str = "\u{E000}";

lazy_static! {
    static ref QUOTES: Regex = Regex::new(r#"["'`´“”‘’«»„]"#).unwrap();
    static ref SENTENCE_PUNCTUATION: Regex = Regex::new(r"[?!;:¿¡]").unwrap();
    /// A period ending a sentence, not a decimal point
    static ref FULL_STOP: Regex = Regex::new(r"\.(\s|$)").unwrap();
    static ref LETTERS: Regex = Regex::new(r"[\p{L}\p{M}]+").unwrap();
    static ref REPEATED_PLUS: Regex = Regex::new(r"\+(?:\s*\+)+").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

pub struct CleanupStage;

impl RewriteStage for CleanupStage {
    fn name(&self) -> &'static str {
        "cleanup"
    }

    fn rewrite(&self, text: &str, patterns: &CompiledLanguageRegex) -> String {
        resolve_plus_minus(&canonicalize(text), patterns)
    }
}

/// Strip everything the evaluator does not understand
pub fn canonicalize(text: &str) -> String {
    let mut result = text.replace(SQRT, SQRT_SENTINEL);

    result = QUOTES.replace_all(&result, "").into_owned();
    result = SENTENCE_PUNCTUATION.replace_all(&result, " ").into_owned();
    result = FULL_STOP.replace_all(&result, "${1}").into_owned();
    result = LETTERS.replace_all(&result, " ").into_owned();
    result = result.replace(',', " ");

    result = result.replace(SQRT_SENTINEL, SQRT);
    result = REPEATED_PLUS.replace_all(&result, "+").into_owned();
    WHITESPACE.replace_all(&result, " ").trim().to_string()
}
