/// Per-language lexicons for spoken calculator input
///
/// A language is pure data: number words, operator vocabularies, phrase templates
/// and the locale's decimal separator. The built-in packs live as JSON next to
/// this module, so adding a language never touches the rewrite code.
pub mod fractions;
pub mod registry;
pub mod scales;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{NormalizerError, Result};

pub use registry::{resolve_language_code, LanguageRegistry};

/// Decimal separator used by a locale when writing numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecimalSeparator {
    /// "3.5" (thousands grouped with commas)
    #[default]
    Period,
    /// "3,5" (thousands grouped with periods)
    Comma,
}

/// A verbal construct with two numeric slots, e.g. "add A to B"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseTemplate {
    /// Leading verbs ("add", "ajoute")
    pub verbs: Vec<String>,
    /// Words between the two operands ("to", "à")
    pub connectives: Vec<String>,
}

impl PhraseTemplate {
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty() || self.connectives.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseTemplates {
    pub add: PhraseTemplate,
    pub subtract: PhraseTemplate,
    pub multiply: PhraseTemplate,
    pub divide: PhraseTemplate,
}

/// Immutable lexicon for one language
///
/// Every list may be empty; an empty list means the matching rewrite is
/// skipped for this language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguagePatterns {
    pub code: String,
    pub name: String,
    pub decimal_separator: DecimalSeparator,
    /// Spoken number word → digit string (misspellings allowed as extra keys)
    pub numbers: BTreeMap<String, String>,
    /// Words joining number words inside one number ("and", "y", "e")
    pub number_connectors: Vec<String>,
    /// Spoken decimal point ("point", "virgule")
    pub decimal_words: Vec<String>,
    pub addition: Vec<String>,
    pub subtraction: Vec<String>,
    pub multiplication: Vec<String>,
    pub division: Vec<String>,
    pub percent_of: Vec<String>,
    pub percentage: Vec<String>,
    pub power: Vec<String>,
    pub squared: Vec<String>,
    pub sqrt: Vec<String>,
    pub open_paren: Vec<String>,
    pub close_paren: Vec<String>,
    /// "of" connective for fractions and percentages
    pub of_words: Vec<String>,
    pub phrases: PhraseTemplates,
}

impl LanguagePatterns {
    /// Parse a language pack from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let patterns: LanguagePatterns = serde_json::from_str(json)?;
        patterns.validate()?;
        Ok(patterns)
    }

    /// Check the invariants the compiler relies on
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(NormalizerError::LanguagePack(
                "language code cannot be empty".to_string(),
            ));
        }

        for (word, digits) in &self.numbers {
            if word.trim().is_empty() {
                return Err(NormalizerError::LanguagePack(format!(
                    "'{}': empty number word",
                    self.code
                )));
            }
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(NormalizerError::LanguagePack(format!(
                    "'{}': number word '{}' maps to non-digit value '{}'",
                    self.code, word, digits
                )));
            }
        }

        Ok(())
    }
}
